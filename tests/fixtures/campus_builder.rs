//! Builder for campus snapshots with sensible defaults.

#![allow(dead_code)]

use campus_router::model::{PathPointRecord, PathRecord, ReceptionPoint, Totem};
use campus_router::store::MemoryStore;

#[derive(Debug, Clone)]
pub struct CampusBuilder {
    campus: String,
    store: MemoryStore,
    next_path_id: i64,
}

impl CampusBuilder {
    pub fn new(campus: &str) -> Self {
        Self {
            campus: campus.to_string(),
            store: MemoryStore::default(),
            next_path_id: 1,
        }
    }

    /// Continue an existing snapshot under a different campus tag.
    pub fn extend(store: MemoryStore, campus: &str) -> Self {
        let next_path_id = store.paths.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            campus: campus.to_string(),
            store,
            next_path_id,
        }
    }

    /// Adds a polyline; `order` follows the slice order starting at 1.
    pub fn path(mut self, coords: &[(f64, f64)]) -> Self {
        let id = self.next_path_id;
        self.next_path_id += 1;
        self.store = self.store.with_path(PathRecord {
            id,
            name: format!("Camino {id}"),
            points: coords
                .iter()
                .enumerate()
                .map(|(i, &(latitude, longitude))| PathPointRecord {
                    latitude,
                    longitude,
                    order: i as i32 + 1,
                })
                .collect(),
            campus: self.campus.clone(),
        });
        self
    }

    pub fn totem(mut self, id: i64, latitude: f64, longitude: f64) -> Self {
        self.store = self.store.with_totem(Totem {
            id,
            latitude,
            longitude,
            name: format!("Totem {id}"),
            description: String::new(),
            image_url: String::new(),
            campus: self.campus.clone(),
            active: true,
        });
        self
    }

    pub fn reception(mut self, id: i64, latitude: f64, longitude: f64) -> Self {
        self.store = self.store.with_reception(reception(id, &self.campus, latitude, longitude));
        self
    }

    pub fn closed_reception(mut self, id: i64, latitude: f64, longitude: f64) -> Self {
        let mut closed = reception(id, &self.campus, latitude, longitude);
        closed.active = false;
        self.store = self.store.with_reception(closed);
        self
    }

    pub fn build(self) -> MemoryStore {
        self.store
    }
}

fn reception(id: i64, campus: &str, latitude: f64, longitude: f64) -> ReceptionPoint {
    ReceptionPoint {
        id,
        latitude,
        longitude,
        name: format!("Recepción {id}"),
        description: String::new(),
        image_url: String::new(),
        campus: campus.to_string(),
        active: true,
    }
}

/// Deterministic pseudo-random sequence for property-style tests.
#[derive(Debug, Clone)]
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}
