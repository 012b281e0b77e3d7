//! Records exchanged with the spatial point store and the API layer.
//!
//! Field names follow the backend's JSON (`imageUrl`, `order`, ...).

use serde::{Deserialize, Serialize};

/// A coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// True when both axes differ by strictly less than `tolerance`.
    pub fn within(&self, other: &Point, tolerance: f64) -> bool {
        (self.latitude - other.latitude).abs() < tolerance
            && (self.longitude - other.longitude).abs() < tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

/// One vertex of a stored path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPointRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub order: i32,
}

impl PathPointRecord {
    pub fn point(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}

/// A named walking path as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub points: Vec<PathPointRecord>,
    #[serde(default)]
    pub campus: String,
}

fn default_active() -> bool {
    true
}

/// A QR totem, the source of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totem {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub campus: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Totem {
    pub fn point(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}

/// A staffed reception point, the target of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceptionPoint {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub campus: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl ReceptionPoint {
    pub fn point(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}

/// One point of a computed route, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub order: i32,
}

/// A computed route from a totem to a reception. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    pub name: String,
    pub points: Vec<RoutePoint>,
    pub campus: String,
}

impl RoutePath {
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.latitude, p.longitude)).collect()
    }

    /// Walking length along the route in kilometers (great-circle per leg).
    pub fn approx_length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|leg| {
                crate::distance::haversine_km(
                    Point::new(leg[0].latitude, leg[0].longitude),
                    Point::new(leg[1].latitude, leg[1].longitude),
                )
            })
            .sum()
    }
}
