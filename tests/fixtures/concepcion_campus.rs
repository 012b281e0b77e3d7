//! Walking network over a university campus in Concepción, Chile.
//!
//! Coordinates are laid out on a 0.001° grid around the main square so
//! that expected routes can be worked out by hand:
//!
//! ```text
//!   S3 ---- S2
//!            |
//!           S1
//!            |
//!   W0 ---- W1 ---- W2 ---- W3
//! ```
//!
//! The library reception sits at S3, which is closer to the entrance totem
//! in a straight line but farther along the walks than the forum reception
//! at W3.

#![allow(dead_code)]

use campus_router::store::MemoryStore;

use super::campus_builder::CampusBuilder;

pub const CAMPUS: &str = "concepcion";

pub const W0: (f64, f64) = (-36.8290, -73.0370);
pub const W1: (f64, f64) = (-36.8290, -73.0360);
pub const W2: (f64, f64) = (-36.8290, -73.0350);
pub const W3: (f64, f64) = (-36.8290, -73.0340);
pub const S1: (f64, f64) = (-36.8280, -73.0350);
pub const S2: (f64, f64) = (-36.8270, -73.0350);
pub const S3: (f64, f64) = (-36.8270, -73.0360);

pub const ENTRANCE_TOTEM: i64 = 1;
pub const CHAPEL_TOTEM: i64 = 2;
pub const LIBRARY_RECEPTION: i64 = 10;
pub const FORUM_RECEPTION: i64 = 11;
pub const ANNEX_RECEPTION: i64 = 12;

pub fn campus() -> MemoryStore {
    CampusBuilder::new(CAMPUS)
        .path(&[W0, W1, W2, W3])
        .path(&[W2, S1, S2, S3])
        // Entrance totem a couple of meters off W0
        .totem(ENTRANCE_TOTEM, -36.82901, -73.03702)
        // No walk reaches the chapel
        .totem(CHAPEL_TOTEM, -36.8310, -73.0390)
        .reception(LIBRARY_RECEPTION, -36.82702, -73.03601)
        .reception(FORUM_RECEPTION, W3.0, W3.1)
        // Annex is right next to the entrance but off the network
        .reception(ANNEX_RECEPTION, -36.8295, -73.0375)
        .build()
}
