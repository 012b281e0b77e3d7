//! Seams to the outside world.
//!
//! The router never talks to a database directly; it reads campus data
//! through [`SpatialPointStore`]. Implementations live in `store` (in-memory
//! snapshots) and `rest` (the backend's REST API).

use crate::error::StoreError;
use crate::model::{PathRecord, ReceptionPoint, Totem};

/// Read-only access to persisted totems, receptions and paths.
///
/// All list queries are scoped to one campus. An unknown campus yields empty
/// lists, not an error.
pub trait SpatialPointStore {
    fn list_paths(&self, campus: &str) -> Result<Vec<PathRecord>, StoreError>;

    fn list_totems(&self, campus: &str) -> Result<Vec<Totem>, StoreError>;

    fn list_receptions(&self, campus: &str) -> Result<Vec<ReceptionPoint>, StoreError>;

    /// Look up a single totem, `StoreError::TotemNotFound` when absent.
    fn get_totem(&self, id: i64) -> Result<Totem, StoreError>;
}
