//! Error types for store access, routing and the request-level service.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("totem {0} not found")]
    TotemNotFound(i64),
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no receptions available")]
    NoReceptions,
    #[error("no path found")]
    Unreachable,
    #[error("totem {0} is not part of the campus graph")]
    SourceNotInGraph(i64),
}

#[derive(Debug, Error)]
pub enum NearestPathError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// JSON body returned to API clients on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl NearestPathError {
    /// HTTP status the API layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            NearestPathError::Route(RouteError::SourceNotInGraph(_)) => 500,
            NearestPathError::Route(_) => 404,
            NearestPathError::Store(StoreError::TotemNotFound(_)) => 404,
            NearestPathError::Store(_) => 502,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let error = match self {
            NearestPathError::Route(RouteError::NoReceptions) => {
                "No hay recepciones disponibles en este campus".to_string()
            }
            NearestPathError::Route(RouteError::Unreachable) => {
                "No se encontró un camino hacia una recepción".to_string()
            }
            NearestPathError::Store(StoreError::TotemNotFound(_)) => "TotemQR no encontrado".to_string(),
            other => other.to_string(),
        };
        ErrorBody { error }
    }
}
