//! Domain events published by the catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DisplayName, MovieId, ReleaseYear};

/// Contract implemented by every event handed to the bus
pub trait DomainEvent {
    /// Stable event name used for routing
    fn kind(&self) -> &'static str;

    /// Identifier of the aggregate the event belongs to
    fn aggregate_id(&self) -> &str;
}

/// A movie was added to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCreated {
    #[serde(rename = "movie_id")]
    pub id: String,
    pub display_name: String,
    pub director: String,
    pub release_year: i32,
    pub create_time: DateTime<Utc>,
}

impl MovieCreated {
    pub fn new(id: MovieId, name: DisplayName, director: DisplayName, year: ReleaseYear) -> Self {
        Self {
            id: id.into(),
            display_name: name.into(),
            director: director.into(),
            release_year: year.into(),
            create_time: Utc::now(),
        }
    }
}

impl DomainEvent for MovieCreated {
    fn kind(&self) -> &'static str {
        "movie-created"
    }

    fn aggregate_id(&self) -> &str {
        &self.id
    }
}
