//! PlantVision
//!
//! Plant lookup web front-end over the Perenual species-list API.
//!
//! - `plant`: serde model of plant records and the response envelope
//! - `classify`: watering/sunlight badge colours
//! - `fallback`: embedded reference plants used when the API is unavailable
//! - `search_gateway`: outbound search with silent fallback
//! - `controller`: search lifecycle and notifications
//! - `presenter`: view selection and card view models
//! - `api_server` / `web`: Axum router, Askama pages, JSON API

pub mod plant;
pub mod classify;
pub mod fallback;
pub mod config;
pub mod search_gateway;
pub mod controller;
pub mod presenter;
pub mod api_server;
pub mod web;

// Re-export commonly used types
pub use plant::{PlantImage, PlantRecord, SpeciesListResponse};
pub use classify::{classify_sunlight, classify_watering, DisplayClass};
pub use config::{GatewayConfig, ServerConfig};
pub use search_gateway::{PlantSearchGateway, SearchOutcome, SearchSource};
pub use controller::{Notification, SearchController, SearchQuery};
pub use presenter::{select_view, PlantCard, ResultGrid, ResultsView, SearchState};
pub use api_server::{AppState, create_router};
