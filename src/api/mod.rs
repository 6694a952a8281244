use crate::{
    config::Config,
    store::{GardenStore, PlantStore},
};

pub mod handlers;
pub mod openapi;
pub mod routes;

/// Shared state handed to every handler through `web::Data`.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: GardenStore,
    pub plants: PlantStore,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: GardenStore::new(),
            plants: PlantStore::seeded(),
            config,
        }
    }
}
