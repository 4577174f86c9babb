//! # Web API Application State
//!
//! Shared state handed to every handler.

use crate::config::ServiceConfig;
use crate::database::ItemRepository;
use crate::execution::{BatchCoordinator, UpdateItemProcessor};
use crate::services::ItemService;
use std::sync::Arc;
use tracing::debug;

pub struct AppState {
    pub config: ServiceConfig,
    pub item_service: ItemService,
}

impl AppState {
    pub fn new(config: ServiceConfig, item_service: ItemService) -> Self {
        Self {
            config,
            item_service,
        }
    }

    /// Wire the worker, coordinator and service over a repository
    pub fn from_repository(config: ServiceConfig, repository: Arc<dyn ItemRepository>) -> Self {
        let processor =
            UpdateItemProcessor::with_delay(repository.clone(), config.processing_delay());
        let success_counter = processor.success_counter();
        let coordinator = BatchCoordinator::new(Arc::new(processor));

        debug!(
            processing_delay_ms = config.processing_delay_ms,
            "Item processing pipeline assembled"
        );

        Self::new(config, ItemService::new(repository, coordinator, success_counter))
    }

    pub fn item_service(&self) -> &ItemService {
        &self.item_service
    }
}
