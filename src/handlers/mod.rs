pub mod catalog;
pub mod health;
pub mod metrics_handler;
pub mod orders;
pub mod quotes;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::Config;
use crate::orders::OrderIntake;

/// Shared state for the API handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
    pub intake: OrderIntake,
}
