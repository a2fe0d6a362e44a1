use std::sync::Arc;

use bitebot_core::application::BiteBotService;

use crate::args::Args;

#[derive(Clone, Debug)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BiteBotService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BiteBotService) -> Self {
        Self { args, service }
    }
}
