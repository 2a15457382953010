use crate::application::caption::service::CaptionService;
use crate::config::Settings;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Settings,
    pub service_caption: Arc<CaptionService>,
}
impl AppState {
    pub fn new(settings: Settings, service_caption: CaptionService) -> Self {
        AppState {
            settings,
            service_caption: Arc::new(service_caption),
        }
    }
}
