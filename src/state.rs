use crate::config::AppConfig;
use crate::services::ai::NarrativeGenerator;
use crate::services::provider::TravelProvider;

pub struct AppState {
    pub config: AppConfig,
    pub provider: Box<dyn TravelProvider>,
    pub generator: Box<dyn NarrativeGenerator>,
}
