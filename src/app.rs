use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::GeminiSourceFinder;
use crate::core::interfaces::adapters::SourceFinder;
use crate::core::orchestrators::{SearchMessage, SearchOrchestrator};
use crate::presentation::app_theme;
use crate::user_settings::UserSettings;

pub struct SourceRadarApp {
    orchestrator: SearchOrchestrator,
}

impl SourceRadarApp {
    pub fn build() -> (Self, Task<SearchMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let source_finder: Arc<dyn SourceFinder> =
            Arc::new(GeminiSourceFinder::build_from_env(settings.model.clone()));

        let orchestrator = SearchOrchestrator::build(source_finder, settings);

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: SearchMessage) -> Task<SearchMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, SearchMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(self.orchestrator.theme_mode())
    }
}
