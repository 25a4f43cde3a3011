use std::sync::Arc;
use std::time::Duration;

use iced::widget::{button, column, container, row, scrollable, text, text_input, Row, Space};
use iced::{Alignment, Element, Length, Task};

use crate::core::interfaces::adapters::SourceFinder;
use crate::core::models::SearchResult;
use crate::core::search_error::SearchError;
use crate::global_constants;
use crate::presentation::{app_theme, results_view};
use crate::user_settings::{ThemeMode, UserSettings};

/// Page state. `Success` and `Error` are mutually exclusive: a failed search
/// replaces whatever result was on screen.
#[derive(Debug)]
pub enum SearchState {
    Idle,
    Loading,
    Success(SearchResult),
    Error(String),
}

#[derive(Debug, Clone)]
pub enum SearchMessage {
    QueryChanged(String),
    SubmitSearch,
    SuggestionPicked(String),
    SearchCompleted(Result<SearchResult, SearchError>),
    OpenUrl(String),
}

pub struct SearchOrchestrator {
    source_finder: Arc<dyn SourceFinder>,
    settings: UserSettings,
    query: String,
    state: SearchState,
}

impl SearchOrchestrator {
    pub fn build(source_finder: Arc<dyn SourceFinder>, settings: UserSettings) -> Self {
        Self {
            source_finder,
            settings,
            query: String::new(),
            state: SearchState::Idle,
        }
    }

    pub fn theme_mode(&self) -> &ThemeMode {
        &self.settings.theme_mode
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading)
    }

    pub fn update(&mut self, message: SearchMessage) -> Task<SearchMessage> {
        match message {
            SearchMessage::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
            SearchMessage::SubmitSearch => self.handle_submit_search(),
            SearchMessage::SuggestionPicked(topic) => {
                log::info!("[ORCHESTRATOR] Suggestion picked: {}", topic);
                self.query = topic;
                self.handle_submit_search()
            }
            SearchMessage::SearchCompleted(outcome) => self.handle_search_completed(outcome),
            SearchMessage::OpenUrl(url) => self.handle_open_url(url),
        }
    }

    fn handle_submit_search(&mut self) -> Task<SearchMessage> {
        let topic = self.query.trim().to_string();

        if topic.is_empty() {
            log::debug!("[ORCHESTRATOR] Ignoring submit with empty query");
            return Task::none();
        }

        if self.is_loading() {
            log::warn!("[ORCHESTRATOR] Search already in flight, ignoring submit");
            return Task::none();
        }

        log::info!("[ORCHESTRATOR] Starting search for: {}", topic);
        self.state = SearchState::Loading;

        let source_finder = Arc::clone(&self.source_finder);
        let timeout = Duration::from_secs(self.settings.request_timeout_secs);

        Task::future(async move {
            let outcome = match tokio::time::timeout(timeout, source_finder.find_sources(&topic))
                .await
            {
                Ok(outcome) => outcome,
                Err(_) => Err(SearchError::Timeout(timeout.as_secs())),
            };

            SearchMessage::SearchCompleted(outcome)
        })
    }

    fn handle_search_completed(
        &mut self,
        outcome: Result<SearchResult, SearchError>,
    ) -> Task<SearchMessage> {
        match outcome {
            Ok(result) => {
                log::info!(
                    "[ORCHESTRATOR] Search completed with {} resources",
                    result.resources.len()
                );
                self.state = SearchState::Success(result);
            }
            Err(error) => {
                log::error!("[ORCHESTRATOR] Search failed: {}", error);
                self.state = SearchState::Error(error.user_message().to_string());
            }
        }
        Task::none()
    }

    fn handle_open_url(&mut self, url: String) -> Task<SearchMessage> {
        log::info!("[ORCHESTRATOR] Opening URL: {}", url);
        if let Err(e) = open::that(&url) {
            log::error!("[ORCHESTRATOR] Failed to open URL {}: {}", url, e);
        }
        Task::none()
    }

    pub fn render_view(&self) -> Element<'_, SearchMessage> {
        let body: Element<'_, SearchMessage> = match &self.state {
            SearchState::Idle => self.render_hero(),
            SearchState::Loading => self.render_loading_skeleton(),
            SearchState::Success(result) => results_view::render_results(result),
            SearchState::Error(message) => column![
                self.render_error_banner(message),
                Space::new().height(Length::Fixed(24.0)),
                self.render_hero(),
            ]
            .into(),
        };

        let content = column![
            self.render_header(),
            Space::new().height(Length::Fixed(24.0)),
            self.render_search_bar(),
            Space::new().height(Length::Fixed(32.0)),
            body,
            Space::new().height(Length::Fixed(32.0)),
            self.render_footer(),
        ]
        .padding(40)
        .width(Length::Fill);

        scrollable(container(content).width(Length::Fill).center_x(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    fn render_header(&self) -> Element<'_, SearchMessage> {
        let title = text(global_constants::APPLICATION_TITLE).size(36);
        let subtitle = text(global_constants::HEADER_SUBTITLE)
            .size(15)
            .style(app_theme::muted_text_style);

        column![title, subtitle]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    }

    fn render_search_bar(&self) -> Element<'_, SearchMessage> {
        let input = text_input(global_constants::SEARCH_PLACEHOLDER, &self.query)
            .on_input(SearchMessage::QueryChanged)
            .on_submit(SearchMessage::SubmitSearch)
            .padding(14)
            .size(16);

        let submit_message = (!self.is_loading()).then_some(SearchMessage::SubmitSearch);
        let submit_btn = button(text(global_constants::SEARCH_BUTTON_LABEL).size(16))
            .padding([14, 28])
            .style(app_theme::primary_button_style)
            .on_press_maybe(submit_message);

        row![input, submit_btn]
            .spacing(12)
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }

    fn render_hero(&self) -> Element<'_, SearchMessage> {
        let prompt = text(global_constants::HERO_EMPTY_STATE)
            .size(18)
            .style(app_theme::muted_text_style);

        let mut suggestions = Row::new().spacing(8);
        for topic in global_constants::SUGGESTED_TOPICS {
            suggestions = suggestions.push(
                button(text(*topic).size(13))
                    .padding([6, 14])
                    .style(app_theme::chip_button_style)
                    .on_press(SearchMessage::SuggestionPicked(topic.to_string())),
            );
        }

        column![
            Space::new().height(Length::Fixed(40.0)),
            prompt,
            Space::new().height(Length::Fixed(16.0)),
            suggestions,
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }

    fn render_loading_skeleton(&self) -> Element<'_, SearchMessage> {
        let block = |height: f32| {
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .style(app_theme::skeleton_block_style)
        };

        column![
            block(120.0),
            row![block(260.0), block(260.0)].spacing(24),
        ]
        .spacing(24)
        .width(Length::Fill)
        .into()
    }

    fn render_error_banner<'a>(&'a self, message: &'a str) -> Element<'a, SearchMessage> {
        container(text(message).size(14))
            .padding(16)
            .width(Length::Fill)
            .style(app_theme::error_banner_style)
            .into()
    }

    fn render_footer(&self) -> Element<'_, SearchMessage> {
        container(
            text(global_constants::FOOTER_DISCLAIMER)
                .size(11)
                .style(app_theme::faint_text_style),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ResourceCategory, ResourceRecord};
    use async_trait::async_trait;

    struct MockSourceFinder {
        outcome: Result<SearchResult, SearchError>,
    }

    #[async_trait]
    impl SourceFinder for MockSourceFinder {
        async fn find_sources(&self, _topic: &str) -> Result<SearchResult, SearchError> {
            self.outcome.clone()
        }
    }

    fn sample_result() -> SearchResult {
        SearchResult::build(
            "Disponível em streaming.".to_string(),
            vec![
                ResourceRecord {
                    title: "Serviço X".to_string(),
                    url: "https://www.netflix.com/title".to_string(),
                    description: "Catálogo oficial".to_string(),
                    category: ResourceCategory::Legal,
                },
                ResourceRecord {
                    title: "Fórum Y".to_string(),
                    url: "https://forum.example.com/thread".to_string(),
                    description: "Discussão da comunidade".to_string(),
                    category: ResourceCategory::Alternative,
                },
            ],
            vec!["https://cited.example.com".to_string()],
        )
    }

    fn create_test_orchestrator() -> SearchOrchestrator {
        SearchOrchestrator::build(
            Arc::new(MockSourceFinder {
                outcome: Ok(sample_result()),
            }),
            UserSettings::default(),
        )
    }

    #[test]
    fn test_build_starts_idle_with_empty_query() {
        let orchestrator = create_test_orchestrator();

        assert!(matches!(orchestrator.state, SearchState::Idle));
        assert!(orchestrator.query.is_empty());
        assert!(!orchestrator.is_loading());
    }

    #[test]
    fn test_query_changed_updates_query() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(SearchMessage::QueryChanged("Filme Matrix".to_string()));

        assert_eq!(orchestrator.query, "Filme Matrix");
    }

    #[test]
    fn test_submit_with_empty_query_is_noop() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(SearchMessage::SubmitSearch);

        assert!(matches!(orchestrator.state, SearchState::Idle));
    }

    #[test]
    fn test_submit_with_whitespace_query_is_noop() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.query = "   ".to_string();

        let _ = orchestrator.update(SearchMessage::SubmitSearch);

        assert!(matches!(orchestrator.state, SearchState::Idle));
    }

    #[test]
    fn test_submit_with_topic_enters_loading() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.query = "Filme Matrix".to_string();

        let _ = orchestrator.update(SearchMessage::SubmitSearch);

        assert!(orchestrator.is_loading());
    }

    #[test]
    fn test_submit_while_loading_stays_loading() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.query = "Filme Matrix".to_string();

        let _ = orchestrator.update(SearchMessage::SubmitSearch);
        let _ = orchestrator.update(SearchMessage::SubmitSearch);

        assert!(orchestrator.is_loading());
    }

    #[test]
    fn test_search_completed_ok_stores_result() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.state = SearchState::Loading;

        let _ = orchestrator.update(SearchMessage::SearchCompleted(Ok(sample_result())));

        match &orchestrator.state {
            SearchState::Success(result) => assert_eq!(result.resources.len(), 2),
            other => panic!("expected Success, got {:?}", other),
        }
        assert!(!orchestrator.is_loading());
    }

    #[test]
    fn test_search_completed_error_stores_user_message() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.state = SearchState::Loading;

        let _ = orchestrator.update(SearchMessage::SearchCompleted(Err(SearchError::Api(
            "status 500".to_string(),
        ))));

        match &orchestrator.state {
            SearchState::Error(message) => {
                assert_eq!(message, global_constants::MESSAGE_SEARCH_FAILED);
            }
            other => panic!("expected Error, got {:?}", other),
        }
        assert!(!orchestrator.is_loading());
    }

    #[test]
    fn test_config_error_surfaces_distinct_message() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.state = SearchState::Loading;

        let _ = orchestrator.update(SearchMessage::SearchCompleted(Err(SearchError::Config(
            "GEMINI_API_KEY is not set".to_string(),
        ))));

        match &orchestrator.state {
            SearchState::Error(message) => {
                assert_eq!(message, global_constants::MESSAGE_SERVICE_NOT_CONFIGURED);
            }
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_timeout_surfaces_distinct_message() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.state = SearchState::Loading;

        let _ = orchestrator.update(SearchMessage::SearchCompleted(Err(SearchError::Timeout(30))));

        match &orchestrator.state {
            SearchState::Error(message) => {
                assert_eq!(message, global_constants::MESSAGE_SEARCH_TIMED_OUT);
            }
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_replaces_previous_result() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.state = SearchState::Success(sample_result());
        orchestrator.query = "Filme Matrix".to_string();

        let _ = orchestrator.update(SearchMessage::SubmitSearch);
        let _ = orchestrator.update(SearchMessage::SearchCompleted(Err(SearchError::Network(
            "connection reset".to_string(),
        ))));

        assert!(matches!(orchestrator.state, SearchState::Error(_)));
    }

    #[test]
    fn test_new_submit_from_error_restarts_cycle() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.state = SearchState::Error("erro".to_string());
        orchestrator.query = "Livro de Python".to_string();

        let _ = orchestrator.update(SearchMessage::SubmitSearch);

        assert!(orchestrator.is_loading());
    }

    #[test]
    fn test_suggestion_fills_query_and_starts_search() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(SearchMessage::SuggestionPicked(
            "Filme Matrix".to_string(),
        ));

        assert_eq!(orchestrator.query, "Filme Matrix");
        assert!(orchestrator.is_loading());
    }

    #[tokio::test]
    async fn test_mock_finder_returns_expected_result() {
        let finder = MockSourceFinder {
            outcome: Ok(sample_result()),
        };

        let result = finder.find_sources("Filme Matrix").await.unwrap();

        assert_eq!(result.resources.len(), 2);
        assert_eq!(result.grounding_urls.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_finder_propagates_errors() {
        let finder = MockSourceFinder {
            outcome: Err(SearchError::Config("no key".to_string())),
        };

        let result = finder.find_sources("Filme Matrix").await;

        assert!(matches!(result, Err(SearchError::Config(_))));
    }
}
