use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::core::models::{display_host, ResourceCategory, ResourceRecord, SearchResult};
use crate::core::orchestrators::SearchMessage;
use crate::global_constants;
use crate::presentation::app_theme;

pub fn render_results(result: &SearchResult) -> Element<'_, SearchMessage> {
    let mut sections = column![
        render_summary_panel(&result.summary),
        row![
            render_category_column(
                result,
                ResourceCategory::Legal,
                global_constants::LEGAL_COLUMN_HEADING,
                global_constants::LEGAL_EMPTY_PLACEHOLDER,
            ),
            render_category_column(
                result,
                ResourceCategory::Alternative,
                global_constants::ALTERNATIVE_COLUMN_HEADING,
                global_constants::ALTERNATIVE_EMPTY_PLACEHOLDER,
            ),
        ]
        .spacing(24),
    ]
    .spacing(24);

    if !result.grounding_urls.is_empty() {
        sections = sections.push(render_grounding_strip(&result.grounding_urls));
    }

    sections.into()
}

fn render_summary_panel(summary: &str) -> Element<'_, SearchMessage> {
    let heading = text(global_constants::SUMMARY_HEADING).size(20);
    let body = text(format!("\u{201c}{}\u{201d}", summary))
        .size(15)
        .style(app_theme::muted_text_style);

    container(column![heading, body].spacing(12))
        .padding(24)
        .width(Length::Fill)
        .style(app_theme::summary_panel_style)
        .into()
}

fn render_category_column<'a>(
    result: &'a SearchResult,
    category: ResourceCategory,
    heading: &'a str,
    placeholder: &'a str,
) -> Element<'a, SearchMessage> {
    let resources = result.resources_in(category);

    let mut cards = Column::new().spacing(12);
    if resources.is_empty() {
        cards = cards.push(
            text(placeholder)
                .size(13)
                .style(app_theme::faint_text_style),
        );
    } else {
        for resource in resources {
            cards = cards.push(render_resource_card(resource));
        }
    }

    column![text(heading).size(20), cards]
        .spacing(16)
        .width(Length::FillPortion(1))
        .into()
}

fn render_resource_card(resource: &ResourceRecord) -> Element<'_, SearchMessage> {
    let title = text(&resource.title).size(15).width(Length::Fill);

    let open_btn = button(text("Abrir \u{2197}").size(13))
        .padding([4, 8])
        .style(app_theme::link_button_style)
        .on_press(SearchMessage::OpenUrl(resource.url.clone()));

    let description = text(truncate_description(&resource.description))
        .size(13)
        .style(app_theme::muted_text_style);

    let badge_style = match resource.category {
        ResourceCategory::Legal => app_theme::legal_badge_style,
        ResourceCategory::Alternative => app_theme::alternative_badge_style,
    };
    let badge = container(text(resource.category.badge_label()).size(10))
        .padding([3, 8])
        .style(badge_style);

    let host = text(resource.display_host())
        .size(11)
        .style(app_theme::faint_text_style);

    let footer = row![badge, host]
        .spacing(10)
        .align_y(Alignment::Center);

    container(
        column![
            row![title, open_btn].spacing(8).align_y(Alignment::Start),
            description,
            footer,
        ]
        .spacing(10),
    )
    .padding(16)
    .width(Length::Fill)
    .style(app_theme::card_style)
    .into()
}

fn render_grounding_strip(urls: &[String]) -> Element<'_, SearchMessage> {
    let mut chips = Row::new().spacing(8);
    for url in visible_grounding_urls(urls) {
        chips = chips.push(
            button(text(display_host(url)).size(11))
                .padding([4, 10])
                .style(app_theme::chip_button_style)
                .on_press(SearchMessage::OpenUrl(url.clone())),
        );
    }

    column![
        text(global_constants::GROUNDING_HEADING)
            .size(12)
            .style(app_theme::faint_text_style),
        chips,
    ]
    .spacing(8)
    .into()
}

/// Two-line clamp analogue: cap the description at a fixed number of
/// characters, appending an ellipsis when cut.
pub(crate) fn truncate_description(description: &str) -> String {
    if description.chars().count() <= global_constants::DESCRIPTION_MAX_CHARS {
        return description.to_string();
    }

    let truncated: String = description
        .chars()
        .take(global_constants::DESCRIPTION_MAX_CHARS)
        .collect();
    format!("{}\u{2026}", truncated.trim_end())
}

pub(crate) fn visible_grounding_urls(urls: &[String]) -> &[String] {
    &urls[..urls.len().min(global_constants::GROUNDING_URLS_DISPLAY_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_description_keeps_short_text_unchanged() {
        let short = "Catálogo oficial de filmes.";
        assert_eq!(truncate_description(short), short);
    }

    #[test]
    fn test_truncate_description_caps_long_text_with_ellipsis() {
        let long = "a".repeat(global_constants::DESCRIPTION_MAX_CHARS + 40);

        let truncated = truncate_description(&long);

        assert!(truncated.chars().count() <= global_constants::DESCRIPTION_MAX_CHARS + 1);
        assert!(truncated.ends_with('\u{2026}'));
    }

    #[test]
    fn test_truncate_description_is_char_boundary_safe() {
        let accented = "ã".repeat(global_constants::DESCRIPTION_MAX_CHARS + 10);

        let truncated = truncate_description(&accented);

        assert!(truncated.ends_with('\u{2026}'));
    }

    #[test]
    fn test_visible_grounding_urls_caps_at_display_limit() {
        let urls: Vec<String> = (0..9).map(|i| format!("https://site{}.com", i)).collect();

        let visible = visible_grounding_urls(&urls);

        assert_eq!(visible.len(), global_constants::GROUNDING_URLS_DISPLAY_LIMIT);
        assert_eq!(visible[0], "https://site0.com");
    }

    #[test]
    fn test_visible_grounding_urls_keeps_short_lists_whole() {
        let urls = vec!["https://only.com".to_string()];

        assert_eq!(visible_grounding_urls(&urls).len(), 1);
    }
}
