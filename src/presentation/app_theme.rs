use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::user_settings::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.04, 0.05, 0.08),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.35, 0.55, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.231, 0.420, 0.918))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.231, 0.420, 0.918),
                width: 1.0,
                radius: 10.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.310, 0.502, 0.965))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.310, 0.502, 0.965),
                width: 1.0,
                radius: 10.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.184, 0.333, 0.733))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.184, 0.333, 0.733),
                width: 1.0,
                radius: 10.0.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 1.0,
                radius: 10.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

pub fn chip_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgba(0.35, 0.55, 1.0, 0.25),
        _ => Color::from_rgba(0.35, 0.55, 1.0, 0.12),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::from_rgb(0.55, 0.70, 1.0),
        border: Border {
            color: Color::from_rgba(0.35, 0.55, 1.0, 0.35),
            width: 1.0,
            radius: 14.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn link_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb(0.55, 0.70, 1.0),
        _ => Color::from_rgb(0.5, 0.5, 0.55),
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.55, 0.65, 0.10))),
        border: Border {
            color: Color::from_rgba(0.5, 0.55, 0.65, 0.30),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn summary_panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.55, 0.65, 0.06))),
        border: Border {
            color: Color::from_rgba(0.5, 0.55, 0.65, 0.25),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_banner_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette.danger
        })),
        text_color: Some(palette.danger),
        border: Border {
            color: Color {
                a: 0.35,
                ..palette.danger
            },
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

pub fn legal_badge_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette.success
        })),
        text_color: Some(palette.success),
        border: Border {
            color: Color {
                a: 0.40,
                ..palette.success
            },
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn alternative_badge_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette.warning
        })),
        text_color: Some(palette.warning),
        border: Border {
            color: Color {
                a: 0.40,
                ..palette.warning
            },
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn skeleton_block_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.55, 0.65, 0.12))),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

pub fn muted_text_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color::from_rgba(0.6, 0.6, 0.65, 1.0)),
    }
}

pub fn faint_text_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color::from_rgba(0.45, 0.45, 0.50, 1.0)),
    }
}
