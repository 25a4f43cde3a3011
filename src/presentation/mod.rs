pub mod app_theme;
pub mod results_view;
