mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use crate::config::default_webview_data_dir;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView data directory");
    tracing::info!(dir = %webview_data_dir.display(), "starting HRnet");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("HRnet - Current Employees"),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}
