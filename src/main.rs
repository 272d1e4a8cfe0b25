#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide the console in release
// Entry point stays minimal: logging, settings, localization, window config, then the app.

use eframe::egui;

mod app;
mod catalog;
mod localization;
mod logger;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::settings::load_settings_from_disk();

    let preferred_lang = app::settings::with_settings(|st| st.language);
    if let Err(e) = localization::initialize_localization(preferred_lang) {
        log::error!("Localization initialization failed: {e}");
    }
    log::info!("UI language: {}", localization::current_language());

    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1040.0, 760.0])
            .with_min_inner_size([360.0, 420.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|cc| Box::new(app::CatalogApp::new(cc))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
