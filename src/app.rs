// Catalog view controller: owns the selection, schedules delayed grid renders and draws the window.

use eframe::{egui, App};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{Catalog, TagFilter, CATALOG};
use crate::ui_constants::CARD_GAP;
use crate::views::cards::CARD_WIDTH;
use crate::views::filters::{draw_filter_bar, filter_controls, FilterControl};

mod grid;
mod images;
mod logs_ui;
mod render;
mod runtime;
pub mod settings;

pub use render::GridContent;
pub use runtime::rt;

use images::ImagesState;
use render::RenderQueue;
use settings::CatalogSettings;

pub struct CatalogApp {
    catalog: Arc<Catalog>,
    selection: TagFilter,
    // None while a render is pending; the grid is cleared as soon as a filter is picked
    grid: Option<GridContent>,
    renders: RenderQueue,
    images: ImagesState,
    load_delay: Duration,
    asset_root: PathBuf,
}

impl CatalogApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = settings::with_settings(CatalogSettings::clone);
        Self::with_catalog(&cc.egui_ctx, CATALOG.clone(), &settings)
    }

    /// Build the view over `catalog` and select the configured default filter.
    pub fn with_catalog(ctx: &egui::Context, catalog: Arc<Catalog>, settings: &CatalogSettings) -> Self {
        log::info!(
            "catalog view starting: items={} tags={} default={}",
            catalog.items().len(),
            catalog.tags().len(),
            settings.default_tag
        );
        let mut app = Self {
            catalog,
            selection: TagFilter::All,
            grid: None,
            renders: RenderQueue::new(),
            images: ImagesState::new(),
            load_delay: Duration::from_millis(settings.load_delay_ms),
            asset_root: settings.asset_root.clone(),
        };
        app.images.schedule_clock(rt().handle(), ctx, &app.asset_root);
        app.select_filter(ctx, settings.default_filter());
        app
    }

    pub fn selection(&self) -> &TagFilter {
        &self.selection
    }

    pub fn grid(&self) -> Option<&GridContent> {
        self.grid.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.renders.is_loading()
    }

    /// Controls for the filter row, highlighted from the current selection.
    pub fn filter_controls(&self) -> Vec<FilterControl> {
        filter_controls(self.catalog.tags(), &self.selection)
    }

    /// Make `filter` the active selection and re-render the grid for it.
    /// Any string is accepted; unknown tags end in the empty state.
    pub fn select_filter(&mut self, ctx: &egui::Context, filter: TagFilter) {
        log::info!("filter selected: {filter}");
        self.selection = filter;
        self.request_render(ctx);
    }

    fn request_render(&mut self, ctx: &egui::Context) {
        self.grid = None;
        let ctx2 = ctx.clone();
        self.renders.request(
            rt().handle(),
            self.catalog.clone(),
            self.selection.clone(),
            self.load_delay,
            move || ctx2.request_repaint(),
        );
        ctx.request_repaint();
    }

    /// Commit the newest finished render and kick off image loads for its cards.
    fn poll_incoming(&mut self, ctx: &egui::Context) {
        if let Some(content) = self.renders.poll() {
            match &content {
                GridContent::Cards(cards) => {
                    log::debug!(
                        "render #{} committed: filter={} cards={}",
                        self.renders.latest_token(),
                        self.selection(),
                        cards.len()
                    );
                    self.images.schedule(rt().handle(), ctx, cards, &self.asset_root);
                }
                GridContent::Empty { filter } => {
                    log::debug!("grid committed: no restaurants tagged {filter}");
                }
            }
            self.grid = Some(content);
        }
        self.images.poll(ctx);
    }

    /// Draw the pill row and act on a click in it.
    fn filter_bar(&mut self, ctx: &egui::Context) {
        let controls = self.filter_controls();
        if let Some(filter) = draw_filter_bar(ctx, &controls) {
            self.select_filter(ctx, filter);
        }
    }

    fn draw_central(&self, ui: &mut egui::Ui) {
        match self.grid() {
            _ if self.is_loading() => self.draw_loading(ui),
            Some(GridContent::Cards(cards)) => self.draw_cards_grid(ui, cards, CARD_WIDTH, CARD_GAP),
            Some(GridContent::Empty { filter }) => self.draw_empty(ui, filter),
            None => self.draw_loading(ui),
        }
    }
}

impl App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep the Logs window fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        self.poll_incoming(ctx);

        self.filter_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.draw_central(ui));
        });

        logs_ui::draw_logs_button(ctx);
        logs_ui::draw_logs_viewport(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::restaurant;
    use crate::views::filters::render::tests::{click_frames, pill_centers};
    use std::time::Instant;

    fn settings(default_tag: &str) -> CatalogSettings {
        CatalogSettings {
            default_tag: default_tag.to_string(),
            load_delay_ms: 20,
            asset_root: std::env::temp_dir(),
            language: None,
        }
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                restaurant(1, &["Spicy", "Family"]),
                restaurant(2, &["Family"]),
            ])
            .unwrap(),
        )
    }

    fn wait_for_commit(app: &mut CatalogApp, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_loading() {
            assert!(Instant::now() < deadline, "render never committed");
            std::thread::sleep(Duration::from_millis(5));
            app.poll_incoming(ctx);
        }
    }

    fn shown_ids(app: &CatalogApp) -> Vec<u32> {
        match app.grid() {
            Some(GridContent::Cards(cards)) => cards.iter().map(|c| c.id).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn starts_on_default_tag() {
        let ctx = egui::Context::default();
        let mut app = CatalogApp::with_catalog(&ctx, catalog(), &settings("Spicy"));
        assert_eq!(app.selection(), &TagFilter::from("Spicy"));
        assert!(app.is_loading());
        assert!(app.grid().is_none());

        wait_for_commit(&mut app, &ctx);
        assert_eq!(shown_ids(&app), vec![1]);
    }

    #[test]
    fn selecting_moves_the_highlight() {
        let ctx = egui::Context::default();
        let mut app = CatalogApp::with_catalog(&ctx, catalog(), &settings("Spicy"));
        app.select_filter(&ctx, TagFilter::from("Family"));

        let active: Vec<TagFilter> = app
            .filter_controls()
            .into_iter()
            .filter(|c| c.active)
            .map(|c| c.value)
            .collect();
        assert_eq!(active, vec![TagFilter::from("Family")]);

        wait_for_commit(&mut app, &ctx);
        assert_eq!(shown_ids(&app), vec![1, 2]);
    }

    #[test]
    fn clicking_a_pill_selects_its_tag() {
        let ctx = egui::Context::default();
        let mut app = CatalogApp::with_catalog(&ctx, catalog(), &settings("Spicy"));
        let controls = app.filter_controls();
        let family = controls
            .iter()
            .position(|c| c.value == TagFilter::from("Family"))
            .unwrap();
        let centers = pill_centers(&ctx, &controls);

        for frame in click_frames(centers[family]) {
            let _ = ctx.run(frame, |ctx| app.filter_bar(ctx));
        }

        assert_eq!(app.selection(), &TagFilter::from("Family"));
        let active: Vec<TagFilter> = app
            .filter_controls()
            .into_iter()
            .filter(|c| c.active)
            .map(|c| c.value)
            .collect();
        assert_eq!(active, vec![TagFilter::from("Family")]);

        wait_for_commit(&mut app, &ctx);
        assert_eq!(shown_ids(&app), vec![1, 2]);
    }

    #[test]
    fn rapid_changes_end_on_last_selection() {
        let ctx = egui::Context::default();
        let mut app = CatalogApp::with_catalog(&ctx, catalog(), &settings("Family"));
        app.select_filter(&ctx, TagFilter::from("Spicy"));
        app.select_filter(&ctx, TagFilter::from("Nope"));
        app.select_filter(&ctx, TagFilter::All);

        wait_for_commit(&mut app, &ctx);
        assert_eq!(app.selection(), &TagFilter::All);
        assert_eq!(shown_ids(&app), vec![1, 2]);
    }

    #[test]
    fn unknown_tag_commits_empty_state() {
        let ctx = egui::Context::default();
        let mut app = CatalogApp::with_catalog(&ctx, catalog(), &settings("Vegan"));
        wait_for_commit(&mut app, &ctx);
        assert_eq!(
            app.grid(),
            Some(&GridContent::Empty {
                filter: TagFilter::from("Vegan")
            })
        );
    }
}
