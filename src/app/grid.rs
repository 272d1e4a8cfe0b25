use eframe::egui;

use crate::catalog::TagFilter;
use crate::localization::{translate, translate_with};
use crate::ui_constants::spacing;
use crate::views::cards::{restaurant_card, CardView};

/// Centered message shown when no restaurant carries the selected tag.
pub fn empty_message(filter: &TagFilter) -> String {
    translate_with("grid-empty", &[("tag", filter.value().to_string())])
}

/// Columns that fit `avail_w`, and the left padding that centers the row.
pub fn grid_columns(avail_w: f32, card_w: f32, gap: f32) -> (usize, f32) {
    let cols = (((avail_w + gap) / (card_w + gap)).floor() as usize).max(1);
    let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
    let left_pad = ((avail_w - row_w) / 2.0).max(0.0);
    (cols, left_pad)
}

impl super::CatalogApp {
    pub(super) fn draw_loading(&self, ui: &mut egui::Ui) {
        ui.add_space(spacing::XLARGE);
        ui.vertical_centered(|ui| {
            ui.add(egui::Spinner::new());
            ui.label(translate("grid-loading"));
        });
    }

    pub(super) fn draw_empty(&self, ui: &mut egui::Ui, filter: &TagFilter) {
        ui.add_space(spacing::XLARGE);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(empty_message(filter))
                    .size(18.0)
                    .color(egui::Color32::from_gray(150)),
            );
        });
    }

    pub(super) fn draw_cards_grid(
        &self,
        ui: &mut egui::Ui,
        cards: &[CardView],
        card_w: f32,
        gap: f32,
    ) {
        let avail_w = ui.available_width().floor();
        let (cols, left_pad) = grid_columns(avail_w, card_w, gap);
        ui.add_space(spacing::MEDIUM);
        for row in cards.chunks(cols) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.add_space(left_pad);
                for (c, card) in row.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.set_min_width(card_w);
                        ui.set_max_width(card_w);
                        restaurant_card(ui, card, card_w, self.images.cover(card.id), self.images.clock_icon());
                    });
                    if c + 1 < cols {
                        ui.add_space(gap);
                    }
                }
            });
            ui.add_space(gap);
        }
        ui.add_space(spacing::SMALL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_quotes_the_tag() {
        let msg = empty_message(&TagFilter::from("Vegan & Halal"));
        assert!(msg.contains("\"Vegan & Halal\""), "{msg}");
    }

    #[test]
    fn columns_fit_available_width() {
        assert_eq!(grid_columns(300.0, 300.0, 16.0), (1, 0.0));
        let (cols, pad) = grid_columns(1000.0, 300.0, 16.0);
        assert_eq!(cols, 3);
        assert!((pad - (1000.0 - 932.0) / 2.0).abs() < 1e-3);
        // Narrower than one card still yields a column
        assert_eq!(grid_columns(120.0, 300.0, 16.0).0, 1);
    }
}
