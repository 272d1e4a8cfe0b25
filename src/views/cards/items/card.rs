use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use super::cover::{draw_cover, CoverState};
use super::meta_row::draw_meta_row;
use super::tags_row::draw_tags_row;
use crate::ui_constants::card as layout;
use crate::views::cards::CardView;

const BRAND: Color32 = Color32::from_rgb(232, 93, 63);

/// Fixed-width restaurant card. Strictly constrained to `width` so rows form a proper grid.
pub fn restaurant_card(
    ui: &mut egui::Ui,
    card: &CardView,
    width: f32,
    cover: CoverState<'_>,
    clock: Option<&egui::TextureHandle>,
) -> egui::Response {
    let fill = Color32::from_rgb(36, 36, 36);
    let stroke = Stroke::new(1.0, Color32::from_rgb(64, 64, 64));

    ui.set_min_width(width);
    ui.set_max_width(width);

    let frame_out = egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(layout::ROUNDING))
        .inner_margin(egui::Margin::same(layout::INNER_MARGIN))
        .show(ui, |ui| {
            let inner_w = width - 2.0 * layout::INNER_MARGIN;
            ui.set_width(inner_w);

            draw_cover(ui, card, inner_w, cover, clock);
            ui.add_space(layout::POST_COVER_GAP);

            draw_meta_row(ui, card);
            ui.add_space(2.0);
            ui.label(RichText::new(&card.address).small().color(Color32::from_gray(160)));
            ui.label(RichText::new(&card.cuisine).small().strong().color(BRAND));

            ui.add_space(4.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&card.price)
                        .size(18.0)
                        .strong()
                        .color(Color32::from_gray(215)),
                );
                draw_tags_row(ui, &card.tags);
            });
        });

    frame_out.response
}
