use eframe::egui::{self, Color32, RichText};

use crate::views::cards::CardView;

const STAR_GOLD: Color32 = Color32::from_rgb(245, 190, 60);

/// Name on the left, "⭐ 4.5 (242)" on the right.
pub fn draw_meta_row(ui: &mut egui::Ui, card: &CardView) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&card.name)
                .heading()
                .strong()
                .color(Color32::from_rgb(230, 230, 230)),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(&card.reviews).small().color(Color32::from_gray(150)));
            ui.label(RichText::new(&card.rating).color(Color32::from_gray(210)));
            ui.label(RichText::new("⭐").color(STAR_GOLD));
        });
    });
}
