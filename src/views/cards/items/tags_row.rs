use eframe::egui::{self, Color32, Rounding, Stroke, Vec2};

const CHIP_ROUNDING: f32 = 8.0;

/// Tag pills, right-aligned in reading order.
pub fn draw_tags_row(ui: &mut egui::Ui, tags: &[String]) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.spacing_mut().item_spacing.x = 5.0;
        // right_to_left places the first chip rightmost
        for tag in tags.iter().rev() {
            draw_chip(ui, tag);
        }
    });
}

fn draw_chip(ui: &mut egui::Ui, text: &str) {
    let font = egui::FontId::proportional(11.0);
    let text_color = Color32::from_rgb(210, 210, 210);
    let galley = ui
        .painter()
        .layout_no_wrap(text.to_string(), font.clone(), text_color);
    let pad_x = 8.0;
    let chip_w = (galley.size().x + 2.0 * pad_x).max(28.0);
    let (_id, rect) = ui.allocate_space(Vec2::new(chip_w, 18.0));

    let hovered = ui
        .input(|i| i.pointer.hover_pos())
        .map_or(false, |p| rect.contains(p));
    let bg = if hovered {
        Color32::from_rgb(74, 74, 74)
    } else {
        Color32::from_rgb(56, 56, 56)
    };
    let p = ui.painter_at(rect);
    p.rect_filled(rect, Rounding::same(CHIP_ROUNDING), bg);
    p.rect_stroke(rect, Rounding::same(CHIP_ROUNDING), Stroke::new(1.0, Color32::from_gray(80)));
    p.text(rect.center(), egui::Align2::CENTER_CENTER, text, font, text_color);
}
