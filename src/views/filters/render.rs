use eframe::egui::{self, Color32, RichText, Rounding, Stroke};

use super::controls::FilterControl;
use crate::catalog::TagFilter;

const ACTIVE_FILL: Color32 = Color32::from_rgb(232, 93, 63);
const IDLE_FILL: Color32 = Color32::from_rgb(48, 48, 48);

/// Draws the category pill row in the top panel.
/// Returns the value of the control clicked this frame, if any.
pub fn draw_filter_bar(ctx: &egui::Context, controls: &[FilterControl]) -> Option<TagFilter> {
    filter_pills(ctx, controls)
        .iter()
        .zip(controls)
        .find(|(pill, _)| pill.clicked())
        .map(|(_, control)| control.value.clone())
}

/// One response per control, in control order.
pub(crate) fn filter_pills(ctx: &egui::Context, controls: &[FilterControl]) -> Vec<egui::Response> {
    egui::TopBottomPanel::top("category_filters")
        .frame(
            egui::Frame::none()
                .fill(Color32::from_rgb(30, 30, 30))
                .inner_margin(10.0),
        )
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                controls.iter().map(|control| ui.add(pill(control))).collect::<Vec<_>>()
            })
            .inner
        })
        .inner
}

fn pill(control: &FilterControl) -> egui::Button<'static> {
    let (fill, text_color) = if control.active {
        (ACTIVE_FILL, Color32::WHITE)
    } else {
        (IDLE_FILL, Color32::from_gray(200))
    };
    egui::Button::new(RichText::new(control.label()).color(text_color))
        .fill(fill)
        .stroke(Stroke::NONE)
        .rounding(Rounding::same(14.0))
        .min_size(egui::vec2(0.0, 28.0))
}
