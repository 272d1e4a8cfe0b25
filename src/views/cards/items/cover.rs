use eframe::egui::{self, Align2, Color32, FontId, Rect, Rounding, Sense, Vec2};

use crate::localization::translate;
use crate::ui_constants::card as layout;
use crate::views::cards::{CardView, StatusBadge};

/// Image state of a card as known to the UI thread.
#[derive(Clone, Copy)]
pub enum CoverState<'a> {
    Loading,
    Ready(&'a egui::TextureHandle),
    /// Loading failed; the fixed placeholder is drawn instead.
    Fallback,
}

const PLACEHOLDER_BG: Color32 = Color32::from_rgb(0xF8, 0xD8, 0xD8);
const PLACEHOLDER_FG: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
// Stands in for the clock icon until it loads, or if it never does.
const CLOCK_GLYPH: &str = "🕓";
const CLOCK_ICON_SIZE: f32 = 12.0;
const CLOCK_ICON_GAP: f32 = 4.0;

/// Draws the cover image (or its placeholder) with the open/closed badge on top.
pub fn draw_cover(
    ui: &mut egui::Ui,
    card: &CardView,
    inner_w: f32,
    cover: CoverState<'_>,
    clock: Option<&egui::TextureHandle>,
) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(inner_w, layout::COVER_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let rounding = Rounding::same(layout::ROUNDING);

    match cover {
        CoverState::Ready(tex) => {
            let uv = cover_uv(tex.size_vec2(), rect.size());
            painter.image(tex.id(), rect, uv, Color32::WHITE);
        }
        CoverState::Loading => {
            painter.rect_filled(rect, rounding, Color32::from_rgb(58, 58, 58));
        }
        CoverState::Fallback => {
            painter.rect_filled(rect, rounding, PLACEHOLDER_BG);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                translate("image-placeholder"),
                FontId::proportional(16.0),
                PLACEHOLDER_FG,
            );
        }
    }

    draw_status_badge(ui, rect, card.status, clock);
}

// Crop the texture like CSS object-fit: cover.
fn cover_uv(tex_size: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let tex_aspect = tex_size.x / tex_size.y;
    let target_aspect = target.x / target.y;
    if tex_aspect > target_aspect {
        let w = target_aspect / tex_aspect;
        let x0 = (1.0 - w) / 2.0;
        Rect::from_min_max(egui::pos2(x0, 0.0), egui::pos2(x0 + w, 1.0))
    } else {
        let h = tex_aspect / target_aspect;
        let y0 = (1.0 - h) / 2.0;
        Rect::from_min_max(egui::pos2(0.0, y0), egui::pos2(1.0, y0 + h))
    }
}

fn badge_text(status: StatusBadge, has_icon: bool) -> String {
    let label = translate(status.loc_key());
    if has_icon {
        label
    } else {
        format!("{CLOCK_GLYPH} {label}")
    }
}

fn draw_status_badge(ui: &egui::Ui, cover_rect: Rect, status: StatusBadge, clock: Option<&egui::TextureHandle>) {
    let text = badge_text(status, clock.is_some());
    let text_color = match status {
        StatusBadge::Open => Color32::from_rgb(120, 220, 120),
        StatusBadge::Closed => Color32::from_rgb(235, 110, 110),
    };
    let font = FontId::proportional(12.0);
    let galley = ui.painter().layout_no_wrap(text, font, text_color);

    let pad = Vec2::new(8.0, 4.0);
    let icon_w = if clock.is_some() { CLOCK_ICON_SIZE + CLOCK_ICON_GAP } else { 0.0 };
    let content = Vec2::new(icon_w + galley.size().x, galley.size().y.max(CLOCK_ICON_SIZE));
    let min = cover_rect.min + Vec2::splat(8.0);
    let badge = Rect::from_min_size(min, content + pad * 2.0);
    let painter = ui.painter_at(cover_rect);
    painter.rect_filled(badge, Rounding::same(badge.height() / 2.0), Color32::from_black_alpha(153));

    let inner = badge.shrink2(pad);
    if let Some(tex) = clock {
        let icon = Rect::from_center_size(
            egui::pos2(inner.left() + CLOCK_ICON_SIZE / 2.0, inner.center().y),
            Vec2::splat(CLOCK_ICON_SIZE),
        );
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(tex.id(), icon, uv, Color32::WHITE);
    }
    let text_pos = egui::pos2(inner.left() + icon_w, inner.center().y - galley.size().y / 2.0);
    painter.galley(text_pos, galley, text_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_texture_is_cropped_horizontally() {
        let uv = cover_uv(Vec2::new(400.0, 100.0), Vec2::new(200.0, 100.0));
        assert!((uv.width() - 0.5).abs() < 1e-6);
        assert!((uv.height() - 1.0).abs() < 1e-6);
        assert!((uv.center().x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn badge_uses_glyph_only_without_icon() {
        let with_icon = badge_text(StatusBadge::Open, true);
        let without = badge_text(StatusBadge::Open, false);
        assert!(!with_icon.contains(CLOCK_GLYPH));
        assert!(without.starts_with(CLOCK_GLYPH));
        assert!(without.ends_with(&with_icon));
        assert_ne!(badge_text(StatusBadge::Closed, true), with_icon);
    }

    #[test]
    fn tall_texture_is_cropped_vertically() {
        let uv = cover_uv(Vec2::new(100.0, 400.0), Vec2::new(200.0, 100.0));
        assert!((uv.width() - 1.0).abs() < 1e-6);
        assert!((uv.height() - 0.125).abs() < 1e-6);
    }
}
