// Card images and the shared clock icon: decoded off the UI thread, uploaded as
// textures on the UI thread. A missing or undecodable file switches the slot to its
// fallback (placeholder block for covers, glyph for the clock); no retry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use eframe::egui;
use thiserror::Error;
use tokio::runtime::Handle;

use crate::views::cards::{CardView, CoverState, CLOCK_ICON, FALLBACK_IMAGE};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Cover(u32),
    ClockIcon,
}

impl ImageKey {
    fn texture_name(&self) -> String {
        match self {
            ImageKey::Cover(id) => format!("restaurant_{id}"),
            ImageKey::ClockIcon => "clock_icon".to_owned(),
        }
    }
}

pub enum ImageMsg {
    Ok {
        key: ImageKey,
        w: usize,
        h: usize,
        rgba: Vec<u8>,
    },
    Err {
        key: ImageKey,
    },
}

pub enum ImageSlot {
    Loading,
    Ready(egui::TextureHandle),
    Fallback,
}

/// Read and decode an image file into RGBA8.
pub fn decode_file(path: &Path) -> Result<(usize, usize, Vec<u8>), ImageError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok((w as usize, h as usize, rgba.into_vec()))
}

pub struct ImagesState {
    slots: HashMap<ImageKey, ImageSlot>,
    tx: mpsc::Sender<ImageMsg>,
    rx: mpsc::Receiver<ImageMsg>,
}

impl ImagesState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            slots: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Start loading images for cards that have no slot yet. Idempotent per card id.
    pub fn schedule(&mut self, rt: &Handle, ctx: &egui::Context, cards: &[CardView], asset_root: &Path) {
        for card in cards {
            self.load(rt, ctx, ImageKey::Cover(card.id), asset_root.join(&card.image));
        }
    }

    /// Start loading the clock icon shown on every status badge.
    pub fn schedule_clock(&mut self, rt: &Handle, ctx: &egui::Context, asset_root: &Path) {
        self.load(rt, ctx, ImageKey::ClockIcon, asset_root.join(CLOCK_ICON));
    }

    fn load(&mut self, rt: &Handle, ctx: &egui::Context, key: ImageKey, path: PathBuf) {
        if self.slots.contains_key(&key) {
            return;
        }
        self.slots.insert(key, ImageSlot::Loading);
        let tx = self.tx.clone();
        let ctx2 = ctx.clone();
        rt.spawn(async move {
            let shown = path.display().to_string();
            let msg = match tokio::task::spawn_blocking(move || decode_file(&path)).await {
                Ok(Ok((w, h, rgba))) => {
                    log::info!("image ok: {:?} size={}x{} path={}", key, w, h, shown);
                    ImageMsg::Ok { key, w, h, rgba }
                }
                Ok(Err(e)) => {
                    match key {
                        ImageKey::Cover(_) => {
                            log::warn!("image failed: {:?} path={} err={}; using {}", key, shown, e, FALLBACK_IMAGE)
                        }
                        ImageKey::ClockIcon => log::warn!("clock icon failed: path={} err={}; using glyph", shown, e),
                    }
                    ImageMsg::Err { key }
                }
                Err(e) => {
                    log::warn!("image task join failed: {:?} err={}", key, e);
                    ImageMsg::Err { key }
                }
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }

    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                ImageMsg::Ok { key, w, h, rgba } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba);
                    let tex = ctx.load_texture(key.texture_name(), image, egui::TextureOptions::default());
                    self.slots.insert(key, ImageSlot::Ready(tex));
                }
                ImageMsg::Err { key } => {
                    self.slots.insert(key, ImageSlot::Fallback);
                }
            }
        }
    }

    pub fn cover(&self, id: u32) -> CoverState<'_> {
        match self.slots.get(&ImageKey::Cover(id)) {
            Some(ImageSlot::Ready(tex)) => CoverState::Ready(tex),
            Some(ImageSlot::Fallback) => CoverState::Fallback,
            Some(ImageSlot::Loading) | None => CoverState::Loading,
        }
    }

    /// `None` until the icon is decoded, and for good if it failed.
    pub fn clock_icon(&self) -> Option<&egui::TextureHandle> {
        match self.slots.get(&ImageKey::ClockIcon) {
            Some(ImageSlot::Ready(tex)) => Some(tex),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("baliwag-eats-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn scratch_root(name: &str) -> PathBuf {
        let root = scratch(name);
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    fn settle(state: &mut ImagesState, ctx: &egui::Context, key: ImageKey) {
        for _ in 0..200 {
            state.poll(ctx);
            if !matches!(state.slots.get(&key), Some(ImageSlot::Loading)) {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        panic!("{key:?} never settled");
    }

    #[test]
    fn clock_icon_loads_from_asset_root() {
        let root = scratch_root("clock-present");
        let icon = root.join(CLOCK_ICON);
        std::fs::create_dir_all(icon.parent().unwrap()).unwrap();
        image::RgbaImage::from_pixel(12, 12, image::Rgba([255, 255, 255, 255]))
            .save(&icon)
            .unwrap();

        let rt = tokio::runtime::Runtime::new().unwrap();
        let ctx = egui::Context::default();
        let mut state = ImagesState::new();
        assert!(state.clock_icon().is_none());
        state.schedule_clock(rt.handle(), &ctx, &root);
        settle(&mut state, &ctx, ImageKey::ClockIcon);

        let tex = state.clock_icon().expect("clock icon texture");
        assert_eq!(tex.size(), [12, 12]);
    }

    #[test]
    fn missing_clock_icon_falls_back() {
        let root = scratch_root("clock-missing");
        let rt = tokio::runtime::Runtime::new().unwrap();
        let ctx = egui::Context::default();
        let mut state = ImagesState::new();
        state.schedule_clock(rt.handle(), &ctx, &root);
        settle(&mut state, &ctx, ImageKey::ClockIcon);

        assert!(matches!(state.slots.get(&ImageKey::ClockIcon), Some(ImageSlot::Fallback)));
        assert!(state.clock_icon().is_none());
        // Covers are keyed separately and untouched.
        assert!(matches!(state.cover(1), CoverState::Loading));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = decode_file(&scratch("does-not-exist.png")).unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
    }

    #[test]
    fn garbage_bytes_are_decode_error() {
        let path = scratch("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = decode_file(&path).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn decodes_png_to_rgba() {
        let path = scratch("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([248, 216, 216, 255]))
            .save(&path)
            .unwrap();
        let (w, h, rgba) = decode_file(&path).unwrap();
        assert_eq!((w, h), (3, 2));
        assert_eq!(rgba.len(), 3 * 2 * 4);
        assert_eq!(&rgba[..4], &[248, 216, 216, 255]);
    }
}
