use crate::file_handler::PersistedFile;
use crate::shape::Region;
use egui::{Color32, Pos2, Vec2};
use image::{Rgba, RgbaImage};
use std::sync::Arc;

/// Something that can be asked to repaint the canvas display
pub trait RedrawSignal: Send + Sync {
    fn request_redraw(&self);
}

impl RedrawSignal for egui::Context {
    fn request_redraw(&self) {
        self.request_repaint();
    }
}

/// Signal that drops every request; used before a display exists and in tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRedraw;

impl RedrawSignal for NoRedraw {
    fn request_redraw(&self) {}
}

pub(crate) fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// The raster being doodled on, plus its bookkeeping
pub struct RasterSurface {
    image: RgbaImage,
    background: Color32,
    modified: bool,
    saved: bool,
    backing_file: PersistedFile,
    /// Bumped on every pixel change so the display knows when to re-upload
    generation: u64,
    redraw: Arc<dyn RedrawSignal>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("modified", &self.modified)
            .field("saved", &self.saved)
            .field("backing_file", &self.backing_file)
            .field("generation", &self.generation)
            .finish()
    }
}

impl RasterSurface {
    /// Allocate a `width` x `height` surface filled with `background`
    pub fn new(
        width: u32,
        height: u32,
        background: Color32,
        backing_file: PersistedFile,
        redraw: Arc<dyn RedrawSignal>,
    ) -> Self {
        Self {
            image: RgbaImage::from_pixel(width.max(1), height.max(1), to_rgba(background)),
            background,
            modified: false,
            saved: false,
            backing_file,
            generation: 0,
            redraw,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn backing_file(&self) -> &PersistedFile {
        &self.backing_file
    }

    pub fn set_backing_file(&mut self, file: PersistedFile) {
        self.backing_file = file;
    }

    /// Record whether the backing file holds the current pixels.
    /// A successful save also clears the modified flag.
    pub fn mark_saved(&mut self, saved: bool) {
        self.saved = saved;
        if saved {
            self.modified = false;
        }
    }

    /// Clear the modified flag without touching pixels (after a load)
    pub fn mark_clean(&mut self) {
        self.modified = false;
    }

    /// Refill the buffer with the background color, keeping its dimensions
    pub fn reset(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.image = RgbaImage::from_pixel(w, h, to_rgba(self.background));
        self.modified = false;
        self.touch();
    }

    /// Swap in a whole new buffer; modified/saved flags are left alone
    pub fn replace(&mut self, image: RgbaImage) {
        self.image = image;
        self.touch();
    }

    pub fn fill(&mut self, region: &Region, color: Color32) {
        let rgba = to_rgba(color);
        let (w, h) = (self.width(), self.height());
        for (x, y) in region.covered_pixels(w, h) {
            self.image.put_pixel(x, y, rgba);
        }
        self.modified = true;
        self.touch();
    }

    /// Paint a round-capped segment `width` pixels wide between two pixels.
    /// The segment runs through the pixel centers.
    pub fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        let half_pixel = Vec2::splat(0.5);
        let region = Region::Capsule {
            from: from + half_pixel,
            to: to + half_pixel,
            radius: width / 2.0,
        };
        self.fill(&region, color);
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.redraw.request_redraw();
    }
}
