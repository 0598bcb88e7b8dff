use crate::surface::RasterSurface;
use egui::Color32;

/// Color around the raster inside the canvas widget
pub const CANVAS_BACKDROP: Color32 = Color32::GRAY;

/// Shows the raster surface in the canvas widget.
///
/// The texture is only re-uploaded when the surface generation changed
/// since the last frame.
#[derive(Default)]
pub struct Renderer {
    texture: Option<egui::TextureHandle>,
    uploaded_generation: Option<u64>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the backdrop and the raster, inset by `margin`
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        surface: &RasterSurface,
        margin: f32,
    ) {
        painter.rect_filled(rect, 0.0, CANVAS_BACKDROP);

        let texture_id = self.sync_texture(ctx, surface);
        let image_rect = egui::Rect::from_min_size(
            rect.min + egui::vec2(margin, margin),
            egui::vec2(surface.width() as f32, surface.height() as f32),
        );
        painter.image(
            texture_id,
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn sync_texture(&mut self, ctx: &egui::Context, surface: &RasterSurface) -> egui::TextureId {
        let generation = surface.generation();
        match &mut self.texture {
            Some(texture) if self.uploaded_generation == Some(generation) => texture.id(),
            Some(texture) => {
                texture.set(color_image(surface), egui::TextureOptions::NEAREST);
                self.uploaded_generation = Some(generation);
                texture.id()
            }
            None => {
                let texture =
                    ctx.load_texture("doodle-canvas", color_image(surface), egui::TextureOptions::NEAREST);
                let id = texture.id();
                self.texture = Some(texture);
                self.uploaded_generation = Some(generation);
                id
            }
        }
    }
}

fn color_image(surface: &RasterSurface) -> egui::ColorImage {
    let image = surface.image();
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    )
}
