use crate::canvas::Canvas;
use crate::input::InputHandler;
use crate::renderer::Renderer;

/// Canvas widget: forwards pointer strokes to the canvas and paints its raster
pub fn central_panel(
    ctx: &egui::Context,
    canvas: &Canvas,
    input: &mut InputHandler,
    renderer: &mut Renderer,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            let (response, painter) = ui.allocate_painter(canvas_rect.size(), egui::Sense::drag());

            input.set_canvas_rect(response.rect);
            for event in input.process_input(ctx) {
                if let Err(err) = canvas.send(event) {
                    log::error!("Dropped {:?}: {}", event, err);
                }
            }

            let surface = canvas.surface();
            renderer.render(ctx, &painter, response.rect, &surface, canvas.config().canvas_margin);
        });
}
