use crate::stroke::StrokeEvent;
use egui::{Context, Pos2, Rect};

/// Primary-button pointer state for one frame
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerSample {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.latest_pos(),
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Turns raw egui pointer input into framed stroke events.
///
/// Points are reported relative to the canvas widget's top-left corner and
/// rounded to whole pixels; the margin is removed later by the canvas.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    stroke_active: bool,
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            stroke_active: false,
            last_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_stroke_active(&self) -> bool {
        self.stroke_active
    }

    pub fn process_input(&mut self, ctx: &Context) -> Vec<StrokeEvent> {
        self.process_pointer(PointerSample::from_context(ctx))
    }

    pub fn process_pointer(&mut self, sample: PointerSample) -> Vec<StrokeEvent> {
        let mut events = Vec::new();

        // Strokes only start inside the canvas, but may wander outside it
        if sample.pressed && !self.stroke_active {
            if let Some(pos) = sample.pos.filter(|p| self.canvas_rect.contains(*p)) {
                events.push(StrokeEvent::Pressed(self.local(pos)));
                self.stroke_active = true;
                self.last_pos = Some(pos);
            }
        } else if self.stroke_active && sample.down {
            if let Some(pos) = sample.pos.filter(|p| Some(*p) != self.last_pos) {
                events.push(StrokeEvent::Dragged(self.local(pos)));
                self.last_pos = Some(pos);
            }
        }

        if self.stroke_active && (sample.released || (!sample.down && !sample.pressed)) {
            if let Some(pos) = sample.pos.or(self.last_pos) {
                events.push(StrokeEvent::Released(self.local(pos)));
            }
            self.stroke_active = false;
            self.last_pos = None;
        }

        events
    }

    fn local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2().round()
    }
}
