use egui::{Pos2, Vec2};
use futures::channel::oneshot;
use image::RgbaImage;

/// One step of a pointer interaction, in raster coordinates once queued
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeEvent {
    Pressed(Pos2),
    Dragged(Pos2),
    Released(Pos2),
}

impl StrokeEvent {
    pub fn point(&self) -> Pos2 {
        match *self {
            StrokeEvent::Pressed(p) | StrokeEvent::Dragged(p) | StrokeEvent::Released(p) => p,
        }
    }

    /// Same event, moved by `delta`
    pub fn translated(self, delta: Vec2) -> Self {
        match self {
            StrokeEvent::Pressed(p) => StrokeEvent::Pressed(p + delta),
            StrokeEvent::Dragged(p) => StrokeEvent::Dragged(p + delta),
            StrokeEvent::Released(p) => StrokeEvent::Released(p + delta),
        }
    }
}

/// Items on the drawing worker's queue.
///
/// A stroke is framed as `Event(Pressed)`, any number of `Event(Dragged)`,
/// `Event(Released)` and finally `EndOfStroke`. Surface commands may appear
/// anywhere and are applied in queue order.
pub enum Frame {
    Event(StrokeEvent),
    /// Sentinel queued right after a release
    EndOfStroke,
    /// Refill the surface with its background
    Reset,
    /// Substitute a freshly decoded buffer
    Replace(RgbaImage),
    /// Answered once every earlier frame has been applied
    Flush(oneshot::Sender<()>),
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frame::Event(event) => f.debug_tuple("Event").field(event).finish(),
            Frame::EndOfStroke => f.write_str("EndOfStroke"),
            Frame::Reset => f.write_str("Reset"),
            Frame::Replace(image) => f
                .debug_struct("Replace")
                .field("width", &image.width())
                .field("height", &image.height())
                .finish(),
            Frame::Flush(_) => f.write_str("Flush"),
        }
    }
}
