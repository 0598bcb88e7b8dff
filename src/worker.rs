//! The drawing worker: the only code that changes raster pixels.
//!
//! It runs on its own thread and consumes [`Frame`]s from an unbounded
//! channel, one at a time, turning pointer strokes into pen segments or
//! stamped shapes.

use crate::state::{ToolKind, ToolState};
use crate::stroke::{Frame, StrokeEvent};
use crate::surface::RasterSurface;
use egui::Pos2;
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Progress through the stroke currently being drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeProgress {
    /// Last point the pen reached
    Pen { last: Pos2 },
    /// Release point, once seen; stamped when the stroke ends
    Stamp { release: Option<Pos2> },
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum WorkerState {
    #[default]
    Idle,
    InStroke(StrokeProgress),
}

impl WorkerState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkerState::Idle => "Idle",
            WorkerState::InStroke(StrokeProgress::Pen { .. }) => "InStroke(Pen)",
            WorkerState::InStroke(StrokeProgress::Stamp { .. }) => "InStroke(Stamp)",
        }
    }
}

pub struct DrawingWorker {
    surface: Arc<Mutex<RasterSurface>>,
    tools: Arc<RwLock<ToolState>>,
    pen_size_divisor: u32,
    state: WorkerState,
}

impl DrawingWorker {
    pub fn new(
        surface: Arc<Mutex<RasterSurface>>,
        tools: Arc<RwLock<ToolState>>,
        pen_size_divisor: u32,
    ) -> Self {
        Self {
            surface,
            tools,
            pen_size_divisor,
            state: WorkerState::Idle,
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Start the worker on a dedicated thread. It exits once every sender of
    /// `frames` has been dropped.
    pub fn spawn(self, frames: UnboundedReceiver<Frame>) -> std::io::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name("drawing-worker".to_owned())
            .spawn(move || futures::executor::block_on(self.run(frames)))
    }

    /// Apply frames until the channel closes
    pub async fn run(mut self, mut frames: UnboundedReceiver<Frame>) {
        log::debug!("Drawing worker started");
        while let Some(frame) = frames.next().await {
            self.apply(frame);
        }
        if self.state != WorkerState::Idle {
            log::warn!("Queue closed during a stroke ({})", self.state.name());
        }
        log::debug!("Drawing worker stopped");
    }

    /// Apply a single frame
    pub fn apply(&mut self, frame: Frame) {
        match frame {
            Frame::Event(event) => {
                self.state = self.on_event(event);
            }
            Frame::EndOfStroke => {
                self.finish_stroke();
                self.state = WorkerState::Idle;
            }
            Frame::Reset => self.surface.lock().reset(),
            Frame::Replace(image) => self.surface.lock().replace(image),
            Frame::Flush(done) => {
                // The requester may have given up waiting
                let _ = done.send(());
            }
        }
    }

    fn on_event(&mut self, event: StrokeEvent) -> WorkerState {
        use StrokeEvent::*;
        use StrokeProgress::*;

        match (self.state, event) {
            (WorkerState::Idle, Pressed(p)) => self.begin_stroke(p),
            (WorkerState::InStroke(_), Pressed(p)) => {
                log::warn!("Press at {:?} before the previous stroke ended; restarting", p);
                self.begin_stroke(p)
            }
            (WorkerState::Idle, Dragged(p) | Released(p)) => {
                log::warn!("Ignoring {:?} at {:?} outside a stroke", event, p);
                WorkerState::Idle
            }
            (WorkerState::InStroke(Pen { last }), Dragged(p) | Released(p)) => {
                self.pen_segment(last, p);
                WorkerState::InStroke(Pen { last: p })
            }
            (WorkerState::InStroke(Stamp { release }), Dragged(p)) => {
                self.stamp(p);
                WorkerState::InStroke(Stamp { release })
            }
            (WorkerState::InStroke(Stamp { .. }), Released(p)) => {
                WorkerState::InStroke(Stamp { release: Some(p) })
            }
        }
    }

    fn begin_stroke(&self, p: Pos2) -> WorkerState {
        let tool = self.tools.read().tool;
        log::debug!("Stroke started at {:?} with {}", p, tool);
        match tool {
            ToolKind::Pen => WorkerState::InStroke(StrokeProgress::Pen { last: p }),
            ToolKind::Stamp => WorkerState::InStroke(StrokeProgress::Stamp { release: None }),
        }
    }

    fn finish_stroke(&mut self) {
        match self.state {
            WorkerState::InStroke(StrokeProgress::Stamp { release: Some(p) }) => self.stamp(p),
            WorkerState::InStroke(StrokeProgress::Stamp { release: None }) => {
                log::warn!("Stamp stroke ended without a release point");
            }
            WorkerState::InStroke(StrokeProgress::Pen { .. }) => {}
            WorkerState::Idle => log::warn!("End of stroke received while idle"),
        }
        log::debug!("Stroke finished");
    }

    fn pen_segment(&self, from: Pos2, to: Pos2) {
        let (color, width) = {
            let tools = self.tools.read();
            (tools.color, tools.pen_width(self.pen_size_divisor))
        };
        self.surface.lock().draw_line(from, to, color, width);
    }

    fn stamp(&self, at: Pos2) {
        let (region, color) = {
            let tools = self.tools.read();
            (tools.shape.render(at, tools.size as f32), tools.color)
        };
        self.surface.lock().fill(&region, color);
    }
}
