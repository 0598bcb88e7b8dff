use crate::config::DoodleConfig;
use crate::error::{DoodleError, DoodleResult};
use crate::file_handler::PersistedFile;
use crate::state::ToolState;
use crate::stroke::{Frame, StrokeEvent};
use crate::surface::{RasterSurface, RedrawSignal};
use crate::worker::DrawingWorker;
use egui::{Vec2, vec2};
use futures::channel::mpsc::{self, UnboundedSender};
use futures::channel::oneshot;
use image::RgbaImage;
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::sync::Arc;
use std::thread::JoinHandle;

/// UI-side handle to a raster surface and the drawing worker that serves it.
///
/// Pointer events go through [`Canvas::send`]; pixel changes always happen on
/// the worker thread, in queue order.
pub struct Canvas {
    surface: Arc<Mutex<RasterSurface>>,
    tools: Arc<RwLock<ToolState>>,
    frames: UnboundedSender<Frame>,
    worker: Option<JoinHandle<()>>,
    config: DoodleConfig,
}

impl Canvas {
    /// Create a `width` x `height` surface with a freshly generated backing
    /// file and start its worker
    pub fn new(
        width: u32,
        height: u32,
        config: DoodleConfig,
        tools: ToolState,
        redraw: Arc<dyn RedrawSignal>,
    ) -> DoodleResult<Self> {
        let backing_file = PersistedFile::generate(&config.save_directory);
        let surface = RasterSurface::new(width, height, config.background, backing_file, redraw);
        log::info!(
            "Created {}x{} canvas backed by {}",
            surface.width(),
            surface.height(),
            surface.backing_file().path().display()
        );

        let surface = Arc::new(Mutex::new(surface));
        let tools = Arc::new(RwLock::new(tools));
        let (frames, receiver) = mpsc::unbounded();
        let worker = DrawingWorker::new(surface.clone(), tools.clone(), config.pen_size_divisor)
            .spawn(receiver)?;

        Ok(Self {
            surface,
            tools,
            frames,
            worker: Some(worker),
            config,
        })
    }

    /// Create a canvas filling `available` display space minus the margin on
    /// every side
    pub fn fitted(
        available: Vec2,
        config: DoodleConfig,
        tools: ToolState,
        redraw: Arc<dyn RedrawSignal>,
    ) -> DoodleResult<Self> {
        let inner = available - vec2(config.canvas_margin, config.canvas_margin) * 2.0;
        let width = inner.x.max(1.0) as u32;
        let height = inner.y.max(1.0) as u32;
        Self::new(width, height, config, tools, redraw)
    }

    pub fn config(&self) -> &DoodleConfig {
        &self.config
    }

    /// Queue a pointer event given in display coordinates (relative to the
    /// canvas widget). A release is followed by the end-of-stroke sentinel.
    pub fn send(&self, event: StrokeEvent) -> DoodleResult<()> {
        let margin = self.config.canvas_margin;
        let event = event.translated(-vec2(margin, margin));
        self.push(Frame::Event(event))?;
        if matches!(event, StrokeEvent::Released(_)) {
            self.push(Frame::EndOfStroke)?;
        }
        Ok(())
    }

    /// Queue a refill of the surface with its background color
    pub fn reset(&self) -> DoodleResult<()> {
        self.push(Frame::Reset)
    }

    /// Start over: blank pixels and a newly generated, unsaved backing file
    pub fn new_doodle(&self) -> DoodleResult<()> {
        self.reset()?;
        self.flush()?;
        let file = PersistedFile::generate(&self.config.save_directory);
        let mut surface = self.surface.lock();
        surface.set_backing_file(file);
        surface.mark_saved(false);
        Ok(())
    }

    /// Queue wholesale substitution of the pixel buffer
    pub fn replace(&self, image: RgbaImage) -> DoodleResult<()> {
        self.push(Frame::Replace(image))
    }

    /// Block until every frame queued so far has been applied
    pub fn flush(&self) -> DoodleResult<()> {
        let (done, wait) = oneshot::channel();
        self.push(Frame::Flush(done))?;
        futures::executor::block_on(wait).map_err(|_| DoodleError::WorkerGone)
    }

    /// Copy of the pixels as they are right now
    pub fn current_buffer(&self) -> RgbaImage {
        self.surface.lock().image().clone()
    }

    /// Lock the surface for reading (display) or metadata updates
    pub fn surface(&self) -> MutexGuard<'_, RasterSurface> {
        self.surface.lock()
    }

    pub fn is_modified(&self) -> bool {
        self.surface.lock().is_modified()
    }

    pub fn is_saved(&self) -> bool {
        self.surface.lock().is_saved()
    }

    pub fn mark_saved(&self, saved: bool) {
        self.surface.lock().mark_saved(saved);
    }

    pub fn mark_clean(&self) {
        self.surface.lock().mark_clean();
    }

    pub fn backing_file(&self) -> PersistedFile {
        self.surface.lock().backing_file().clone()
    }

    pub fn set_backing_file(&self, file: PersistedFile) {
        self.surface.lock().set_backing_file(file);
    }

    pub fn tool_state(&self) -> ToolState {
        self.tools.read().clone()
    }

    /// Change the drawing configuration; takes effect on the next edit
    pub fn update_tools(&self, update: impl FnOnce(&mut ToolState)) {
        update(&mut self.tools.write());
    }

    fn push(&self, frame: Frame) -> DoodleResult<()> {
        self.frames
            .unbounded_send(frame)
            .map_err(|_| DoodleError::WorkerGone)
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        self.frames.close_channel();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Drawing worker panicked");
            }
        }
    }
}
