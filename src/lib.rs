#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod worker;

pub use app::DoodleApp;
pub use canvas::Canvas;
pub use command::{CommandOutcome, FileCommand, Prompt, SaveChoice};
pub use config::DoodleConfig;
pub use error::{DoodleError, DoodleResult};
pub use file_handler::PersistedFile;
pub use renderer::Renderer;
pub use shape::{Region, Shape};
pub use state::{ToolKind, ToolState};
pub use stroke::StrokeEvent;
pub use surface::{NoRedraw, RasterSurface, RedrawSignal};
