use crate::error::DoodleResult;
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Settings that shape a doodling session.
///
/// Everything here is handed to [`crate::Canvas::new`] explicitly; nothing is
/// read from the process environment after bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoodleConfig {
    /// Directory where generated doodle names are checked and saved
    pub save_directory: PathBuf,
    /// Inset between the canvas widget's edge and the raster, in points
    pub canvas_margin: f32,
    /// Pen width is the tool size divided by this
    pub pen_size_divisor: u32,
    pub min_size: u32,
    pub max_size: u32,
    pub default_size: u32,
    pub background: Color32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DoodleConfig {
    fn default() -> Self {
        Self {
            save_directory: PathBuf::from("."),
            canvas_margin: 10.0,
            pen_size_divisor: 5,
            min_size: 5,
            max_size: 200,
            default_size: 50,
            background: Color32::WHITE,
            window_size: [1024.0, 768.0],
            min_window_size: [480.0, 360.0],
        }
    }
}

impl DoodleConfig {
    /// Defaults, saving into the given directory
    pub fn with_save_directory(save_directory: impl Into<PathBuf>) -> Self {
        Self {
            save_directory: save_directory.into(),
            ..Self::default()
        }
    }

    /// Defaults, saving into the user's home directory (or the working
    /// directory when there is none)
    pub fn in_home_directory() -> Self {
        Self::with_save_directory(home::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Read a JSON config file. Missing keys fall back to their defaults.
    pub fn from_json_file(path: &Path) -> DoodleResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        Ok(config.sanitized())
    }

    pub fn size_range(&self) -> RangeInclusive<u32> {
        self.min_size..=self.max_size
    }

    /// Clamp values that would make the tools unusable
    fn sanitized(mut self) -> Self {
        self.pen_size_divisor = self.pen_size_divisor.max(1);
        self.min_size = self.min_size.max(1);
        if self.max_size < self.min_size {
            self.max_size = self.min_size;
        }
        self.default_size = self.default_size.clamp(self.min_size, self.max_size);
        self.canvas_margin = self.canvas_margin.max(0.0);
        self
    }
}
