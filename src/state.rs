use crate::config::DoodleConfig;
use crate::shape::Shape;
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing modes. Matching on this is always exhaustive, so the worker can
/// never see a tool it does not know how to apply.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Freehand line following the pointer
    Pen,
    /// Drops the selected shape at every pointer position
    #[default]
    Stamp,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::Pen, ToolKind::Stamp];
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Pen => f.write_str("Pen"),
            ToolKind::Stamp => f.write_str("Stamp"),
        }
    }
}

/// The current drawing configuration, written by the option widgets and read
/// by the drawing worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    pub tool: ToolKind,
    pub shape: Shape,
    pub color: Color32,
    /// Stamp box side; pen width is derived from it
    pub size: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            shape: Shape::default(),
            color: Color32::BLACK,
            size: DoodleConfig::default().default_size,
        }
    }
}

impl ToolState {
    pub fn from_config(config: &DoodleConfig) -> Self {
        Self {
            size: config.default_size,
            ..Self::default()
        }
    }

    /// Pen stroke width for the current size
    pub fn pen_width(&self, divisor: u32) -> f32 {
        self.size as f32 / divisor.max(1) as f32
    }
}
