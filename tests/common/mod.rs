#![allow(dead_code)]

use doodler::{Canvas, DoodleConfig, NoRedraw, PersistedFile, Prompt, SaveChoice, StrokeEvent, ToolState};
use egui::{Color32, pos2};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A fresh, empty directory removed when dropped
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Placeholder files for name generation and open tests
pub trait Touch {
    fn touch(&self, name: &str) -> PathBuf;
}

impl Touch for TempDir {
    fn touch(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, b"not really an image").unwrap();
        path
    }
}

pub fn canvas_in(dir: &Path, width: u32, height: u32, tools: ToolState) -> Canvas {
    let config = DoodleConfig::with_save_directory(dir);
    Canvas::new(width, height, config, tools, Arc::new(NoRedraw)).unwrap()
}

/// Click once at a display point and wait for the worker
pub fn click(canvas: &Canvas, x: f32, y: f32) {
    canvas.send(StrokeEvent::Pressed(pos2(x, y))).unwrap();
    canvas.send(StrokeEvent::Released(pos2(x, y))).unwrap();
    canvas.flush().unwrap();
}

pub fn count_color(canvas: &Canvas, color: Color32) -> usize {
    let rgba = color.to_srgba_unmultiplied();
    canvas
        .current_buffer()
        .pixels()
        .filter(|p| p.0 == rgba)
        .count()
}

/// Prompt answering from a script and recording what it was asked
#[derive(Default)]
pub struct ScriptedPrompt {
    pub discard_answer: Option<SaveChoice>,
    pub open_path: Option<PathBuf>,
    pub save_path: Option<PathBuf>,
    pub allow_overwrite: bool,

    pub discard_asked: usize,
    pub overwrite_asked: usize,
    pub suggested: Option<PersistedFile>,
    pub errors: Vec<String>,
    pub about_shown: bool,
}

impl Prompt for ScriptedPrompt {
    fn confirm_discard(&mut self, _file_name: &str) -> SaveChoice {
        self.discard_asked += 1;
        self.discard_answer.unwrap_or(SaveChoice::Cancel)
    }

    fn pick_open_file(&mut self, _directory: &Path) -> Option<PathBuf> {
        self.open_path.clone()
    }

    fn pick_save_file(&mut self, suggested: &PersistedFile) -> Option<PathBuf> {
        self.suggested = Some(suggested.clone());
        self.save_path.clone()
    }

    fn confirm_overwrite(&mut self, _path: &Path) -> bool {
        self.overwrite_asked += 1;
        self.allow_overwrite
    }

    fn show_error(&mut self, _title: &str, message: &str) {
        self.errors.push(message.to_owned());
    }

    fn show_about(&mut self, _title: &str, _text: &str) {
        self.about_shown = true;
    }
}
