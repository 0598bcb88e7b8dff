//! File menu actions and the prompts they need.
//!
//! Dialogs are behind the [`Prompt`] trait so the flows can run with native
//! dialogs in the app and with scripted answers in tests.

use crate::canvas::Canvas;
use crate::error::{DoodleError, DoodleResult};
use crate::file_handler::{self, PersistedFile};
use std::fmt;
use std::path::{Path, PathBuf};

pub const ABOUT_TITLE: &str = "About Doodler";
pub const ABOUT_TEXT: &str = "Doodler is a simple drawing program written in Rust using egui.";

/// Answer to "the current doodle is not saved, save it?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    DontSave,
    Cancel,
}

/// Dialogs the file actions may show
pub trait Prompt {
    fn confirm_discard(&mut self, file_name: &str) -> SaveChoice;
    /// Pick a file to open, starting in `directory`
    fn pick_open_file(&mut self, directory: &Path) -> Option<PathBuf>;
    /// Pick a destination, pre-filled with `suggested`
    fn pick_save_file(&mut self, suggested: &PersistedFile) -> Option<PathBuf>;
    fn confirm_overwrite(&mut self, path: &Path) -> bool;
    fn show_error(&mut self, title: &str, message: &str);
    fn show_about(&mut self, title: &str, text: &str);
}

/// Entries of the File and Help menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCommand {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    About,
}

impl fmt::Display for FileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileCommand::New => "New...",
            FileCommand::Open => "Open...",
            FileCommand::Save => "Save...",
            FileCommand::SaveAs => "Save As...",
            FileCommand::Exit => "Exit",
            FileCommand::About => "About",
        };
        f.write_str(label)
    }
}

/// What happened when a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command finished (or had nothing to do)
    Done,
    /// The user backed out
    Cancelled,
    /// The command failed; the user has been told
    Failed,
    /// The application should close
    Quit,
}

impl FileCommand {
    pub fn execute(self, canvas: &Canvas, prompt: &mut dyn Prompt) -> CommandOutcome {
        log::info!("Running menu command: {:?}", self);
        match self {
            FileCommand::New => new_file(canvas, prompt),
            FileCommand::Open => open_file(canvas, prompt),
            FileCommand::Save => save(canvas, prompt),
            FileCommand::SaveAs => save_as(canvas, prompt),
            FileCommand::Exit => exit(canvas, prompt),
            FileCommand::About => {
                prompt.show_about(ABOUT_TITLE, ABOUT_TEXT);
                CommandOutcome::Done
            }
        }
    }
}

/// Offer to save unsaved work. Returns false if the triggering action should
/// be abandoned.
pub fn confirm_discard(canvas: &Canvas, prompt: &mut dyn Prompt) -> bool {
    if !canvas.is_modified() {
        return true;
    }
    let file = canvas.backing_file();
    match prompt.confirm_discard(file.file_name()) {
        SaveChoice::Save => save(canvas, prompt) == CommandOutcome::Done,
        SaveChoice::DontSave => true,
        SaveChoice::Cancel => false,
    }
}

pub fn new_file(canvas: &Canvas, prompt: &mut dyn Prompt) -> CommandOutcome {
    if !confirm_discard(canvas, prompt) {
        return CommandOutcome::Cancelled;
    }
    match canvas.new_doodle() {
        Ok(()) => CommandOutcome::Done,
        Err(err) => report(prompt, "Error When Starting Over", &err),
    }
}

pub fn open_file(canvas: &Canvas, prompt: &mut dyn Prompt) -> CommandOutcome {
    if !confirm_discard(canvas, prompt) {
        return CommandOutcome::Cancelled;
    }
    let directory = canvas.config().save_directory.clone();
    let Some(path) = prompt.pick_open_file(&directory) else {
        return CommandOutcome::Cancelled;
    };
    match load_into(canvas, &path) {
        Ok(()) => CommandOutcome::Done,
        Err(err) => report(prompt, "Error When Opening File", &err),
    }
}

fn load_into(canvas: &Canvas, path: &Path) -> DoodleResult<()> {
    let image = file_handler::load_image(path)?;
    canvas.replace(image)?;
    canvas.flush()?;

    // Saving always writes PNG, so other formats get a PNG sibling that has
    // not been written yet
    let opened = PersistedFile::from_path(path);
    if opened.is_png() {
        canvas.set_backing_file(opened);
        canvas.mark_saved(true);
    } else {
        canvas.set_backing_file(opened.with_png_extension());
        canvas.mark_saved(false);
        canvas.mark_clean();
    }
    Ok(())
}

/// Write to the backing file, or ask for one if it was never chosen
pub fn save(canvas: &Canvas, prompt: &mut dyn Prompt) -> CommandOutcome {
    if !canvas.is_saved() {
        return save_as(canvas, prompt);
    }
    let file = canvas.backing_file();
    match write_to(canvas, &file) {
        Ok(()) => CommandOutcome::Done,
        Err(err) => report(prompt, "Error When Saving File", &err),
    }
}

pub fn save_as(canvas: &Canvas, prompt: &mut dyn Prompt) -> CommandOutcome {
    let suggested = canvas.backing_file();
    let Some(chosen) = prompt.pick_save_file(&suggested) else {
        return CommandOutcome::Cancelled;
    };
    // The bytes are always PNG, whatever name was typed
    let mut file = PersistedFile::from_path(&chosen);
    if !file.is_png() {
        file = file.with_png_extension();
    }
    let path = file.path();
    if path.exists() && !prompt.confirm_overwrite(&path) {
        log::info!("Overwrite of {} declined", path.display());
        return CommandOutcome::Cancelled;
    }
    match write_to(canvas, &file) {
        Ok(()) => CommandOutcome::Done,
        Err(err) => report(prompt, "Error When Saving File", &err),
    }
}

/// Encode the current pixels into `file`. The backing file and flags only
/// change once the write succeeded.
fn write_to(canvas: &Canvas, file: &PersistedFile) -> DoodleResult<()> {
    canvas.flush()?;
    let image = canvas.current_buffer();
    file_handler::save_png(&image, &file.path())?;
    canvas.set_backing_file(file.clone());
    canvas.mark_saved(true);
    Ok(())
}

pub fn exit(canvas: &Canvas, prompt: &mut dyn Prompt) -> CommandOutcome {
    if confirm_discard(canvas, prompt) {
        CommandOutcome::Quit
    } else {
        CommandOutcome::Cancelled
    }
}

fn report(prompt: &mut dyn Prompt, title: &str, err: &DoodleError) -> CommandOutcome {
    log::error!("{}: {}", title, err);
    prompt.show_error(title, &err.to_string());
    CommandOutcome::Failed
}
