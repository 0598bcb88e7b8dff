use crate::command::{Prompt, SaveChoice};
use crate::file_handler::{OPEN_EXTENSIONS, PersistedFile};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

/// Native dialogs, shown modally from the UI thread
#[derive(Debug, Default)]
pub struct NativePrompt;

impl Prompt for NativePrompt {
    fn confirm_discard(&mut self, file_name: &str) -> SaveChoice {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Warning")
            .set_description(format!(
                "{file_name} is not saved.  Would you like to save it?"
            ))
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        match answer {
            MessageDialogResult::Yes => SaveChoice::Save,
            MessageDialogResult::No => SaveChoice::DontSave,
            _ => SaveChoice::Cancel,
        }
    }

    fn pick_open_file(&mut self, directory: &Path) -> Option<PathBuf> {
        FileDialog::new()
            .add_filter("Images", &OPEN_EXTENSIONS)
            .add_filter("PNG Image", &["png"])
            .set_directory(directory)
            .pick_file()
    }

    fn pick_save_file(&mut self, suggested: &PersistedFile) -> Option<PathBuf> {
        FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_directory(suggested.directory())
            .set_file_name(suggested.file_name())
            .save_file()
    }

    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Overwrite File?")
            .set_description(format!("{name} already exists.  Overwrite?"))
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_about(&mut self, title: &str, text: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
