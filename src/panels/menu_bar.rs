use crate::command::FileCommand;
use egui::{Key, KeyboardShortcut, Modifiers};

/// Ctrl+N (Cmd+N on macOS) starts a new doodle
pub const NEW_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);

/// File and Help menus. Returns the entry clicked this frame, if any.
pub fn menu_bar(ctx: &egui::Context) -> Option<FileCommand> {
    let mut chosen = None;
    if ctx.input_mut(|i| i.consume_shortcut(&NEW_SHORTCUT)) {
        chosen = Some(FileCommand::New);
    }

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                let new = egui::Button::new(FileCommand::New.to_string())
                    .shortcut_text(ctx.format_shortcut(&NEW_SHORTCUT));
                if ui.add(new).clicked() {
                    chosen = Some(FileCommand::New);
                    ui.close_menu();
                }
                for command in [FileCommand::Open, FileCommand::Save, FileCommand::SaveAs] {
                    if ui.button(command.to_string()).clicked() {
                        chosen = Some(command);
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui.button(FileCommand::Exit.to_string()).clicked() {
                    chosen = Some(FileCommand::Exit);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button(FileCommand::About.to_string()).clicked() {
                    chosen = Some(FileCommand::About);
                    ui.close_menu();
                }
            });
        });
    });

    chosen
}
