mod common;

use common::{ScriptedPrompt, Touch, canvas_in, click, count_color, temp_dir};
use doodler::{CommandOutcome, FileCommand, SaveChoice, Shape, ToolKind, ToolState};
use egui::Color32;
use image::{Rgba, RgbaImage};

fn square_stamp() -> ToolState {
    ToolState {
        tool: ToolKind::Stamp,
        shape: Shape::Square,
        size: 10,
        ..ToolState::default()
    }
}

#[test]
fn test_save_as_declined_overwrite_leaves_file_untouched() {
    let dir = temp_dir();
    let existing = dir.touch("keep.png");
    let original = std::fs::read(&existing).unwrap();

    let canvas = canvas_in(dir.path(), 50, 50, square_stamp());
    click(&canvas, 30.0, 30.0);

    let mut prompt = ScriptedPrompt {
        save_path: Some(existing.clone()),
        allow_overwrite: false,
        ..ScriptedPrompt::default()
    };
    let outcome = FileCommand::SaveAs.execute(&canvas, &mut prompt);

    assert_eq!(outcome, CommandOutcome::Cancelled);
    assert_eq!(prompt.overwrite_asked, 1);
    assert_eq!(std::fs::read(&existing).unwrap(), original);
    assert!(canvas.is_modified());
    assert_ne!(canvas.backing_file().path(), existing);
}

#[test]
fn test_save_as_accepted_overwrite_writes_png() {
    let dir = temp_dir();
    let existing = dir.touch("replace me.png");

    let canvas = canvas_in(dir.path(), 50, 40, square_stamp());
    click(&canvas, 30.0, 30.0);

    let mut prompt = ScriptedPrompt {
        save_path: Some(existing.clone()),
        allow_overwrite: true,
        ..ScriptedPrompt::default()
    };
    let outcome = FileCommand::SaveAs.execute(&canvas, &mut prompt);

    assert_eq!(outcome, CommandOutcome::Done);
    assert!(!canvas.is_modified());
    assert!(canvas.is_saved());
    assert_eq!(canvas.backing_file().path(), existing);

    let written = image::open(&existing).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (50, 40));
    assert_eq!(written.get_pixel(20, 20).0, [0, 0, 0, 255]);
}

#[test]
fn test_save_as_other_extension_writes_png_sibling() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 30, 30, square_stamp());
    click(&canvas, 20.0, 20.0);

    let mut prompt = ScriptedPrompt {
        save_path: Some(dir.path().join("picture.jpg")),
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::SaveAs.execute(&canvas, &mut prompt), CommandOutcome::Done);

    let png = dir.path().join("picture.png");
    assert!(!dir.path().join("picture.jpg").exists());
    assert_eq!(canvas.backing_file().path(), png);
    let bytes = std::fs::read(&png).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
    assert_eq!(image::open(&png).unwrap().to_rgba8().dimensions(), (30, 30));
}

#[test]
fn test_save_as_asks_before_replacing_the_png_sibling() {
    let dir = temp_dir();
    let sibling = dir.touch("keep.png");
    let canvas = canvas_in(dir.path(), 30, 30, square_stamp());
    click(&canvas, 20.0, 20.0);

    let mut prompt = ScriptedPrompt {
        save_path: Some(dir.path().join("keep")),
        allow_overwrite: false,
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::SaveAs.execute(&canvas, &mut prompt), CommandOutcome::Cancelled);
    assert_eq!(prompt.overwrite_asked, 1);
    assert_eq!(std::fs::read(&sibling).unwrap(), b"not really an image");
}

#[test]
fn test_first_save_asks_for_a_name() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 20, 20, square_stamp());
    click(&canvas, 15.0, 15.0);

    let target = dir.path().join("doodle.png");
    let mut prompt = ScriptedPrompt {
        save_path: Some(target.clone()),
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::Save.execute(&canvas, &mut prompt), CommandOutcome::Done);

    let suggested = prompt.suggested.expect("save dialog was shown");
    assert_eq!(suggested.file_name(), "doodle.png");
    assert!(target.exists());
    assert_eq!(prompt.overwrite_asked, 0);

    // Once named, Save writes straight to the same file
    click(&canvas, 5.0, 5.0);
    let mut prompt = ScriptedPrompt::default();
    assert_eq!(FileCommand::Save.execute(&canvas, &mut prompt), CommandOutcome::Done);
    assert!(prompt.suggested.is_none());
    assert!(!canvas.is_modified());
}

#[test]
fn test_failed_save_keeps_modified_flag() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 20, 20, square_stamp());
    click(&canvas, 15.0, 15.0);
    let before = canvas.backing_file();

    let mut prompt = ScriptedPrompt {
        save_path: Some(dir.path().join("missing-dir").join("doodle.png")),
        ..ScriptedPrompt::default()
    };
    let outcome = FileCommand::SaveAs.execute(&canvas, &mut prompt);

    assert_eq!(outcome, CommandOutcome::Failed);
    assert_eq!(prompt.errors.len(), 1);
    assert!(canvas.is_modified());
    assert!(!canvas.is_saved());
    assert_eq!(canvas.backing_file(), before);
}

#[test]
fn test_open_rejects_unsupported_extension() {
    let dir = temp_dir();
    let notes = dir.touch("notes.txt");
    let canvas = canvas_in(dir.path(), 30, 30, square_stamp());

    let mut prompt = ScriptedPrompt {
        open_path: Some(notes),
        ..ScriptedPrompt::default()
    };
    let outcome = FileCommand::Open.execute(&canvas, &mut prompt);

    assert_eq!(outcome, CommandOutcome::Failed);
    assert_eq!(prompt.errors, vec![format!("{} is not an image.", dir.path().join("notes.txt").display())]);
    assert_eq!(count_color(&canvas, Color32::WHITE), 30 * 30);
}

#[test]
fn test_open_rejects_undecodable_file() {
    let dir = temp_dir();
    let broken = dir.touch("broken.png");
    let canvas = canvas_in(dir.path(), 30, 30, square_stamp());
    let before = canvas.backing_file();

    let mut prompt = ScriptedPrompt {
        open_path: Some(broken),
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::Open.execute(&canvas, &mut prompt), CommandOutcome::Failed);
    assert_eq!(prompt.errors.len(), 1);
    assert_eq!(canvas.backing_file(), before);
    assert_eq!(canvas.surface().width(), 30);
}

#[test]
fn test_open_png_replaces_surface() {
    let dir = temp_dir();
    let path = dir.path().join("picture.PNG");
    RgbaImage::from_pixel(12, 7, Rgba([255, 0, 0, 255]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();

    let canvas = canvas_in(dir.path(), 30, 30, square_stamp());
    let mut prompt = ScriptedPrompt {
        open_path: Some(path.clone()),
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::Open.execute(&canvas, &mut prompt), CommandOutcome::Done);

    assert_eq!(count_color(&canvas, Color32::RED), 12 * 7);
    assert!(!canvas.is_modified());
    assert!(canvas.is_saved());
    assert_eq!(canvas.backing_file().path(), path);
}

#[test]
fn test_open_bmp_gets_png_backing_file() {
    let dir = temp_dir();
    let path = dir.path().join("scan.bmp");
    RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]))
        .save_with_format(&path, image::ImageFormat::Bmp)
        .unwrap();

    let canvas = canvas_in(dir.path(), 30, 30, square_stamp());
    let mut prompt = ScriptedPrompt {
        open_path: Some(path),
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::Open.execute(&canvas, &mut prompt), CommandOutcome::Done);

    assert_eq!(canvas.backing_file().file_name(), "scan.png");
    assert!(!canvas.is_saved());
    assert!(!canvas.is_modified());
}

#[test]
fn test_cancel_aborts_new() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 40, 40, square_stamp());
    click(&canvas, 25.0, 25.0);

    let mut prompt = ScriptedPrompt {
        discard_answer: Some(SaveChoice::Cancel),
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::New.execute(&canvas, &mut prompt), CommandOutcome::Cancelled);
    assert_eq!(prompt.discard_asked, 1);
    assert!(canvas.is_modified());
    assert_eq!(count_color(&canvas, Color32::BLACK), 100);
}

#[test]
fn test_dont_save_starts_over() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 40, 40, square_stamp());
    click(&canvas, 25.0, 25.0);
    let canvas_file = canvas.backing_file();
    dir.touch(canvas_file.file_name());

    let mut prompt = ScriptedPrompt {
        discard_answer: Some(SaveChoice::DontSave),
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::New.execute(&canvas, &mut prompt), CommandOutcome::Done);

    // Visible as soon as the command returns
    assert!(!canvas.is_modified());
    assert_eq!(count_color(&canvas, Color32::WHITE), 40 * 40);
    assert_eq!(canvas.backing_file().file_name(), "doodle (1).png");
}

#[test]
fn test_save_choice_saves_before_exit() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 40, 40, square_stamp());
    click(&canvas, 25.0, 25.0);

    let target = dir.path().join("before exit.png");
    let mut prompt = ScriptedPrompt {
        discard_answer: Some(SaveChoice::Save),
        save_path: Some(target.clone()),
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::Exit.execute(&canvas, &mut prompt), CommandOutcome::Quit);
    assert!(target.exists());
}

#[test]
fn test_cancelled_save_dialog_aborts_exit() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 40, 40, square_stamp());
    click(&canvas, 25.0, 25.0);

    let mut prompt = ScriptedPrompt {
        discard_answer: Some(SaveChoice::Save),
        save_path: None,
        ..ScriptedPrompt::default()
    };
    assert_eq!(FileCommand::Exit.execute(&canvas, &mut prompt), CommandOutcome::Cancelled);
}

#[test]
fn test_exit_without_changes_does_not_prompt() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 10, 10, square_stamp());

    let mut prompt = ScriptedPrompt::default();
    assert_eq!(FileCommand::Exit.execute(&canvas, &mut prompt), CommandOutcome::Quit);
    assert_eq!(prompt.discard_asked, 0);
}

#[test]
fn test_about_shows_text() {
    let dir = temp_dir();
    let canvas = canvas_in(dir.path(), 10, 10, square_stamp());

    let mut prompt = ScriptedPrompt::default();
    assert_eq!(FileCommand::About.execute(&canvas, &mut prompt), CommandOutcome::Done);
    assert!(prompt.about_shown);
}
