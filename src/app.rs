use crate::canvas::Canvas;
use crate::command::{self, CommandOutcome, FileCommand};
use crate::config::DoodleConfig;
use crate::dialogs::NativePrompt;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::ToolState;
use std::sync::Arc;

const TOOLS_KEY: &str = "doodler_tools";

/// Title for the main window
pub fn window_title(file_name: &str, modified: bool) -> String {
    if modified {
        format!("Doodler! - {file_name} (Modified)")
    } else {
        format!("Doodler! - {file_name}")
    }
}

pub struct DoodleApp {
    config: DoodleConfig,
    /// Options as shown in the tools panel; pushed into the canvas on change
    tools: ToolState,
    // Created on the first frame, once the drawing area is known
    canvas: Option<Canvas>,
    input: InputHandler,
    renderer: Renderer,
    title: String,
    allow_close: bool,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DoodleConfig) -> Self {
        let mut tools = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolState>(storage, TOOLS_KEY))
            .unwrap_or_else(|| ToolState::from_config(&config));
        tools.size = tools.size.clamp(config.min_size, config.max_size);

        Self {
            config,
            tools,
            canvas: None,
            input: InputHandler::new(egui::Rect::NOTHING),
            renderer: Renderer::new(),
            title: String::new(),
            allow_close: false,
        }
    }

    fn ensure_canvas(&mut self, ctx: &egui::Context) {
        if self.canvas.is_some() {
            return;
        }
        let available = ctx.available_rect().size();
        match Canvas::fitted(available, self.config.clone(), self.tools.clone(), Arc::new(ctx.clone())) {
            Ok(canvas) => self.canvas = Some(canvas),
            Err(err) => log::error!("Failed to create canvas: {}", err),
        }
    }

    fn run_command(&mut self, ctx: &egui::Context, command: FileCommand) {
        let Some(canvas) = &self.canvas else {
            return;
        };
        if command.execute(canvas, &mut NativePrompt) == CommandOutcome::Quit {
            self.allow_close = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.allow_close {
            return;
        }
        let Some(canvas) = &self.canvas else {
            return;
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        if command::exit(canvas, &mut NativePrompt) == CommandOutcome::Quit {
            self.allow_close = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let Some(canvas) = &self.canvas else {
            return;
        };
        let title = {
            let surface = canvas.surface();
            window_title(surface.backing_file().file_name(), surface.is_modified())
        };
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for DoodleApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, TOOLS_KEY, &self.tools);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let command = panels::menu_bar(ctx);

        if panels::tools_panel(ctx, &mut self.tools, &self.config) {
            if let Some(canvas) = &self.canvas {
                let tools = self.tools.clone();
                canvas.update_tools(|current| *current = tools);
            }
        }

        self.ensure_canvas(ctx);
        if let Some(canvas) = &self.canvas {
            panels::central_panel(ctx, canvas, &mut self.input, &mut self.renderer);
        }

        if let Some(command) = command {
            self.run_command(ctx, command);
        }
        self.handle_close_request(ctx);
        self.update_title(ctx);
    }
}
