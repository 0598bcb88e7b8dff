use crate::config::DoodleConfig;
use crate::shape::Shape;
use crate::state::{ToolKind, ToolState};

/// The options strip above the canvas. Returns true if anything changed.
pub fn tools_panel(ctx: &egui::Context, tools: &mut ToolState, config: &DoodleConfig) -> bool {
    let before = tools.clone();

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.group(|ui| {
                ui.label("Tools");
                for kind in ToolKind::ALL {
                    ui.selectable_value(&mut tools.tool, kind, kind.to_string());
                }
            });

            ui.group(|ui| {
                ui.label("Size");
                ui.add(egui::Slider::new(&mut tools.size, config.size_range()).step_by(5.0));
            });

            ui.group(|ui| {
                ui.label("Color");
                ui.color_edit_button_srgba(&mut tools.color);
            });

            ui.group(|ui| {
                ui.add_enabled_ui(tools.tool == ToolKind::Stamp, |ui| {
                    egui::ComboBox::from_label("Shape")
                        .selected_text(tools.shape.to_string())
                        .show_ui(ui, |ui| {
                            for shape in Shape::ALL {
                                ui.selectable_value(&mut tools.shape, shape, shape.to_string());
                            }
                        });
                });
            });
        });
    });

    let changed = *tools != before;
    if changed {
        log::info!(
            "Tool options changed: {} {} size {} color {:?}",
            tools.tool,
            tools.shape,
            tools.size,
            tools.color
        );
    }
    changed
}
