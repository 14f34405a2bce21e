use nih_plug::prelude::*;
use nih_plug_egui::egui::{self, Align2, Color32, FontId, LayerId, Pos2, Vec2};
use nih_plug_egui::resizable_window::ResizableWindow;
use nih_plug_egui::{create_egui_editor, EguiState};

use spectralz_core::editor::Justification;
use spectralz_core::{
    Colour, DrawCommand, EditorSize, Rect as EditorRect, SizeLimits, SplashEditor,
};

pub fn editor(splash: SplashEditor) -> Option<Box<dyn Editor>> {
    let initial = splash.size();
    let limits = splash.resize_limits();
    let egui_state = EguiState::from_size(initial.width, initial.height);
    let window_state = egui_state.clone();

    tracing::debug!(
        width = initial.width,
        height = initial.height,
        "creating Spectralz editor"
    );

    create_egui_editor(
        egui_state,
        splash,
        |_ctx, _splash| {},
        move |egui_ctx, _setter, splash| {
            let (width, height) = window_state.size();
            if (width, height) != (splash.size().width, splash.size().height) {
                splash.set_size(width, height);
            }

            ResizableWindow::new("spectralz-editor")
                .min_size(Vec2::new(
                    limits.min.width as f32,
                    limits.min.height as f32,
                ))
                .show(egui_ctx, window_state.as_ref(), |ui| {
                    let origin = ui.ctx().screen_rect().min;
                    let painter = ui.ctx().layer_painter(LayerId::background());
                    for command in splash.paint() {
                        draw(&painter, origin, command);
                    }
                });

            // The resize handle only knows the minimum, so pull oversized
            // windows back to the limit on the next frame.
            if let Some(clamped) = clamp_window(window_state.size(), limits) {
                window_state.set_requested_size(clamped);
            }
        },
    )
}

/// Returns the size the window has to be shrunk or grown to, if it is
/// outside `limits`.
fn clamp_window(size: (u32, u32), limits: SizeLimits) -> Option<(u32, u32)> {
    let clamped = limits.clamp(EditorSize::new(size.0, size.1));
    let clamped = (clamped.width, clamped.height);
    (clamped != size).then_some(clamped)
}

fn draw(painter: &egui::Painter, origin: Pos2, command: DrawCommand) {
    match command {
        DrawCommand::FillAll(colour) => {
            painter.rect_filled(painter.clip_rect(), 0.0, to_color32(colour));
        }
        DrawCommand::Text {
            text,
            colour,
            font_size,
            bounds,
            justification,
            ..
        } => {
            let rect = to_egui_rect(bounds, origin);
            let (anchor, pos) = match justification {
                Justification::Centred => (Align2::CENTER_CENTER, rect.center()),
            };
            painter.text(
                pos,
                anchor,
                text,
                FontId::proportional(font_size),
                to_color32(colour),
            );
        }
    }
}

fn to_color32(colour: Colour) -> Color32 {
    Color32::from_rgba_unmultiplied(colour.red(), colour.green(), colour.blue(), colour.alpha())
}

fn to_egui_rect(rect: EditorRect, origin: Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + Vec2::new(rect.x as f32, rect.y as f32),
        Vec2::new(rect.width as f32, rect.height as f32),
    )
}
