//! Editor model for the Spectralz splash screen.
//!
//! The editor is independent of any GUI toolkit: it tracks the window size
//! negotiated with the host and describes what to draw as a list of
//! [`DrawCommand`]s. The plug-in crate turns that list into egui calls.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::PluginDescriptor;

pub const DEFAULT_SIZE: EditorSize = EditorSize::new(1200, 800);
pub const MIN_SIZE: EditorSize = EditorSize::new(800, 600);
pub const MAX_SIZE: EditorSize = EditorSize::new(2560, 1440);

pub const BACKGROUND: Colour = Colour::from_argb(0xff4a556c);
pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const SUBTITLE_FONT_SIZE: f32 = 14.0;
pub const SUBTITLE_STRIP_HEIGHT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour(u32);

impl Colour {
    pub const WHITE: Colour = Colour::from_argb(0xffffffff);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorSize {
    pub width: u32,
    pub height: u32,
}

impl EditorSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Inclusive bounds on the editor window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min: EditorSize,
    pub max: EditorSize,
}

impl SizeLimits {
    pub fn new(min: EditorSize, max: EditorSize) -> Self {
        debug_assert!(min.width <= max.width && min.height <= max.height);
        Self { min, max }
    }

    pub fn clamp(&self, size: EditorSize) -> EditorSize {
        EditorSize::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self::new(MIN_SIZE, MAX_SIZE)
    }
}

/// Integer rectangle in editor-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Splits off a strip of at most `amount` pixels from the bottom edge and
    /// returns it, shrinking `self` accordingly.
    pub fn remove_from_bottom(&mut self, amount: u32) -> Rect {
        let amount = amount.min(self.height);
        self.height -= amount;
        Rect::new(self.x, self.y + self.height as i32, self.width, amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Justification {
    Centred,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillAll(Colour),
    Text {
        text: String,
        colour: Colour,
        font_size: f32,
        bounds: Rect,
        justification: Justification,
        max_lines: u32,
    },
}

/// Static splash-screen editor showing the plug-in name and tag line.
#[derive(Debug, Clone)]
pub struct SplashEditor {
    descriptor: Arc<PluginDescriptor>,
    size: EditorSize,
    resizable: bool,
    limits: SizeLimits,
}

impl SplashEditor {
    pub fn new(descriptor: Arc<PluginDescriptor>) -> Self {
        Self {
            descriptor,
            size: DEFAULT_SIZE,
            resizable: true,
            limits: SizeLimits::default(),
        }
    }

    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    pub fn size(&self) -> EditorSize {
        self.size
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn resize_limits(&self) -> SizeLimits {
        self.limits
    }

    /// Applies a size request and returns the size actually adopted.
    ///
    /// Requests are clamped to the resize limits. A non-resizable editor keeps
    /// its current size.
    pub fn set_size(&mut self, width: u32, height: u32) -> EditorSize {
        if !self.resizable {
            return self.size;
        }
        let requested = EditorSize::new(width, height);
        let adopted = self.limits.clamp(requested);
        if adopted != self.size {
            tracing::debug!(
                width = adopted.width,
                height = adopted.height,
                clamped = adopted != requested,
                "editor resized"
            );
            self.size = adopted;
            self.resized();
        }
        adopted
    }

    pub fn local_bounds(&self) -> Rect {
        Rect::new(0, 0, self.size.width, self.size.height)
    }

    pub fn paint(&self) -> Vec<DrawCommand> {
        let mut bounds = self.local_bounds();
        let title = DrawCommand::Text {
            text: self.descriptor.name.clone(),
            colour: Colour::WHITE,
            font_size: TITLE_FONT_SIZE,
            bounds,
            justification: Justification::Centred,
            max_lines: 1,
        };

        let subtitle = DrawCommand::Text {
            text: self.descriptor.description.clone().unwrap_or_default(),
            colour: Colour::WHITE,
            font_size: SUBTITLE_FONT_SIZE,
            bounds: bounds.remove_from_bottom(SUBTITLE_STRIP_HEIGHT),
            justification: Justification::Centred,
            max_lines: 1,
        };

        vec![DrawCommand::FillAll(BACKGROUND), title, subtitle]
    }

    /// Child layout hook; the splash screen has no child components yet.
    pub fn resized(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> SplashEditor {
        SplashEditor::new(Arc::new(
            PluginDescriptor::new("test.id", "Spectralz", "Vendor")
                .with_description("AI-Powered Spectral Audio Editor"),
        ))
    }

    #[test]
    fn background_colour_channels() {
        assert_eq!(BACKGROUND.alpha(), 0xff);
        assert_eq!(BACKGROUND.red(), 0x4a);
        assert_eq!(BACKGROUND.green(), 0x55);
        assert_eq!(BACKGROUND.blue(), 0x6c);
    }

    #[test]
    fn opens_at_default_size() {
        let editor = editor();
        assert_eq!(editor.size(), EditorSize::new(1200, 800));
        assert!(editor.is_resizable());
        assert_eq!(editor.resize_limits().min, EditorSize::new(800, 600));
        assert_eq!(editor.resize_limits().max, EditorSize::new(2560, 1440));
    }

    #[test]
    fn set_size_clamps_each_axis() {
        let mut editor = editor();
        assert_eq!(editor.set_size(100, 5000), EditorSize::new(800, 1440));
        assert_eq!(editor.set_size(4000, 10), EditorSize::new(2560, 600));
        assert_eq!(editor.set_size(1024, 768), EditorSize::new(1024, 768));
        assert_eq!(editor.size(), EditorSize::new(1024, 768));
    }

    #[test]
    fn remove_from_bottom_splits_strip() {
        let mut rect = Rect::new(0, 0, 1200, 800);
        let strip = rect.remove_from_bottom(100);
        assert_eq!(strip, Rect::new(0, 700, 1200, 100));
        assert_eq!(rect, Rect::new(0, 0, 1200, 700));

        let mut small = Rect::new(0, 0, 10, 40);
        let strip = small.remove_from_bottom(100);
        assert_eq!(strip, Rect::new(0, 0, 10, 40));
        assert_eq!(small.height, 0);
    }

    #[test]
    fn paint_draws_background_title_and_tag_line() {
        let commands = editor().paint();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], DrawCommand::FillAll(BACKGROUND));

        match &commands[1] {
            DrawCommand::Text {
                text,
                font_size,
                bounds,
                colour,
                ..
            } => {
                assert_eq!(text, "Spectralz");
                assert_eq!(*font_size, 24.0);
                assert_eq!(*bounds, Rect::new(0, 0, 1200, 800));
                assert_eq!(*colour, Colour::WHITE);
            }
            other => panic!("unexpected command {other:?}"),
        }

        match &commands[2] {
            DrawCommand::Text {
                text,
                font_size,
                bounds,
                max_lines,
                ..
            } => {
                assert_eq!(text, "AI-Powered Spectral Audio Editor");
                assert_eq!(*font_size, 14.0);
                assert_eq!(*bounds, Rect::new(0, 700, 1200, 100));
                assert_eq!(*max_lines, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
