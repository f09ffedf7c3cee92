//! Fixed screen geometry of the generator window, in logical pixels.

use crate::session::Action;

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;
pub const WINDOW_TITLE: &str = "QR Code Generator";

/// Axis-aligned rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

pub const TEXT_INPUT: Rect = Rect::new(50, 50, 1180, 40);
pub const TEXT_FONT_SIZE: f32 = 20.0;
pub const TEXT_MAX_CHARS: usize = 120;

/// One entry of the button table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSpec {
    pub action: Action,
    pub label: &'static str,
    pub rect: Rect,
}

/// Buttons in draw and dispatch order.
pub const BUTTONS: [ButtonSpec; 3] = [
    ButtonSpec {
        action: Action::Generate,
        label: "Generate QR",
        rect: Rect::new(50, 170, 320, 80),
    },
    ButtonSpec {
        action: Action::Save,
        label: "Save QR",
        rect: Rect::new(50, 265, 320, 60),
    },
    ButtonSpec {
        action: Action::Clear,
        label: "Clear QR",
        rect: Rect::new(50, 340, 320, 60),
    },
];

/// Region for status messages, below the buttons.
pub const STATUS_AREA: Rect = Rect::new(50, 420, 320, 260);

/// Maximum on-screen size of the preview for a window of the given size.
pub fn preview_bounds(window_width: u32, window_height: u32) -> (u32, u32) {
    (
        (window_width / 2).saturating_sub(100),
        window_height.saturating_sub(100),
    )
}

/// Top-left corner the preview is drawn at.
pub fn preview_origin(window_width: u32) -> (u32, u32) {
    (window_width / 2 + 50, 95)
}
