use qrgen_core::layout::{BUTTONS, TEXT_FONT_SIZE, TEXT_INPUT, TEXT_MAX_CHARS};
use qrgen_core::session::Action;

use crate::app::QrApp;
use crate::convert::to_egui_rect;

const BUTTON_FONT_SIZE: f32 = 22.0;

pub fn show_input(ui: &mut egui::Ui, app: &mut QrApp) {
    ui.put(
        to_egui_rect(TEXT_INPUT),
        egui::TextEdit::singleline(&mut app.session.text)
            .char_limit(TEXT_MAX_CHARS)
            .font(egui::FontId::proportional(TEXT_FONT_SIZE))
            .hint_text("Enter text to encode"),
    );
}

/// Draw the button table and return the actions activated this frame.
pub fn show_buttons(ui: &mut egui::Ui) -> Vec<Action> {
    let mut activated = Vec::new();
    for spec in &BUTTONS {
        let label = egui::RichText::new(spec.label).size(BUTTON_FONT_SIZE);
        if ui.put(to_egui_rect(spec.rect), egui::Button::new(label)).clicked() {
            tracing::debug!(action = %spec.action, "Button activated");
            activated.push(spec.action);
        }
    }
    activated
}
