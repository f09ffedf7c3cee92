use qrgen_core::layout::STATUS_AREA;

use crate::app::QrApp;
use crate::convert::to_egui_rect;

const LINE_HEIGHT: f32 = 18.0;

/// Newest messages at the bottom of the status area; older ones scroll off.
pub fn show(ui: &egui::Ui, app: &QrApp) {
    let rect = to_egui_rect(STATUS_AREA);
    let visible = (rect.height() / LINE_HEIGHT) as usize;
    let messages = &app.ui_state.log_messages;
    let start = messages.len().saturating_sub(visible);

    let painter = ui.painter().with_clip_rect(rect);
    for (i, msg) in messages[start..].iter().enumerate() {
        let color = if msg.starts_with("ERROR") {
            egui::Color32::from_rgb(180, 30, 30)
        } else {
            egui::Color32::from_gray(60)
        };
        painter.text(
            rect.left_top() + egui::vec2(0.0, i as f32 * LINE_HEIGHT),
            egui::Align2::LEFT_TOP,
            msg,
            egui::FontId::proportional(14.0),
            color,
        );
    }
}
