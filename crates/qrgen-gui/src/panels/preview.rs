use qrgen_core::layout::{preview_origin, WINDOW_WIDTH};

use crate::app::QrApp;

pub fn show(ui: &egui::Ui, app: &QrApp) {
    let Some(texture) = app.preview.texture.as_ref() else {
        return;
    };
    let (x, y) = preview_origin(WINDOW_WIDTH);
    let size = texture.size_vec2();
    let rect = egui::Rect::from_min_size(egui::pos2(x as f32, y as f32), size);
    ui.painter().image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
