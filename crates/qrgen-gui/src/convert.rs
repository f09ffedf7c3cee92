use image::GrayImage;
use qrgen_core::layout::Rect;

/// Convert an 8-bit grayscale bitmap to an egui ColorImage.
pub fn gray_to_color_image(image: &GrayImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_gray(size, image.as_raw())
}

/// Screen rect for a layout rect.
pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}
