pub mod controls;
pub mod preview;
pub mod status;

pub const BACKGROUND: egui::Color32 = egui::Color32::WHITE;
