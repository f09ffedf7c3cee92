use qrgen_core::session::{Action, Outcome, Session};

use crate::convert::gray_to_color_image;
use crate::panels;
use crate::state::{PreviewState, UiState};

#[derive(Default)]
pub struct QrApp {
    pub session: Session,
    pub ui_state: UiState,
    pub preview: PreviewState,
}

impl QrApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the actions activated this frame, in button table order.
    pub fn dispatch(&mut self, ctx: &egui::Context, actions: &[Action]) {
        for &action in actions {
            match self.session.dispatch(action) {
                Ok(outcome) => self.report(outcome),
                Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
            }
        }
        self.sync_preview(ctx);
    }

    fn report(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Generated { width, height } => {
                self.ui_state
                    .add_log(format!("Generated QR code ({width}x{height})"));
            }
            Outcome::Saved(path) => {
                self.ui_state.add_log(format!("Saved: {}", path.display()));
            }
            Outcome::Cleared | Outcome::Skipped(_) => {}
        }
    }

    /// Re-upload the preview texture if the session image changed.
    fn sync_preview(&mut self, ctx: &egui::Context) {
        if self.preview.revision == self.session.revision() {
            return;
        }
        self.preview.texture = self.session.holder().current().map(|img| {
            ctx.load_texture(
                "qr-preview",
                gray_to_color_image(img.preview()),
                egui::TextureOptions::NEAREST,
            )
        });
        self.preview.revision = self.session.revision();
    }
}

impl eframe::App for QrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(panels::BACKGROUND))
            .show(ctx, |ui| {
                panels::controls::show_input(ui, self);
                let actions = panels::controls::show_buttons(ui);
                self.dispatch(ctx, &actions);
                panels::preview::show(ui, self);
                panels::status::show(ui, self);
            });
    }
}
