mod app;
mod convert;
mod panels;
mod state;

use qrgen_core::layout::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let size = [WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let result = eframe::run_native(
        "QrGen",
        options,
        Box::new(|_cc| Ok(Box::new(app::QrApp::new()))),
    );
    tracing::info!("Window closed, exiting");
    result
}
