/// Most recent status lines kept for display.
const MAX_LOG_LINES: usize = 200;

/// On-screen status log.
#[derive(Default)]
pub struct UiState {
    pub log_messages: Vec<String>,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }
}

/// GPU copy of the current preview.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    /// Session revision the texture was built from.
    pub revision: u64,
}
