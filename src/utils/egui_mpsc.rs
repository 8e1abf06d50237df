use eframe::egui;
use tokio::sync::mpsc;

/// Tokio sender that requests an egui repaint after every successful send,
/// so results produced off the UI thread are rendered without waiting for input.
pub struct SenderAsync<T> {
    sender: mpsc::Sender<T>,
    ctx: egui::Context,
}

impl<T> SenderAsync<T> {
    pub fn new(sender: mpsc::Sender<T>, ctx: egui::Context) -> Self {
        Self { sender, ctx }
    }

    pub async fn send(&self, value: T) -> Result<(), mpsc::error::SendError<T>> {
        let result = self.sender.send(value).await;
        if result.is_ok() {
            self.ctx.request_repaint();
        }
        result
    }
}

impl<T> Clone for SenderAsync<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            ctx: self.ctx.clone(),
        }
    }
}

pub trait EguiMpscAsync<T> {
    fn with_egui_ctx(self, ctx: egui::Context) -> (SenderAsync<T>, mpsc::Receiver<T>);
}

impl<T> EguiMpscAsync<T> for (mpsc::Sender<T>, mpsc::Receiver<T>) {
    fn with_egui_ctx(self, ctx: egui::Context) -> (SenderAsync<T>, mpsc::Receiver<T>) {
        (SenderAsync::new(self.0, ctx), self.1)
    }
}
