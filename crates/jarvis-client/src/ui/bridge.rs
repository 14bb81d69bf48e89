use std::sync::mpsc;

use eframe::egui;
use reqwest::Url;

use crate::controller::{Acknowledgment, Navigator, Notifier};

/// Outcome of a background submission, delivered to the UI thread
#[derive(Debug, Clone)]
pub enum UiEvent {
    Notify(Acknowledgment),
    Navigate(Url),
}

/// Hands controller callbacks from runtime tasks to the egui frame loop
#[derive(Clone)]
pub struct UiBridge {
    tx: mpsc::Sender<UiEvent>,
    ctx: egui::Context,
}

impl UiBridge {
    pub fn new(ctx: egui::Context) -> (Self, mpsc::Receiver<UiEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx, ctx }, rx)
    }

    fn send(&self, event: UiEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("UI closed before the event could be delivered");
            return;
        }
        self.ctx.request_repaint();
    }
}

impl Notifier for UiBridge {
    fn notify(&self, ack: Acknowledgment) {
        self.send(UiEvent::Notify(ack));
    }
}

impl Navigator for UiBridge {
    fn navigate(&self, destination: &Url) {
        self.send(UiEvent::Navigate(destination.clone()));
    }
}
