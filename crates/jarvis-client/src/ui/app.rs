use std::collections::VecDeque;
use std::sync::{Arc, mpsc};

use anyhow::Result;
use eframe::egui;
use reqwest::Url;

use crate::config::ClientConfig;
use crate::controller::{Acknowledgment, AuthController, BrowserNavigator, Navigator, Severity};
use crate::state::{FileTokenStore, MemoryTokenStore, TokenStore};

use super::bridge::{UiBridge, UiEvent};
use super::login::LoginView;

pub struct JarvisApp {
    config: ClientConfig,
    controller: AuthController,
    runtime: tokio::runtime::Runtime,
    events: mpsc::Receiver<UiEvent>,
    view: View,
    login_view: LoginView,
    notices: VecDeque<Acknowledgment>,
}

#[derive(Clone, PartialEq, Eq)]
enum View {
    Login,
    Home(Url),
}

impl JarvisApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Result<Self> {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        cc.egui_ctx.set_style(style);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let store: Arc<dyn TokenStore> = match config.storage_file() {
            Some(path) => {
                tracing::info!("Token storage at {:?}", path);
                Arc::new(FileTokenStore::new(path))
            }
            None => {
                tracing::warn!("Could not determine data directory, token will not persist");
                Arc::new(MemoryTokenStore::new())
            }
        };

        let (bridge, events) = UiBridge::new(cc.egui_ctx.clone());
        let bridge = Arc::new(bridge);
        let controller = AuthController::new(&config, store, bridge.clone(), bridge)?;

        Ok(Self {
            config,
            controller,
            runtime,
            events,
            view: View::Login,
            login_view: LoginView::new(),
            notices: VecDeque::new(),
        })
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                UiEvent::Notify(ack) => self.notices.push_back(ack),
                UiEvent::Navigate(destination) => {
                    if self.config.open_browser {
                        BrowserNavigator.navigate(&destination);
                    }
                    self.view = View::Home(destination);
                }
            }
        }
    }

    /// Modal for the oldest pending acknowledgment
    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(ack) = self.notices.front() else {
            return;
        };

        let (title, color) = match ack.severity {
            Severity::Success => ("Success", egui::Color32::GREEN),
            Severity::Failure => ("Error", egui::Color32::RED),
            Severity::Notice => ("Please wait", egui::Color32::YELLOW),
        };

        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(color, ack.message.as_str());
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.notices.pop_front();
        }
    }

    fn show_home(&self, ctx: &egui::Context, destination: &Url) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);
                ui.heading("JaRvis");
                ui.add_space(20.0);
                ui.label("You are signed in.");
                ui.add_space(10.0);

                if ui.link(destination.as_str()).clicked() {
                    BrowserNavigator.navigate(destination);
                }
            });
        });
    }
}

impl eframe::App for JarvisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        match self.view.clone() {
            View::Login => self.login_view.show(ctx, &self.controller, &self.runtime),
            View::Home(destination) => self.show_home(ctx, &destination),
        }

        self.show_notice(ctx);
    }
}
