use std::collections::BTreeMap;

use eframe::egui;

use crate::controller::AuthController;
use crate::state::{
    Credentials, FIELD_EMAIL, FIELD_PASSWORD, FIELD_USERNAME, FormKind, PanelToggle, Placement,
    RegistrationPayload,
};

/// Inputs of one panel, keyed by field name
struct PanelForm {
    kind: FormKind,
    order: &'static [&'static str],
    fields: BTreeMap<&'static str, String>,
}

impl PanelForm {
    fn new(kind: FormKind) -> Self {
        let order: &'static [&'static str] = match kind {
            FormKind::Login => &[FIELD_EMAIL, FIELD_PASSWORD],
            FormKind::Signup => &[FIELD_USERNAME, FIELD_EMAIL, FIELD_PASSWORD],
        };

        Self {
            kind,
            order,
            fields: order.iter().map(|name| (*name, String::new())).collect(),
        }
    }

    fn show_fields(&mut self, ui: &mut egui::Ui) {
        for name in self.order {
            let value = self.fields.entry(*name).or_default();
            ui.horizontal(|ui| {
                ui.label(field_label(name));
                let edit = egui::TextEdit::singleline(value).password(*name == FIELD_PASSWORD);
                ui.add(edit);
            });
        }
    }
}

fn field_label(name: &str) -> &'static str {
    match name {
        FIELD_EMAIL => "Email:",
        FIELD_PASSWORD => "Password:",
        FIELD_USERNAME => "Username:",
        _ => "",
    }
}

pub struct LoginView {
    toggle: PanelToggle,
    login: PanelForm,
    signup: PanelForm,
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            toggle: PanelToggle::new(),
            login: PanelForm::new(FormKind::Login),
            signup: PanelForm::new(FormKind::Signup),
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        controller: &AuthController,
        runtime: &tokio::runtime::Runtime,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);

                ui.heading("JaRvis");
                ui.add_space(20.0);

                // Active panel on top, the other collapsed underneath
                let (top, bottom) = match self.toggle.placement(FormKind::Login) {
                    Placement::Top => (&mut self.login, &mut self.signup),
                    Placement::Bottom => (&mut self.signup, &mut self.login),
                };

                ui.group(|ui| {
                    ui.set_width(300.0);
                    show_active_panel(ui, top, controller, runtime);
                });

                ui.add_space(10.0);

                let prompt = match bottom.kind {
                    FormKind::Login => "Already have an account? Login",
                    FormKind::Signup => "Don't have an account? Sign up",
                };
                if ui.link(prompt).clicked() {
                    self.toggle.show(bottom.kind);
                }
            });
        });
    }
}

fn show_active_panel(
    ui: &mut egui::Ui,
    form: &mut PanelForm,
    controller: &AuthController,
    runtime: &tokio::runtime::Runtime,
) {
    let busy = controller.is_in_flight(form.kind);

    form.show_fields(ui);
    ui.add_space(10.0);

    let label = match form.kind {
        FormKind::Login => "Login",
        FormKind::Signup => "Sign up",
    };

    if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
        submit(form, controller, runtime);
    }

    if busy {
        ui.add_space(10.0);
        ui.spinner();
    }
}

fn submit(form: &PanelForm, controller: &AuthController, runtime: &tokio::runtime::Runtime) {
    let controller = controller.clone();

    // A missing input is logged by the reader; nothing is sent
    match form.kind {
        FormKind::Login => {
            if let Ok(credentials) = Credentials::read(&form.fields) {
                runtime.spawn(async move {
                    let _ = controller.submit_login(credentials).await;
                });
            }
        }
        FormKind::Signup => {
            if let Ok(payload) = RegistrationPayload::read(&form.fields) {
                runtime.spawn(async move {
                    let _ = controller.submit_signup(payload).await;
                });
            }
        }
    }
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}
