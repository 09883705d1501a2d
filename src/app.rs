use eframe::egui;

use crate::state::{Session, Tab};
use crate::ui::{at_risk, overview, panels, trends};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub session: Session,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { session }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title, tabs, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.session);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.session);
            });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.session.tab {
                    Tab::Overview => overview::show(ui, &self.session),
                    Tab::Trends => trends::show(ui, &self.session),
                    Tab::AtRisk => at_risk::show(ui, &mut self.session),
                });
        });
    }
}
