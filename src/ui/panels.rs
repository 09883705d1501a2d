use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::filter::FilterColumn;
use crate::state::{Session, Tab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, session: &mut Session) {
    ui.heading("Filter Students");
    ui.separator();

    if session.synthetic {
        ui.label(
            RichText::new("CSV not found! Showing a generated sample dataset.")
                .color(Color32::YELLOW),
        );
        ui.separator();
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for column in FilterColumn::ALL {
                // Clone what we need so we can mutate the session inside the loop.
                let all_values: Vec<String> = session.choices(column).iter().cloned().collect();

                let n_selected = session.filters().get(column).len();
                let n_total = all_values.len();
                let header_text = format!("{column}  ({n_selected}/{n_total})");

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(column.label())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                session.select_all(column);
                            }
                            if ui.small_button("None").clicked() {
                                session.select_none(column);
                            }
                        });

                        for value in &all_values {
                            let mut checked = session.filters().get(column).contains(value);
                            if ui.checkbox(&mut checked, value.as_str()).changed() {
                                session.toggle_filter_value(column, value);
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title row and the view selector.
pub fn top_bar(ui: &mut Ui, session: &mut Session) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("🎓 SMIT Academy Executive Dashboard")
                .heading()
                .color(color::ACCENT),
        );
        ui.label("Advanced Analytics & Student Performance Overview");
    });

    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            ui.selectable_value(&mut session.tab, tab, tab.title());
        }

        ui.separator();

        ui.label(format!(
            "{} students loaded, {} visible",
            session.dataset().len(),
            session.filtered().len()
        ));

        if let Some(msg) = &session.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
