use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::cli::EXPORT_FILE_NAME;
use crate::color;
use crate::data::summary::{save_at_risk_csv, AT_RISK_COLUMNS};
use crate::state::Session;

/// At-risk tab: the failing students, lowest score first, plus the export.
pub fn show(ui: &mut Ui, session: &mut Session) {
    ui.heading("⚠ At-Risk Students");

    let n = session.report().at_risk.len();
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{n} student(s) at risk")).color(color::FAIL));
        if ui.button("📥 Download At-Risk Report").clicked() {
            save_file_dialog(session);
        }
    });
    ui.separator();

    let rows = &session.report().at_risk;
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(60.0).resizable(true), AT_RISK_COLUMNS.len())
        .header(20.0, |mut header| {
            for name in AT_RISK_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let r = &rows[row.index()];
                let cells = [
                    r.gender.clone(),
                    r.parental_education.clone(),
                    r.lunch.clone(),
                    r.test_prep_course.clone(),
                    r.math_score.to_string(),
                    r.reading_score.to_string(),
                    r.writing_score.to_string(),
                    r.min_score.to_string(),
                ];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(session: &mut Session) {
    let file = rfd::FileDialog::new()
        .set_title("Save at-risk report")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match save_at_risk_csv(&path, &session.report().at_risk) {
            Ok(()) => session.status_message = None,
            Err(e) => {
                log::error!("Failed to export report: {e:#}");
                session.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
