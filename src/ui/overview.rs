use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::data::model::Subject;
use crate::state::Session;
use crate::ui::plot;

/// Overview tab: KPI cards, subject averages and the pass/fail split.
pub fn show(ui: &mut Ui, session: &Session) {
    let report = session.report();
    let kpi = report.kpi;

    ui.heading("🏠 Overview");
    ui.add_space(8.0);

    ui.columns(3, |cols: &mut [Ui]| {
        kpi_card(
            &mut cols[0],
            "Total Students",
            &kpi.total.to_string(),
            color::CARD_TOTAL,
            Color32::from_rgb(0x00, 0xff, 0xff),
        );
        kpi_card(
            &mut cols[1],
            "Pass %",
            &format!("{:.2}%", kpi.pass_percent),
            color::CARD_PASS,
            color::PASS,
        );
        kpi_card(
            &mut cols[2],
            "Fail %",
            &format!("{:.2}%", kpi.fail_percent),
            color::CARD_FAIL,
            color::FAIL,
        );
    });

    ui.add_space(12.0);
    ui.strong("Average Scores by Subject");
    egui::Grid::new("subject_averages")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Subject");
            ui.strong("Average Score");
            ui.end_row();
            for subject in Subject::ALL {
                ui.label(subject.to_string());
                match &report.subject_averages {
                    Some(avg) => ui.label(format!("{:.2}", avg.get(subject))),
                    None => ui.label("–"),
                };
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.strong("Pass vs Fail Distribution");
    plot::pass_fail_pie(ui, &kpi);
}

fn kpi_card(ui: &mut Ui, title: &str, value: &str, fill: Color32, text: Color32) {
    egui::Frame::group(ui.style())
        .fill(fill)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(title).color(text).size(16.0));
                ui.label(RichText::new(value).color(text).size(32.0).strong());
            });
        });
}
