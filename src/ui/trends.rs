use eframe::egui::Ui;

use crate::state::Session;
use crate::ui::plot;

/// Trends tab: scatter, per-gender heatmap, per-education bars.
pub fn show(ui: &mut Ui, session: &Session) {
    let report = session.report();

    ui.heading("📊 Performance Trends");

    ui.add_space(8.0);
    ui.strong("Scatter Plot: Math vs Reading");
    plot::score_scatter(ui, session.filtered());

    ui.add_space(12.0);
    ui.strong("Heatmap: Average Scores by Gender");
    plot::group_heatmap(ui, "gender_heatmap", &report.by_gender);

    ui.add_space(12.0);
    ui.strong("Bar Chart: Average Scores by Parental Education");
    plot::grouped_bars(ui, "education_bars", &report.by_parental_education);
}
