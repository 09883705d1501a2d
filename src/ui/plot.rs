use std::f64::consts::TAU;

use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, HLine, Legend, LineStyle, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
    VLine,
};

use crate::color;
use crate::data::model::{FilteredDataset, PassFail, Subject, FAIL_THRESHOLD};
use crate::data::summary::{GroupAverages, KpiSummary};

const PLOT_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Pass vs Fail pie
// ---------------------------------------------------------------------------

/// Pie chart of pass/fail counts. Slices are drawn as polygons on a unit
/// circle.
pub fn pass_fail_pie(ui: &mut Ui, kpi: &KpiSummary) {
    if kpi.total == 0 {
        ui.label("No students match the current filters.");
        return;
    }

    let slices = [
        (PassFail::Pass, kpi.pass_count, kpi.pass_percent),
        (PassFail::Fail, kpi.fail_count, kpi.fail_percent),
    ];

    Plot::new("pass_fail_pie")
        .legend(Legend::default())
        .height(PLOT_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for (label, count, percent) in slices {
                if count == 0 {
                    continue;
                }
                let sweep = TAU * count as f64 / kpi.total as f64;
                let end = start + sweep;

                // Enough segments for a smooth arc, at least two.
                let steps = ((sweep / TAU) * 90.0).ceil().max(2.0) as usize;
                let mut points = vec![[0.0, 0.0]];
                points.extend((0..=steps).map(|i| {
                    let a = start + sweep * i as f64 / steps as f64;
                    [a.cos(), a.sin()]
                }));

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(points))
                        .name(label.to_string())
                        .fill_color(color::pass_fail(label))
                        .stroke(Stroke::new(1.0, Color32::BLACK)),
                );

                let mid = (start + end) / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                    RichText::new(format!("{percent:.1}%"))
                        .color(Color32::BLACK)
                        .strong(),
                ));

                start = end;
            }
        });
}

// ---------------------------------------------------------------------------
// Math vs Reading scatter
// ---------------------------------------------------------------------------

/// Scatter of math against reading score, coloured by pass/fail, with dotted
/// reference lines at the fail threshold.
pub fn score_scatter(ui: &mut Ui, filtered: &FilteredDataset) {
    let threshold = FAIL_THRESHOLD as f64;
    let hover_points = scatter_points(filtered);

    Plot::new("math_vs_reading")
        .legend(Legend::default())
        .height(PLOT_HEIGHT)
        .x_axis_label("math score")
        .y_axis_label("reading score")
        .label_formatter(move |name, value| scatter_hover(&hover_points, name, value.x, value.y))
        .show(ui, |plot_ui| {
            for label in [PassFail::Pass, PassFail::Fail] {
                let points: PlotPoints = filtered
                    .iter()
                    .filter(|r| r.pass_fail() == label)
                    .map(|r| [r.math_score() as f64, r.reading_score() as f64])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name(label.to_string())
                        .color(color::pass_fail(label))
                        .radius(3.0),
                );
            }

            plot_ui.hline(
                HLine::new(threshold)
                    .color(color::FAIL)
                    .style(LineStyle::dotted_dense()),
            );
            plot_ui.vline(
                VLine::new(threshold)
                    .color(color::FAIL)
                    .style(LineStyle::dotted_dense()),
            );
        });
}

/// A scatter point with the categorical details shown on hover.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub series: String,
    pub math: f64,
    pub reading: f64,
    pub details: String,
}

pub fn scatter_points(filtered: &FilteredDataset) -> Vec<ScatterPoint> {
    filtered
        .iter()
        .map(|r| ScatterPoint {
            series: r.pass_fail().to_string(),
            math: r.math_score() as f64,
            reading: r.reading_score() as f64,
            details: format!(
                "{} | {} | {}",
                r.gender, r.parental_education, r.test_prep_course
            ),
        })
        .collect()
}

/// Hover label for the point at (`math`, `reading`) in series `name`.
///
/// Students sharing the same coordinates are listed one per line. An empty
/// series name means the cursor is not over a point.
pub fn scatter_hover(points: &[ScatterPoint], name: &str, math: f64, reading: f64) -> String {
    if name.is_empty() {
        return String::new();
    }
    let mut text = format!("{name}\nmath: {math:.0}\nreading: {reading:.0}");
    for p in points.iter().filter(|p| {
        p.series == name && (p.math - math).abs() < 1e-9 && (p.reading - reading).abs() < 1e-9
    }) {
        text.push('\n');
        text.push_str(&p.details);
    }
    text
}

// ---------------------------------------------------------------------------
// Heatmap by group
// ---------------------------------------------------------------------------

/// Grid of subject means per group, cell colour scaled over all cells.
pub fn group_heatmap(ui: &mut Ui, id: &str, groups: &[GroupAverages]) {
    if groups.is_empty() {
        ui.label("No data.");
        return;
    }

    let rounded: Vec<(String, [f64; 3])> = groups
        .iter()
        .map(|g| {
            let avg = g.averages.rounded();
            (g.group.clone(), Subject::ALL.map(|s| avg.get(s)))
        })
        .collect();

    let (min, max) = rounded
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    egui::Grid::new(id)
        .spacing([4.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for subject in Subject::ALL {
                ui.strong(subject.to_string());
            }
            ui.end_row();

            for (group, values) in &rounded {
                ui.strong(group);
                for value in values {
                    let t = color::normalise(*value, min, max);
                    let fill = color::heat(t);
                    let text = if t > 0.6 {
                        Color32::BLACK
                    } else {
                        Color32::WHITE
                    };
                    egui::Frame::default()
                        .fill(fill)
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui: &mut Ui| {
                            ui.label(RichText::new(format!("{value:.2}")).color(text));
                        });
                }
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Grouped bar chart
// ---------------------------------------------------------------------------

/// One bar per subject for each group, side by side.
pub fn grouped_bars(ui: &mut Ui, id: &str, groups: &[GroupAverages]) {
    if groups.is_empty() {
        ui.label("No data.");
        return;
    }

    let labels: Vec<String> = groups.iter().map(|g| g.group.clone()).collect();
    let width = 0.25;

    Plot::new(id)
        .legend(Legend::default())
        .height(PLOT_HEIGHT)
        .y_axis_label("Average Score")
        .x_axis_label("Parental Education")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < labels.len() {
                labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (k, subject) in Subject::ALL.into_iter().enumerate() {
                let offset = (k as f64 - 1.0) * width;
                let bars: Vec<Bar> = groups
                    .iter()
                    .enumerate()
                    .map(|(i, g)| {
                        Bar::new(i as f64 + offset, g.averages.get(subject))
                            .width(width)
                            .name(&g.group)
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(subject.to_string())
                        .color(color::subject(subject)),
                );
            }
        });
}
