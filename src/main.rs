use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use student_dashboard::app::DashboardApp;
use student_dashboard::cli::Cli;
use student_dashboard::data::derive::derive;
use student_dashboard::data::filter::{apply, FilterSelection};
use student_dashboard::data::loader::load_or_generate;
use student_dashboard::data::model::DerivedDataset;
use student_dashboard::data::report::Report;
use student_dashboard::data::summary::save_at_risk_csv;
use student_dashboard::state::Session;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let loaded = load_or_generate(&cli.data)
        .with_context(|| format!("Failed to load dataset: {}", cli.data.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;
    if loaded.is_synthetic() {
        eprintln!(
            "warning: {} not found, using a generated sample dataset",
            cli.data.display()
        );
    }
    let derived = derive(&loaded.dataset)
        .context("Failed to derive student metrics")
        .inspect_err(|e| log::error!("{e:#}"))?;

    if let Some(path) = &cli.export {
        return export_report(&cli, derived, path);
    }

    run_dashboard(Session::new(derived, loaded.is_synthetic()))
}

/// Headless mode: filter, write the at-risk CSV and print the KPIs.
fn export_report(cli: &Cli, derived: DerivedDataset, path: &Path) -> Result<()> {
    let selection = cli.selection(&FilterSelection::all(&derived));
    let filtered = apply(&derived, &selection);
    let report = Report::build(&filtered);

    save_at_risk_csv(path, &report.at_risk).inspect_err(|e| log::error!("{e:#}"))?;

    let kpi = report.kpi;
    println!("Total Students: {}", kpi.total);
    println!("Pass: {} ({:.2}%)", kpi.pass_count, kpi.pass_percent);
    println!("Fail: {} ({:.2}%)", kpi.fail_count, kpi.fail_percent);
    println!(
        "Wrote {} at-risk student(s) to {}",
        report.at_risk.len(),
        path.display()
    );
    Ok(())
}

fn run_dashboard(session: Session) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SMIT Executive Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, session)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
