use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chrono::Local;
use log::{info, warn};
use nutri_screen::demo::generate_demo_forms;
use nutri_screen::report::console::{
    render_chart, render_child_status, render_hotspot_table, render_meal_plan,
    render_recommendations, render_session_summary,
};
use nutri_screen::session::{DEFAULT_DEMO_PASSPHRASE, DemoPassphrase};
use nutri_screen::utils::logging::log_operation_complete;
use nutri_screen::{ScreeningApp, ScreeningConfig, ScreeningOutcome, load_forms};

const DEMO_FORM_COUNT: usize = 24;
const DEMO_SEED: u64 = 2024;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ScreeningConfig::default();
    info!("Configuration: {config}");

    // Survey forms come from a JSON file when one is given, otherwise a synthetic batch
    let forms = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => load_forms(&path)
            .with_context(|| format!("Failed to load survey forms from {}", path.display()))?,
        None => {
            info!("No survey file given, generating {DEMO_FORM_COUNT} demo forms");
            generate_demo_forms(DEMO_FORM_COUNT, DEMO_SEED)
        }
    };

    let passphrase = std::env::var("NUTRI_SCREEN_PASSPHRASE")
        .unwrap_or_else(|_| DEFAULT_DEMO_PASSPHRASE.to_string());
    let mut app = ScreeningApp::new(config.clone(), DemoPassphrase::new(passphrase.clone()));
    app.login(&passphrase).context("Demo login failed")?;

    let start = Instant::now();
    let mut most_severe: Option<ScreeningOutcome> = None;
    let mut rejected = 0;
    for form in &forms {
        match app.submit_form(form) {
            Ok(outcome) => {
                println!("{}", render_child_status(&outcome.status));
                if most_severe
                    .as_ref()
                    .is_none_or(|current| outcome.category() > current.category())
                {
                    most_severe = Some(outcome);
                }
            }
            Err(e) => {
                warn!("Skipping form: {e}");
                rejected += 1;
            }
        }
    }
    log_operation_complete(
        "screened",
        "survey batch",
        forms.len() - rejected,
        Some(start.elapsed()),
    );

    let dashboard = app.dashboard()?;
    println!();
    println!("{}", render_chart(&dashboard.chart, config.report.chart_bar_width));
    println!("Hotspot Wards:");
    println!("{}", render_hotspot_table(&dashboard.hotspots));

    if let Some(session) = app.session() {
        println!("{}", render_session_summary(&session.aggregator().category_counts()));
    }

    if let Some(outcome) = most_severe {
        println!(
            "Guidance for child {} ({}):",
            outcome.status.child_id,
            outcome.category()
        );
        let today = Local::now().date_naive();
        println!(
            "{}",
            render_recommendations(&outcome.recommendations, Some(today))
        );
        println!("Meal plan:");
        println!("{}", render_meal_plan(outcome.meal_plan));
    }

    app.logout();
    Ok(())
}
