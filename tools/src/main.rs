//! dashboard-runner: headless pipeline runner for the ESG dashboard.
//!
//! Usage:
//!   dashboard-runner --seed 12345
//!   dashboard-runner --subsidiary "Subsidiary A" --year 2021 --slider 75
//!   dashboard-runner --config custom.json --json

use anyhow::Result;
use esg_core::{
    config::DashboardConfig,
    filter::Selection,
    pipeline::{self, DashboardFrame, DashboardRequest, TabSliders},
    simulation::SliderInput,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = args
        .windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    let json_mode = args.iter().any(|a| a == "--json");

    let config = match string_arg(&args, "--config") {
        Some(path) => DashboardConfig::load(&path)?,
        None => DashboardConfig::default(),
    };
    config.validate()?;

    let selection = Selection {
        subsidiary: string_arg(&args, "--subsidiary"),
        asset: string_arg(&args, "--asset"),
        year: args
            .windows(2)
            .find(|w| w[0] == "--year")
            .and_then(|w| w[1].parse().ok()),
    };
    let slider = SliderInput::new(parse_arg(&args, "--slider", 50u32))?;

    let request = DashboardRequest {
        selection,
        sliders: TabSliders::uniform(slider),
    };

    let frame = pipeline::run(&config, seed, &request)?;
    log::debug!("frame computed: {} views, {} filtered rows",
        frame.views.len(), frame.filtered_rows);

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        print_summary(&config, &request, &frame);
    }
    Ok(())
}

fn print_summary(config: &DashboardConfig, request: &DashboardRequest, frame: &DashboardFrame) {
    println!("ESG Analytics — dashboard-runner");
    println!("  seed:          {}", frame.seed);
    println!("  schema:        {:?}", frame.schema_version);
    println!(
        "  dimensions:    {} years × {} subsidiaries × {} assets × {} phases",
        config.years.len(),
        config.subsidiaries.len(),
        config.assets.len(),
        config.phases.len()
    );
    println!("  total rows:    {}", frame.total_rows);
    println!("  filtered rows: {}", frame.filtered_rows);
    if !request.selection.is_unconstrained() {
        println!("  selection:     {:?}", request.selection);
    }
    println!();
    println!("=== TAB SUMMARY ===");
    for view in &frame.views {
        let (lo, hi) = series_range(&view.simulated);
        println!("  {}", view.header);
        println!(
            "    rows: {:3} | charts: {} | {} @ {} -> simulated [{lo:.0}, {hi:.0}]",
            view.rows.len(),
            view.charts.len(),
            view.slider_label,
            request.sliders.for_tab(view.tab).value(),
        );
    }
}

fn series_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (lo, hi)
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
