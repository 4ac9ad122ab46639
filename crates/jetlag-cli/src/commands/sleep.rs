//! Social jetlag from weekday and weekend sleep times.

use chrono::{Datelike, Local};
use clap::Args;
use serde::Serialize;

use jetlag_core::{
    expand_week, Config, DayPoint, DisplayMode, SleepWindowAnalyzer, SocialJetlagReport,
};

use super::resolve_window;
use crate::chart;

#[derive(Args)]
pub struct SleepArgs {
    /// Weekday bed time (HH:MM)
    #[arg(long)]
    pub weekday_bed: Option<String>,
    /// Weekday wake time (HH:MM)
    #[arg(long)]
    pub weekday_wake: Option<String>,
    /// Weekend bed time (HH:MM)
    #[arg(long)]
    pub weekend_bed: Option<String>,
    /// Weekend wake time (HH:MM)
    #[arg(long)]
    pub weekend_wake: Option<String>,
    /// Chart value: duration or midpoint
    #[arg(long)]
    pub mode: Option<String>,
    /// Reject malformed times instead of computing NaN
    #[arg(long)]
    pub strict: bool,
    /// Print JSON instead of a chart
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SleepOutput {
    #[serde(flatten)]
    report: SocialJetlagReport,
    mode: DisplayMode,
    week: Vec<DayPoint>,
}

pub fn run(args: SleepArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let weekday = resolve_window(
        args.weekday_bed.as_deref(),
        args.weekday_wake.as_deref(),
        &config.weekday,
        args.strict,
    )?;
    let weekend = resolve_window(
        args.weekend_bed.as_deref(),
        args.weekend_wake.as_deref(),
        &config.weekend,
        args.strict,
    )?;
    let mode = match args.mode {
        Some(m) => m.parse::<DisplayMode>()?,
        None => config.display.mode,
    };

    let report = SleepWindowAnalyzer::new().analyze(&weekday, &weekend);
    let week = expand_week(&weekday, &weekend, mode);

    if args.json {
        let output = SleepOutput { report, mode, week };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let today = Local::now().weekday();
    println!("{}", chart::render_week(&week, mode, config.display.bar_width, Some(today)));

    println!(
        "Social jetlag: {} h",
        chart::one_decimal(report.social_jetlag_hours)
    );
    println!(
        "  Mid-sleep weekday: {:.2} h   weekend: {:.2} h",
        report.weekday_mid_sleep, report.weekend_mid_sleep
    );
    println!("Risk level: {}", report.risk);
    println!("\n{}", report.risk_message);

    Ok(())
}
