//! Current schedule against a proposed fix.

use clap::Args;

use jetlag_core::storage::WindowConfig;
use jetlag_core::{Config, SleepWindowAnalyzer, SocialJetlagReport};

use super::resolve_window;
use crate::chart::one_decimal;

#[derive(Args)]
pub struct CompareArgs {
    /// Current weekday bed time (HH:MM)
    #[arg(long)]
    pub weekday_bed: Option<String>,
    /// Current weekday wake time (HH:MM)
    #[arg(long)]
    pub weekday_wake: Option<String>,
    /// Current weekend bed time (HH:MM)
    #[arg(long)]
    pub weekend_bed: Option<String>,
    /// Current weekend wake time (HH:MM)
    #[arg(long)]
    pub weekend_wake: Option<String>,
    /// Proposed weekday bed time (defaults to the current one)
    #[arg(long)]
    pub fix_weekday_bed: Option<String>,
    /// Proposed weekday wake time (defaults to the current one)
    #[arg(long)]
    pub fix_weekday_wake: Option<String>,
    /// Proposed weekend bed time (defaults to the current one)
    #[arg(long)]
    pub fix_weekend_bed: Option<String>,
    /// Proposed weekend wake time (defaults to the current one)
    #[arg(long)]
    pub fix_weekend_wake: Option<String>,
    /// Reject malformed times instead of computing NaN
    #[arg(long)]
    pub strict: bool,
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

fn print_report(title: &str, report: &SocialJetlagReport) {
    println!("{title}");
    println!(
        "  Weekday {:.1}h → {:.1}h   Weekend {:.1}h → {:.1}h",
        report.weekday.bed_clock(),
        report.weekday.wake_clock(),
        report.weekend.bed_clock(),
        report.weekend.wake_clock()
    );
    println!(
        "  Social jetlag: {} h ({})",
        one_decimal(report.social_jetlag_hours),
        report.risk
    );
}

pub fn run(args: CompareArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let current_weekday = WindowConfig::new(
        args.weekday_bed.as_deref().unwrap_or(&config.weekday.bed),
        args.weekday_wake.as_deref().unwrap_or(&config.weekday.wake),
    );
    let current_weekend = WindowConfig::new(
        args.weekend_bed.as_deref().unwrap_or(&config.weekend.bed),
        args.weekend_wake.as_deref().unwrap_or(&config.weekend.wake),
    );

    let cur_wd = resolve_window(None, None, &current_weekday, args.strict)?;
    let cur_we = resolve_window(None, None, &current_weekend, args.strict)?;
    let fix_wd = resolve_window(
        args.fix_weekday_bed.as_deref(),
        args.fix_weekday_wake.as_deref(),
        &current_weekday,
        args.strict,
    )?;
    let fix_we = resolve_window(
        args.fix_weekend_bed.as_deref(),
        args.fix_weekend_wake.as_deref(),
        &current_weekend,
        args.strict,
    )?;

    let comparison = SleepWindowAnalyzer::new().compare((&cur_wd, &cur_we), (&fix_wd, &fix_we));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    print_report("Current schedule", &comparison.current);
    print_report("Proposed schedule", &comparison.proposed);

    println!();
    if !comparison.reduction_hours.is_finite() {
        println!("Cannot compare schedules; check the time inputs.");
    } else if comparison.improves() {
        println!(
            "The proposed schedule reduces social jetlag by {} h.",
            one_decimal(comparison.reduction_hours)
        );
    } else if comparison.reduction_hours < 0.0 {
        println!(
            "The proposed schedule increases social jetlag by {} h.",
            one_decimal(-comparison.reduction_hours)
        );
    } else {
        println!("No change in social jetlag.");
    }
    println!("\n{}", comparison.proposed.risk_message);

    Ok(())
}
