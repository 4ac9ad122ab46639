//! Circadian sandbox: alertness curve from light, consistency and caffeine.

use clap::Args;

use jetlag_core::{AlertnessInputs, AlertnessModel, Config};

use crate::chart;

#[derive(Args)]
pub struct AlertnessArgs {
    /// Morning light exposure level
    #[arg(long, allow_negative_numbers = true)]
    pub morning_light: Option<f64>,
    /// Evening light exposure level
    #[arg(long, allow_negative_numbers = true)]
    pub evening_light: Option<f64>,
    /// Schedule consistency level
    #[arg(long, allow_negative_numbers = true)]
    pub consistency: Option<f64>,
    /// Caffeine cutoff in hours before midnight
    #[arg(long, allow_negative_numbers = true)]
    pub caffeine: Option<f64>,
    /// Print JSON instead of a chart
    #[arg(long)]
    pub json: bool,
}

impl AlertnessArgs {
    fn inputs(&self, defaults: &AlertnessInputs) -> AlertnessInputs {
        AlertnessInputs {
            morning_light: self.morning_light.unwrap_or(defaults.morning_light),
            evening_light: self.evening_light.unwrap_or(defaults.evening_light),
            consistency: self.consistency.unwrap_or(defaults.consistency),
            caffeine_cutoff: self.caffeine.unwrap_or(defaults.caffeine_cutoff),
        }
    }
}

pub fn run(args: AlertnessArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = args.inputs(&config.alertness);
    let report = AlertnessModel::new().simulate(&inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", chart::render_alertness(&report.curve, config.display.bar_width));

    println!(
        "Inputs: morning light {}, evening light {}, consistency {}, caffeine cutoff {}h",
        inputs.morning_light, inputs.evening_light, inputs.consistency, inputs.caffeine_cutoff
    );
    if let (Some(peak), Some(trough)) = (report.curve.peak(), report.curve.trough()) {
        println!("  Peak at {}, trough at {}", peak.label(), trough.label());
    }
    println!(
        "Misalignment score: {:.2} ({})",
        report.misalignment_score, report.tier
    );
    println!("\n{}", report.explanation);

    Ok(())
}
