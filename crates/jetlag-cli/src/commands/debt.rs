use clap::Args;

use jetlag_core::{classify_debt, Config};

use crate::chart::one_decimal;

#[derive(Args)]
pub struct DebtArgs {
    /// Sleep lost per weekday, in hours
    #[arg(long, allow_negative_numbers = true)]
    pub loss: Option<f64>,
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DebtArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let debt = classify_debt(args.loss.unwrap_or(config.debt.daily_loss_hours));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&debt)?);
        return Ok(());
    }

    println!(
        "Weekly sleep debt: {} h ({})",
        one_decimal(debt.weekly_debt_hours),
        debt.tier
    );
    println!("\n{}", debt.message);
    Ok(())
}
