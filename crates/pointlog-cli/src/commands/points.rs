use std::collections::BTreeMap;

use chrono::Local;
use clap::Subcommand;

use pointlog_core::storage::parse_amount;
use pointlog_core::{Direction, Ledger, LedgerUpdate};

#[derive(Subcommand)]
pub enum PointsAction {
    /// Add points to a day
    Add {
        /// Points to add
        amount: String,
        /// Day to credit, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove points from a day
    Remove {
        /// Points to remove
        amount: String,
        /// Day to debit, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List all recorded days
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PointsAction) -> Result<(), Box<dyn std::error::Error>> {
    let ledger = Ledger::open()?;

    match action {
        PointsAction::Add { amount, date } => {
            let date = date.unwrap_or_else(today);
            let delta = parse_amount(&amount)?;
            let update = ledger.upsert(&date, delta, Direction::Add)?;
            print_update(&date, update);
        }
        PointsAction::Remove { amount, date } => {
            let date = date.unwrap_or_else(today);
            let delta = parse_amount(&amount)?;
            let update = ledger.upsert(&date, delta, Direction::Remove)?;
            print_update(&date, update);
        }
        PointsAction::List { json } => {
            let all = ledger.all_points()?;
            if json {
                let map: BTreeMap<String, u32> =
                    all.iter().map(|(d, p)| (d.to_string(), *p)).collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for (date, points) in &all {
                    println!("{date}  {points}");
                }
            }
        }
    }
    Ok(())
}

fn today() -> String {
    Local::now().date_naive().to_string()
}

fn print_update(date: &str, update: LedgerUpdate) {
    match update {
        LedgerUpdate::Total(total) => println!("{date}: {total}"),
        LedgerUpdate::Cleared => println!("{date}: cleared"),
        LedgerUpdate::NothingToRemove => println!("{date}: nothing to remove"),
    }
}
