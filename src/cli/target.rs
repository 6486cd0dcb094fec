//! Budget target CLI commands
//!
//! Every create and edit goes through `TargetService`, so a second target
//! for the same category and month is refused before anything is written.

use clap::Subcommand;

use super::{parse_money, parse_period};
use crate::config::settings::Settings;
use crate::display::{format_target_table, format_warning_table};
use crate::error::FintrackResult;
use crate::models::{BudgetTarget, BudgetTargetId, CategoryName, Transaction};
use crate::reports::{assess_targets, evaluate};
use crate::services::TargetService;
use crate::storage::{Storage, TargetRepository, TransactionSource};

/// Target subcommands
#[derive(Subcommand, Debug)]
pub enum TargetCommands {
    /// List budget targets with their progress
    List {
        /// Only targets for this month (YYYY-MM or "current")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Add a spending limit for a category in a month
    Add {
        /// Category name
        category: String,
        /// Limit amount (e.g., "500" or "500.00")
        limit: String,
        /// Month the limit applies to (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Change a target's category, month or limit
    Edit {
        /// Target ID
        id: String,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        limit: Option<String>,
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Delete a target
    #[command(alias = "rm")]
    Remove {
        /// Target ID
        id: String,
    },

    /// Show every target whose month spending exceeds its limit
    Check {
        /// Only targets for this month (YYYY-MM or "current")
        #[arg(short, long)]
        period: Option<String>,
    },
}

fn expenses(storage: &Storage) -> FintrackResult<Vec<Transaction>> {
    Ok(storage
        .transactions
        .list()?
        .into_iter()
        .filter(Transaction::is_expense)
        .collect())
}

fn targets_for(
    service: &TargetService<'_, TargetRepository>,
    period: Option<&str>,
) -> FintrackResult<Vec<BudgetTarget>> {
    match period {
        Some(raw) => service.list_for_period(parse_period(Some(raw))?),
        None => service.list(),
    }
}

/// Handle a target command
pub fn handle_target_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TargetCommands,
) -> FintrackResult<()> {
    let service = TargetService::new(&storage.targets);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TargetCommands::List { period } => {
            let targets = targets_for(&service, period.as_deref())?;
            if targets.is_empty() {
                println!("No budget targets set.");
                println!();
                println!("Use 'fintrack target add <category> <limit>' to create one.");
            } else {
                let progress = assess_targets(&targets, &expenses(storage)?);
                print!("{}", format_target_table(&targets, &progress, currency));
            }
        }

        TargetCommands::Add {
            category,
            limit,
            period,
        } => {
            let limit = parse_money(&limit)?;
            let period = parse_period(period.as_deref())?;
            let target = service.create(category.as_str(), period, limit)?;

            println!(
                "Created target {} for '{}' in {}: {}",
                target.id,
                target.category,
                target.period,
                target.limit.format_with_symbol(currency)
            );
        }

        TargetCommands::Edit {
            id,
            category,
            limit,
            period,
        } => {
            let id = BudgetTargetId::from(id);
            let current = service.get(&id)?;

            let category = category
                .map(CategoryName::from)
                .unwrap_or(current.category);
            let limit = match limit {
                Some(raw) => parse_money(&raw)?,
                None => current.limit,
            };
            let period = match period {
                Some(raw) => parse_period(Some(&raw))?,
                None => current.period,
            };

            let target = service.update(&id, category, period, limit)?;
            println!(
                "Updated target {}: '{}' in {}, limit {}",
                target.id,
                target.category,
                target.period,
                target.limit.format_with_symbol(currency)
            );
        }

        TargetCommands::Remove { id } => {
            let id = BudgetTargetId::from(id);
            service.delete(&id)?;
            println!("Deleted target {}", id);
        }

        TargetCommands::Check { period } => {
            let targets = targets_for(&service, period.as_deref())?;
            let warnings = evaluate(&targets, &expenses(storage)?);
            print!("{}", format_warning_table(&warnings, currency));
        }
    }

    Ok(())
}
