//! Transaction CLI commands
//!
//! Every command that changes the ledger re-checks all budget targets
//! against the saved snapshot and prints the overruns as one table.

use chrono::Local;
use clap::Subcommand;

use super::{parse_date, parse_money, FilterArgs};
use crate::config::settings::Settings;
use crate::display::{format_transaction_register, format_warning_table};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{CategoryName, Transaction, TransactionId, TransactionKind};
use crate::reports::evaluate;
use crate::storage::{Storage, TargetStore, TransactionSource};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Category name
        category: String,
        /// Amount (e.g., "42.50"); always positive
        amount: String,
        /// Record as income instead of expense
        #[arg(short, long)]
        income: bool,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Who was paid or who paid
        #[arg(long)]
        counterparty: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Change fields of a recorded transaction
    Edit {
        /// Transaction ID
        id: String,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        /// income or expense
        #[arg(short, long)]
        kind: Option<String>,
        /// Transaction date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        counterparty: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a transaction
    #[command(alias = "rm")]
    Remove {
        /// Transaction ID
        id: String,
    },

    /// List transactions
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Re-check every target against the saved snapshot
fn print_overruns(storage: &Storage, currency: &str) -> FintrackResult<()> {
    let expenses: Vec<Transaction> = storage
        .transactions
        .list()?
        .into_iter()
        .filter(Transaction::is_expense)
        .collect();
    let warnings = evaluate(&storage.targets.list()?, &expenses);
    if !warnings.is_empty() {
        println!();
        println!("Warning: {} budget target(s) exceeded", warnings.len());
        print!("{}", format_warning_table(&warnings, currency));
    }
    Ok(())
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            income,
            date,
            counterparty,
            notes,
        } => {
            let kind = if income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Local::now().date_naive(),
            };
            let amount = parse_money(&amount)?;

            let mut txn = Transaction::new(kind, date, category.as_str(), amount);
            if let Some(counterparty) = counterparty {
                txn = txn.with_counterparty(counterparty);
            }
            if let Some(notes) = notes {
                txn = txn.with_notes(notes);
            }

            storage.transactions.add(txn.clone())?;
            println!(
                "Recorded {} {} of {} in '{}' on {}",
                kind.to_string().to_lowercase(),
                txn.id,
                txn.amount.format_with_symbol(currency),
                txn.category,
                date.format(&settings.date_format)
            );
            print_overruns(storage, currency)?;
        }

        TransactionCommands::Edit {
            id,
            category,
            amount,
            kind,
            date,
            counterparty,
            notes,
        } => {
            let id = TransactionId::from(id);
            let mut txn = storage
                .transactions
                .get(&id)?
                .ok_or_else(|| FintrackError::transaction_not_found(id.as_str()))?;

            if let Some(category) = category {
                txn.category = CategoryName::from(category);
            }
            if let Some(raw) = amount {
                txn.amount = parse_money(&raw)?;
            }
            if let Some(raw) = kind {
                txn.kind = TransactionKind::parse(&raw).ok_or_else(|| {
                    FintrackError::Validation(format!(
                        "Invalid kind: '{}'. Use income or expense",
                        raw
                    ))
                })?;
            }
            if let Some(raw) = date {
                txn.date = Some(parse_date(&raw)?);
            }
            if let Some(counterparty) = counterparty {
                txn.counterparty = counterparty;
            }
            if let Some(notes) = notes {
                txn.notes = notes;
            }

            storage.transactions.update(&id, txn.clone())?;
            println!(
                "Updated transaction {}: {} of {} in '{}'",
                id,
                txn.kind.to_string().to_lowercase(),
                txn.amount.format_with_symbol(currency),
                txn.category
            );
            print_overruns(storage, currency)?;
        }

        TransactionCommands::Remove { id } => {
            let id = TransactionId::from(id);
            if !storage.transactions.delete(&id)? {
                return Err(FintrackError::transaction_not_found(id.as_str()));
            }
            println!("Deleted transaction {}", id);
            print_overruns(storage, currency)?;
        }

        TransactionCommands::List { filter } => {
            let transactions = storage.transactions.list()?;
            let filter = filter.build(None)?;
            let selected = filter.apply(&transactions);
            print!(
                "{}",
                format_transaction_register(&selected, &settings.date_format, currency)
            );
        }
    }

    Ok(())
}
