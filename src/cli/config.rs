//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{paths::FintrackPaths, settings::Settings};
use crate::error::FintrackResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,

    /// Change a setting
    Set {
        /// currency_symbol, date_format, category_order, month_label or log_filter
        key: String,
        value: String,
    },
}

/// Handle a config command; no subcommand means `show`
pub fn handle_config_command(
    paths: &FintrackPaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> FintrackResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  currency_symbol: {:?}", settings.currency_symbol);
            println!("  date_format:     {}", settings.date_format);
            println!("  category_order:  {}", settings.category_order);
            println!("  month_label:     {}", settings.month_label);
            println!(
                "  log_filter:      {}",
                settings.log_filter.as_deref().unwrap_or("(default)")
            );
        }

        ConfigCommands::Set { key, value } => {
            settings.set_value(&key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}
