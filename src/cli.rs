use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CalculatorConfig;
use crate::models::Grams;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sum calories and macros for a dish built from a shared ingredient sheet", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// URL of the published ingredient CSV
    #[arg(long, global = true)]
    pub csv_url: Option<String>,

    /// URL of the ingredient submission endpoint
    #[arg(long, global = true)]
    pub submit_url: Option<String>,

    /// Read ingredients from a local CSV file instead of the sheet
    #[arg(long, global = true)]
    pub csv_file: Option<PathBuf>,

    /// Network timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl SourceArgs {
    /// Flags win over whatever the environment configured.
    pub fn apply_to(&self, mut config: CalculatorConfig) -> CalculatorConfig {
        if let Some(url) = &self.csv_url {
            config.csv_url = url.clone();
        }
        if let Some(url) = &self.submit_url {
            config.submit_url = url.clone();
        }
        if let Some(path) = &self.csv_file {
            config.csv_file = Some(path.clone());
        }
        if let Some(secs) = self.timeout_secs.filter(|s| *s > 0) {
            config.timeout = std::time::Duration::from_secs(secs);
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the ingredient catalog
    List {
        /// Only show ingredients whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Calculate totals for a dish
    Calc {
        /// Dish name
        #[arg(short, long)]
        name: Option<String>,

        /// Ingredient and quantity as NAME=GRAMS (repeatable; empty GRAMS means unset)
        #[arg(short, long = "item", value_parser = parse_item)]
        items: Vec<ItemSpec>,

        /// Print totals as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new ingredient to the shared sheet
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        calories: String,
        #[arg(long, default_value = "")]
        proteins: String,
        #[arg(long, default_value = "")]
        fats: String,
        #[arg(long, default_value = "")]
        carbs: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    pub name: String,
    pub grams: Grams,
}

/// Parses `NAME=GRAMS`. Splits on the last `=` so names may contain one.
pub fn parse_item(raw: &str) -> Result<ItemSpec, String> {
    let (name, grams) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=GRAMS, got '{}'", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing ingredient name in '{}'", raw));
    }

    let grams = grams.trim();
    let grams = if grams.is_empty() {
        None
    } else {
        Some(
            grams
                .parse::<f64>()
                .ok()
                .filter(|g| g.is_finite())
                .ok_or_else(|| format!("invalid gram amount '{}'", grams))?,
        )
    };

    Ok(ItemSpec {
        name: name.to_string(),
        grams,
    })
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_item() {
        assert_eq!(
            parse_item("Rye flour=250").unwrap(),
            ItemSpec { name: "Rye flour".to_string(), grams: Some(250.0) }
        );
        assert_eq!(parse_item("Water=").unwrap().grams, None);
        assert_eq!(parse_item("a=b=12.5").unwrap().name, "a=b");
        assert!(parse_item("Water").is_err());
        assert!(parse_item("=10").is_err());
        assert!(parse_item("Water=lots").is_err());
        assert!(parse_item("Water=NaN").is_err());
        assert!(parse_item("x=inf").is_err());
        assert!(parse_item("x=-infinity").is_err());
    }

    #[test]
    fn test_calc_command_parses() {
        let cli = Cli::try_parse_from([
            "dish-calc", "calc", "--name", "Bread", "-i", "Rye flour=500", "-i", "Water=350", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Calc { name, items, json } => {
                assert_eq!(name.as_deref(), Some("Bread"));
                assert_eq!(items.len(), 2);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "dish-calc", "list", "--csv-url", "http://localhost/sheet.csv", "--timeout-secs", "2",
        ])
        .unwrap();
        let config = cli.source.apply_to(CalculatorConfig::default());
        assert_eq!(config.csv_url, "http://localhost/sheet.csv");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.csv_file, None);
    }
}
