use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "discovery",
    about = "Browse the periodic table and the solar system catalogs",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args)]
pub struct GlobalOptions {
    /// Directory holding elements.json and the body sources
    #[arg(
        long,
        value_name = "DIR",
        env = "DISCOVERY_DATA_DIR",
        default_value = "./data",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Absolute directory for rolling log files (logging off if omitted)
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// trace | debug | info | warn | error
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List elements, optionally filtered
    #[command(visible_alias = "ls")]
    Elements(ElementFilter),

    /// Show one element by symbol or atomic number
    Element {
        #[arg(value_name = "SYMBOL|NUMBER")]
        key: String,
    },

    /// Print the periodic table grid
    Grid,

    /// List bodies ordered by distance from the Sun
    Bodies,

    /// Show one body by id or name
    Body {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Compare two bodies side by side
    Compare {
        #[arg(value_name = "FIRST")]
        first: String,
        #[arg(value_name = "SECOND")]
        second: String,
    },

    /// Weight on a body for a given Earth weight
    Weight {
        #[arg(value_name = "BODY")]
        body: String,
        #[arg(value_name = "EARTH_WEIGHT")]
        earth_weight: f64,
    },
}

#[derive(Args)]
pub struct ElementFilter {
    /// Category, e.g. "noble gas" or NOBLE_GAS
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    #[arg(long, value_name = "N")]
    pub period: Option<u32>,

    #[arg(long, value_name = "N")]
    pub group: Option<u32>,

    /// s | p | d | f
    #[arg(long, value_name = "BLOCK")]
    pub block: Option<String>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_weight_with_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "discovery",
            "weight",
            "mars",
            "70",
            "--data-dir",
            "/srv/data",
        ])
        .unwrap();
        assert_eq!(cli.global.data_dir.to_str(), Some("/srv/data"));
        match cli.command {
            Command::Weight { body, earth_weight } => {
                assert_eq!(body, "mars");
                assert_eq!(earth_weight, 70.0);
            }
            _ => panic!("expected weight command"),
        }
    }

    #[test]
    fn element_filters_are_optional() {
        let cli = Cli::try_parse_from(["discovery", "elements", "--period", "2"]).unwrap();
        match cli.command {
            Command::Elements(filter) => {
                assert_eq!(filter.period, Some(2));
                assert!(filter.category.is_none());
            }
            _ => panic!("expected elements command"),
        }
    }
}
