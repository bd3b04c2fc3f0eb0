mod calc;
mod cmd;
mod data;
mod logging;
mod ui;

use calc::Lang;
use clap::{Parser, Subcommand};
use data::{AppSettings, OccasionData};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "hijri", version, about = "tabular Hijri calendar")]
struct Cli {
    /// Path to the data directory containing config.yaml and occasions.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Display language, overriding the configured one
    #[arg(long, value_enum, global = true)]
    lang: Option<Lang>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write default config.yaml and occasions.yaml
    Init,
    /// Show today's Hijri date
    Today {
        /// Template using YYYY, MM, M, DD, D, MONTH and DAY
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Convert a Gregorian date (YYYY-MM-DD) to Hijri
    Convert {
        date: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a Hijri date (YYYY-MM-DD) to Gregorian
    Gregorian {
        date: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a Hijri month (YYYY-MM, default: the current month)
    Month { month: Option<String> },
    /// List occasions of a Hijri year with their Gregorian dates
    Occasions { year: Option<i32> },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = resolve_data_dir(&cli.data_dir)?;
    debug!(data_dir = %data_dir.display(), "using data directory");
    data::persistence::set_data_dir(data_dir);

    run(cli.command, cli.lang)
}

fn run(command: Option<Commands>, lang: Option<Lang>) -> anyhow::Result<()> {
    // init rewrites config.yaml, so config is only read by the commands that use it
    let settings = || AppSettings::load().map(|s| s.with_language(lang));

    match command {
        None => {
            let occasions = OccasionData::load_or_builtin()?;
            cmd::root::run(&settings()?, &occasions)
        }
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Today { format }) => cmd::today::run(&settings()?, format.as_deref()),
        Some(Commands::Convert { date, json }) => {
            cmd::convert::run_to_hijri(&date, json, settings()?.language)
        }
        Some(Commands::Gregorian { date, json }) => {
            cmd::convert::run_to_gregorian(&date, json, settings()?.language)
        }
        Some(Commands::Month { month }) => {
            let occasions = OccasionData::load_or_builtin()?;
            cmd::month::run(month.as_deref(), settings()?.language, &occasions)
        }
        Some(Commands::Occasions { year }) => {
            let occasions = OccasionData::load_or_builtin()?;
            cmd::occasions::run(year, settings()?.language, &occasions)
        }
    }
}

/// Resolves the data directory to an absolute path.
fn resolve_data_dir(dir: &Path) -> anyhow::Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_data_dir_keeps_absolute() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(resolve_data_dir(tmp.path()).unwrap(), tmp.path());
    }

    #[test]
    fn test_resolve_data_dir_joins_relative() {
        let resolved = resolve_data_dir(Path::new("config")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("config"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["hijri"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, PathBuf::from("./config"));
        assert_eq!(cli.lang, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_convert_with_flags() {
        let cli =
            Cli::try_parse_from(["hijri", "-vv", "convert", "2024-07-08", "--json", "--lang", "ar"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.lang, Some(Lang::Ar));
        match cli.command {
            Some(Commands::Convert { date, json }) => {
                assert_eq!(date, "2024-07-08");
                assert!(json);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_cli_month_optional_argument() {
        let cli = Cli::try_parse_from(["hijri", "month"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Month { month: None })));
        let cli = Cli::try_parse_from(["hijri", "month", "1446-09"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Month { month: Some(_) })));
    }

    #[test]
    fn test_cli_rejects_unknown_lang() {
        assert!(Cli::try_parse_from(["hijri", "--lang", "fr", "today"]).is_err());
    }
}
