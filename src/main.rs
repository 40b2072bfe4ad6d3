// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Result};
use log::info;
use std::env;
use std::path::{Path, PathBuf};

use bmi_tracker::shell::{self, Outcome};
use bmi_tracker::{export_csv, Config, RecordStore, SqliteStore};

const USAGE: &str = "Usage:
  bmi-tracker                          interactive form
  bmi-tracker history <name>           print a user's history
  bmi-tracker export <name> <file.csv> export a user's history";

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Form,
    History(String),
    Export(String, PathBuf),
}

fn parse_mode(args: &[String]) -> Result<Mode> {
    match args.get(1).map(String::as_str) {
        None => Ok(Mode::Form),
        Some("history") if args.len() == 3 => Ok(Mode::History(args[2].clone())),
        Some("export") if args.len() == 4 => {
            Ok(Mode::Export(args[2].clone(), PathBuf::from(&args[3])))
        }
        Some(_) => bail!("{}", USAGE),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("❌ Error: {:?}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Arguments are checked before anything is opened
    let args: Vec<String> = env::args().collect();
    let mode = parse_mode(&args)?;

    let config = Config::from_env();
    config.init_logging()?;
    info!("bmi-tracker {} starting", bmi_tracker::VERSION);

    // Opened once; closed when `store` drops at the end of this function
    let store = SqliteStore::open(&config.database_path)?;

    match mode {
        Mode::Form => run_ui_mode(&store),
        Mode::History(user_name) => run_history(&store, &user_name),
        Mode::Export(user_name, path) => run_export(&store, &user_name, &path),
    }
}

fn run_history(store: &dyn RecordStore, user_name: &str) -> Result<()> {
    match shell::view_history(store, user_name)? {
        Outcome::History(history) => {
            println!("📊 BMI History for {}", history.user_name);
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            for line in history.lines() {
                println!("{}", line);
            }
        }
        Outcome::Notice(notice) => println!("{}: {}", notice.title, notice.message),
        other => bail!("Unexpected history outcome: {:?}", other),
    }
    Ok(())
}

fn run_export(store: &dyn RecordStore, user_name: &str, path: &Path) -> Result<()> {
    let records = store.fetch(user_name)?;
    if records.is_empty() {
        bail!("No historical data found for {:?}", user_name);
    }

    let written = export_csv(&records, path)?;
    println!("✓ Exported {} records to {}", written, path.display());
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(store: &dyn RecordStore) -> Result<()> {
    let mut app = ui::App::new();
    ui::run_ui(&mut app, store)
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_store: &dyn RecordStore) -> Result<()> {
    bail!("TUI mode not available! Rebuild with `cargo build --features tui`, or use: bmi-tracker history <name>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_tracker::NewBmiRecord;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode(&args(&["bmi-tracker"])).unwrap(), Mode::Form);
        assert_eq!(
            parse_mode(&args(&["bmi-tracker", "history", "alice"])).unwrap(),
            Mode::History("alice".to_string())
        );
        assert_eq!(
            parse_mode(&args(&["bmi-tracker", "export", "alice", "out.csv"])).unwrap(),
            Mode::Export("alice".to_string(), PathBuf::from("out.csv"))
        );
    }

    #[test]
    fn test_bad_arguments_are_a_usage_error() {
        for bad in [
            args(&["bmi-tracker", "history"]),
            args(&["bmi-tracker", "export", "alice"]),
            args(&["bmi-tracker", "plot", "alice"]),
        ] {
            let err = parse_mode(&bad).unwrap_err();
            assert!(err.to_string().starts_with("Usage:"), "{:?}", bad);
        }
    }

    #[test]
    fn test_run_history_handles_both_outcomes() {
        let store = SqliteStore::open_in_memory().unwrap();
        run_history(&store, "nobody").unwrap();

        store.save(&NewBmiRecord::new("alice", 1.8, 70.0)).unwrap();
        run_history(&store, "alice").unwrap();
    }

    #[test]
    fn test_export_without_records_fails() {
        let store = SqliteStore::open_in_memory().unwrap();
        let path = env::temp_dir().join("bmi-tracker-empty-export.csv");
        assert!(run_export(&store, "nobody", &path).is_err());
    }
}
