// BMI Tracker - Core Library
// Classifier, record store and form commands, shared by the TUI, the CLI modes and tests

pub mod classifier;
pub mod config;
pub mod db;
pub mod export;
pub mod shell;

// Re-export commonly used types
pub use classifier::{classify, Category};
pub use config::Config;
pub use db::{
    BmiRecord, NewBmiRecord, RecordStore, SqliteStore,
    setup_database, insert_record, get_records_for_user, verify_count,
};
pub use export::{export_csv, write_csv};
pub use shell::{dispatch, Command, FormState, History, Notice, NoticeLevel, Outcome, TrendSeries};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
