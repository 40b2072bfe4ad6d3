// 🧮 Form Commands
// The three form actions as explicit handlers.
//
// Each handler takes the current form contents and the store handle and
// returns an Outcome describing what the front end should show. Nothing here
// touches the terminal, so the same handlers drive the TUI, the CLI modes
// and the tests.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::classifier::bmi;
use crate::db::{BmiRecord, NewBmiRecord, RecordStore};

pub const INPUT_ERROR_TITLE: &str = "Input Error";
pub const INPUT_ERROR_MESSAGE: &str = "Please provide valid inputs.";
pub const NO_DATA_TITLE: &str = "No Data";
pub const NO_DATA_MESSAGE: &str = "No historical data found for the user.";
pub const STORAGE_ERROR_TITLE: &str = "Storage Error";

pub const RESULT_PLACEHOLDER: &str = "BMI: N/A, Category: N/A";

pub const HISTORY_TITLE: &str = "BMI History";
pub const TREND_WINDOW_TITLE: &str = "BMI Trend";
pub const TREND_TITLE: &str = "BMI Trend Over Time";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "BMI";

// ============================================================================
// FORM STATE & COMMANDS
// ============================================================================

/// Raw contents of the three input fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub height: String,
    pub weight: String,
}

impl FormState {
    pub fn new(name: &str, height: &str, weight: &str) -> Self {
        FormState {
            name: name.to_string(),
            height: height.to_string(),
            weight: weight.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Calculate,
    ViewHistory,
    PlotTrend,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Calculate => "Calculate BMI",
            Command::ViewHistory => "View History",
            Command::PlotTrend => "Plot BMI Trend",
        }
    }
}

/// Why the form input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    MissingName,
    InvalidHeight,
    InvalidWeight,
    /// Both fields parse, but their BMI is not a positive finite number
    OutOfRange,
}

/// A validated measurement request
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<'a> {
    pub user_name: &'a str,
    pub height: f64,
    pub weight: f64,
}

/// Validate the form: non-blank name, positive finite height and weight,
/// and a BMI that is itself positive and finite
pub fn parse_form(form: &FormState) -> Result<Measurement<'_>, InputError> {
    if form.name.trim().is_empty() {
        return Err(InputError::MissingName);
    }
    let height = parse_positive(&form.height).ok_or(InputError::InvalidHeight)?;
    let weight = parse_positive(&form.weight).ok_or(InputError::InvalidWeight)?;

    // height^2 can underflow to 0 or overflow to inf for extreme inputs
    let value = bmi(height, weight);
    if !(value.is_finite() && value > 0.0) {
        return Err(InputError::OutOfRange);
    }

    Ok(Measurement {
        user_name: &form.name,
        height,
        weight,
    })
}

fn parse_positive(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

// ============================================================================
// OUTCOMES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Info,
}

/// A modal message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn input_error() -> Self {
        Notice {
            level: NoticeLevel::Error,
            title: INPUT_ERROR_TITLE,
            message: INPUT_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn no_data() -> Self {
        Notice {
            level: NoticeLevel::Info,
            title: NO_DATA_TITLE,
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    /// The store failed; `detail` is the error chain
    pub fn storage_error(detail: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            title: STORAGE_ERROR_TITLE,
            message: detail.into(),
        }
    }
}

/// Stored records for one user, ready to list
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    pub user_name: String,
    pub records: Vec<BmiRecord>,
}

impl History {
    /// One line per record, numbered from 1, without the user name
    pub fn lines(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| format!("Record {}: {}", idx + 1, describe_record(record)))
            .collect()
    }
}

pub fn describe_record(record: &BmiRecord) -> String {
    format!(
        "height {} m, weight {} kg, BMI {:.2}, {}, {}",
        record.height,
        record.weight,
        record.bmi,
        record.category,
        record.timestamp.format("%Y-%m-%d %H:%M:%S")
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Calculation shown and saved
    Calculated {
        display: String,
        record: NewBmiRecord,
    },
    /// Calculation shown, but the store rejected the row
    SaveFailed {
        display: String,
        notice: Notice,
    },
    Notice(Notice),
    History(History),
    Trend(TrendSeries),
}

pub fn result_text(record: &NewBmiRecord) -> String {
    format!("BMI: {:.2}, Category: {}", record.bmi(), record.category())
}

// ============================================================================
// HANDLERS
// ============================================================================

pub fn dispatch(store: &dyn RecordStore, command: Command, form: &FormState) -> Result<Outcome> {
    match command {
        Command::Calculate => calculate(store, form),
        Command::ViewHistory => view_history(store, &form.name),
        Command::PlotTrend => plot_trend(store, &form.name),
    }
}

/// Classify the form input, then persist it. Rejected input persists nothing.
/// A failed save still returns the computed result alongside the fault.
pub fn calculate(store: &dyn RecordStore, form: &FormState) -> Result<Outcome> {
    let measurement = match parse_form(form) {
        Ok(m) => m,
        Err(e) => {
            warn!("Rejected form input: {:?}", e);
            return Ok(Outcome::Notice(Notice::input_error()));
        }
    };

    let record = NewBmiRecord::new(measurement.user_name, measurement.height, measurement.weight);
    let display = result_text(&record);
    if let Err(e) = store.save(&record) {
        error!("Failed to save BMI record: {:#}", e);
        return Ok(Outcome::SaveFailed {
            display,
            notice: Notice::storage_error(format!("{:#}", e)),
        });
    }

    Ok(Outcome::Calculated { display, record })
}

pub fn view_history(store: &dyn RecordStore, user_name: &str) -> Result<Outcome> {
    let records = store.fetch(user_name)?;
    if records.is_empty() {
        info!("No history for {:?}", user_name);
        return Ok(Outcome::Notice(Notice::no_data()));
    }

    Ok(Outcome::History(History {
        user_name: user_name.to_string(),
        records,
    }))
}

pub fn plot_trend(store: &dyn RecordStore, user_name: &str) -> Result<Outcome> {
    let records = store.fetch(user_name)?;
    match TrendSeries::from_records(&records) {
        Some(series) => Ok(Outcome::Trend(series)),
        None => {
            info!("No trend data for {:?}", user_name);
            Ok(Outcome::Notice(Notice::no_data()))
        }
    }
}

// ============================================================================
// TREND SERIES
// ============================================================================

/// Chart data for the BMI trend: x is unix seconds, y is BMI
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Positions of the axis labels, also where grid lines go
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
}

impl TrendSeries {
    /// Build the series in record order. `None` for an empty slice.
    pub fn from_records(records: &[BmiRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let points: Vec<(f64, f64)> = records
            .iter()
            .map(|r| (r.timestamp.timestamp() as f64, r.bmi))
            .collect();

        let (x_min, x_max) = min_max(points.iter().map(|p| p.0));
        let (y_min, y_max) = min_max(points.iter().map(|p| p.1));

        // Pad so a single point, or a flat line, still has a visible range
        let x_pad = ((x_max - x_min) * 0.05).max(60.0);
        let y_pad = ((y_max - y_min) * 0.1).max(1.0);
        let x_bounds = [x_min - x_pad, x_max + x_pad];
        let y_bounds = [y_min - y_pad, y_max + y_pad];

        Some(TrendSeries {
            points,
            x_ticks: ticks(x_bounds),
            y_ticks: ticks(y_bounds),
            x_bounds,
            y_bounds,
        })
    }

    pub fn x_labels(&self) -> Vec<String> {
        self.x_ticks.iter().map(|x| format_date(*x)).collect()
    }

    pub fn y_labels(&self) -> Vec<String> {
        self.y_ticks.iter().map(|y| format!("{:.1}", y)).collect()
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Low, middle and high ends of a range
fn ticks(bounds: [f64; 2]) -> Vec<f64> {
    vec![bounds[0], (bounds[0] + bounds[1]) / 2.0, bounds[1]]
}

fn format_date(unix_seconds: f64) -> String {
    DateTime::<Utc>::from_timestamp(unix_seconds.round() as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
