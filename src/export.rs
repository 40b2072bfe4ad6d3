// 📤 CSV export of a user's BMI history

use anyhow::{Context, Result};
use log::info;
use std::io;
use std::path::Path;

use crate::db::BmiRecord;

/// Write records as CSV with a header row. Returns the number of rows written.
pub fn write_csv<W: io::Write>(records: &[BmiRecord], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);

    for record in records {
        wtr.serialize(record).context("Failed to serialize BMI record")?;
    }
    wtr.flush()?;

    Ok(records.len())
}

pub fn export_csv(records: &[BmiRecord], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    let written = write_csv(records, file)?;

    info!("Exported {} BMI records to {}", written, path.display());
    Ok(written)
}
