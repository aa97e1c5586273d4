//! CSV export of display records.

use log::info;
use quake_feed::feed::FeedDocument;
use quake_feed::record::{transform_with_report, DisplayRecord};
use std::io::Write;

pub const CSV_HEADER: [&str; 8] = ["time", "title", "url", "lat", "lon", "mag", "depth", "color"];

/// Transform the document and print its records as CSV on stdout.
pub fn run_records(document: &FeedDocument) -> anyhow::Result<()> {
    let transformed = transform_with_report(document);
    info!(
        "Writing {} records ({} skipped)",
        transformed.records.len(),
        transformed.skipped.len()
    );
    let stdout = std::io::stdout();
    write_records_csv(&transformed.records, stdout.lock())
}

/// Write records as CSV, one row per record, with a header row.
pub fn write_records_csv<W: Write>(records: &[DisplayRecord], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record([
            record.formatted_time.clone(),
            record.title.clone(),
            record.url.clone(),
            record.lat.to_string(),
            record.lon.to_string(),
            record.magnitude.to_string(),
            record.depth_km.to_string(),
            record.bucket().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
