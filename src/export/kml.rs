//! KML export functionality.
//!
//! Streams rows from the measurement table into a KML document: one styled
//! placemark per row that has coordinates.

use anyhow::{Context, Result};
use futures::TryStreamExt;
use log::{debug, info};
use sqlx::{QueryBuilder, Sqlite};
use std::io::{self, Write};
use std::time::Instant;

use crate::classify::build_classifier;
use crate::kml::{select_style, ColorClassifier, KmlWriter};
use crate::storage::{
    build_select, init_read_only_pool, record_from_columns, row_columns, table_columns, DbPool,
};

use super::sink::IgnoreBrokenPipe;
use super::{ExportOptions, ExportReport};

/// Exports rows to a KML document.
///
/// The document goes to `opts.output`, or to stdout when it is `None`.
/// Rows without coordinates are skipped and counted.
///
/// # Returns
///
/// Returns an [`ExportReport`] with the number of placemarks written per
/// style, or an error if the export fails.
///
/// # Errors
///
/// Fails before writing anything if a table or column name is invalid or
/// does not exist, the database is missing or the output file cannot be
/// created. A failure while streaming rows leaves a truncated document
/// behind.
pub async fn export_kml(opts: &ExportOptions) -> Result<ExportReport> {
    let start_time = Instant::now();

    let mut query_builder = build_select(&opts.table, &opts.columns, opts.since)
        .context("Invalid export query")?;

    let pool = init_read_only_pool(&opts.db_path)
        .await
        .context("Failed to initialize database pool")?;

    let existing = table_columns(&pool, &opts.table)
        .await
        .context("Failed to read table columns")?;
    let classifier_columns: Vec<&str> = opts.classifier_column.as_deref().into_iter().collect();
    opts.columns
        .check_exists(&opts.table, &existing, &classifier_columns)
        .context("Invalid export query")?;

    let classifier = build_classifier(
        opts.classifier,
        opts.classifier_column.as_deref(),
        opts.green_threshold,
        opts.red_threshold,
    );

    info!(
        "Exporting {} from {} (label column: {}, classifier: {})",
        opts.table,
        opts.db_path.display(),
        opts.columns.label,
        opts.classifier
    );

    let mut report = match opts.output.as_ref() {
        Some(output_path) => {
            let mut writer = KmlWriter::open(output_path, &opts.empty_label)
                .context("Failed to create output file")?;
            write_document(&pool, &mut query_builder, &mut writer, opts, classifier.as_ref())
                .await?
        }
        None => {
            let mut writer =
                KmlWriter::new(IgnoreBrokenPipe::new(io::stdout()), &opts.empty_label);
            write_document(&pool, &mut query_builder, &mut writer, opts, classifier.as_ref())
                .await?
        }
    };

    report.output = opts.output.clone();
    report.elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Exported {} placemarks ({} pass, {} slow, {} fail), skipped {} rows without coordinates",
        report.exported, report.pass, report.slow, report.fail, report.skipped
    );
    Ok(report)
}

async fn write_document<W: Write>(
    pool: &DbPool,
    query_builder: &mut QueryBuilder<'static, Sqlite>,
    writer: &mut KmlWriter<W>,
    opts: &ExportOptions,
    classifier: &dyn ColorClassifier,
) -> Result<ExportReport> {
    writer.write_header().context("Failed to write KML header")?;

    let mut report = ExportReport::default();
    let query = query_builder.build();
    let mut rows = query.fetch(pool.as_ref());

    while let Some(row) = rows.try_next().await.context("Failed to read row")? {
        let columns = row_columns(&row).context("Failed to decode row")?;
        let Some(record) = record_from_columns(columns, &opts.columns) else {
            debug!("Skipping row without coordinates");
            report.skipped += 1;
            continue;
        };

        let style = select_style(&record.label, &record.attributes, classifier);
        writer
            .write_placemark(&record, style)
            .context("Failed to write placemark")?;
        report.count(style);
    }

    writer.write_footer().context("Failed to write KML footer")?;
    Ok(report)
}
