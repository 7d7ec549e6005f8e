use std::io::{self, Write};

use chrono::{DateTime, Utc};
use s3_listing_common::{ListingError, ReportConfig, ScriptMode};
use s3_listing_domain::sort_records;
use s3_listing_executor::{write_results_json, ScriptWriter};
use s3_listing_parser::{open_listing, parse_listing, ParseOptions};
use s3_listing_report::write_report;

/// 一次运行的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub skipped: usize,
}

pub fn execute(config: &ReportConfig) -> Result<RunSummary, ListingError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_to(config, &mut out, Utc::now())
}

/// 读取、排序、输出报告；`now` 在整次运行中只取一次
pub fn execute_to<W: Write>(
    config: &ReportConfig,
    out: &mut W,
    now: DateTime<Utc>,
) -> Result<RunSummary, ListingError> {
    let reader = open_listing(&config.input)?;
    let options = ParseOptions {
        extract_content_timestamp: config.extract_content_timestamp,
    };
    let parsed = parse_listing(reader, options)?;

    let mut records = parsed.records;
    sort_records(&mut records, config.sort_key, config.sort_order);
    log::debug!(
        "sorted {} records by {} {}",
        records.len(),
        config.sort_key,
        config.sort_order
    );

    let scripts = match config.script_mode {
        ScriptMode::Off => None,
        mode => {
            let writer = ScriptWriter::new(&config.output_dir, &config.bucket, &config.sync_dest);
            writer.prepare(mode)?;
            Some(writer)
        }
    };

    write_report(out, &records, now, |record, line| match &scripts {
        Some(writer) => writer.append(record, line),
        None => Ok(()),
    })?;

    if let Some(path) = config.json_path() {
        write_results_json(&path, &records)?;
        writeln!(out, "Results saved to {}", path.display())?;
    }

    Ok(RunSummary {
        records: records.len(),
        skipped: parsed.skipped,
    })
}
