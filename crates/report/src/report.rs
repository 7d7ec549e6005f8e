use std::io::{self, Write};

use chrono::{DateTime, Utc};
use s3_listing_domain::ObjectRecord;

use crate::humanize::{format_age, format_size};

pub const REPORT_HEADER: &str = "Sorted Files:";

const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 报告中的单行，同时用作脚本里的注释正文
pub fn format_record_line(record: &ObjectRecord, now: DateTime<Utc>) -> String {
    format!(
        "S3 Modification Time: {}, {}, {}, age: {}",
        record.modified_at.format(DISPLAY_TIMESTAMP_FORMAT),
        format_size(record.size),
        record.filename,
        format_age(record.content_timestamp, now)
    )
}

/// 输出标题与每条记录；`on_line` 在每行写出后被调用，用于生成脚本片段
pub fn write_report<W, F, E>(
    out: &mut W,
    records: &[ObjectRecord],
    now: DateTime<Utc>,
    mut on_line: F,
) -> Result<(), E>
where
    W: Write,
    F: FnMut(&ObjectRecord, &str) -> Result<(), E>,
    E: From<io::Error>,
{
    writeln!(out, "{}", REPORT_HEADER)?;
    for record in records {
        let line = format_record_line(record, now);
        writeln!(out, "{}", line)?;
        on_line(record, &line)?;
    }
    Ok(())
}
