use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use s3_listing_common::{LineError, ListingError};
use s3_listing_domain::ObjectRecord;

use crate::content_timestamp::extract_content_timestamp;

/// `aws s3 ls` 输出的时间格式（前两列）
pub const LISTING_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 日期、时间、大小、文件名
const MIN_FIELDS: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub extract_content_timestamp: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            extract_content_timestamp: true,
        }
    }
}

/// 解析结果：成功的记录与被跳过的行数
#[derive(Debug, Default)]
pub struct ParsedListing {
    pub records: Vec<ObjectRecord>,
    pub skipped: usize,
}

/// 解析一行。空行返回 Ok(None)；文件名为第 4 列起各列以单个空格重新拼接
pub fn parse_line(line: &str, options: ParseOptions) -> Result<Option<ObjectRecord>, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() < MIN_FIELDS {
        return Err(LineError::MissingFields {
            found: fields.len(),
        });
    }

    let stamp = format!("{} {}", fields[0], fields[1]);
    let modified_at = NaiveDateTime::parse_from_str(&stamp, LISTING_TIMESTAMP_FORMAT)
        .map_err(|source| LineError::InvalidTimestamp {
            value: stamp.clone(),
            source,
        })?
        .and_utc();

    let size = fields[2]
        .parse::<u64>()
        .map_err(|source| LineError::InvalidSize {
            value: fields[2].to_string(),
            source,
        })?;

    let filename = fields[3..].join(" ");

    let content_timestamp = if options.extract_content_timestamp {
        extract_content_timestamp(&filename)?
    } else {
        None
    };

    Ok(Some(ObjectRecord::new(
        modified_at,
        size,
        filename,
        content_timestamp,
    )))
}

/// 逐行解析列表。单行错误（含非 UTF-8 行）记 warn 并跳过；读取失败为致命错误
pub fn parse_listing<R: BufRead>(
    mut reader: R,
    options: ParseOptions,
) -> Result<ParsedListing, ListingError> {
    let mut parsed = ParsedListing::default();
    let mut buf = Vec::new();
    let mut idx = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        idx += 1;

        // 对象键不保证是 UTF-8；非法行跳过，不中断整次运行
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(source) => {
                let e = LineError::InvalidUtf8 { source };
                log::warn!(
                    "skipping line {} '{}': {}",
                    idx,
                    String::from_utf8_lossy(&buf).trim_end(),
                    e
                );
                parsed.skipped += 1;
                continue;
            }
        };

        match parse_line(line, options) {
            Ok(Some(record)) => parsed.records.push(record),
            Ok(None) => {}
            Err(e) => {
                log::warn!("skipping line {} '{}': {}", idx, line, e);
                parsed.skipped += 1;
            }
        }
    }

    log::debug!(
        "parsed {} records ({} dated by filename), skipped {} lines",
        parsed.records.len(),
        parsed
            .records
            .iter()
            .filter(|r| r.content_differs_from_modified())
            .count(),
        parsed.skipped
    );
    Ok(parsed)
}

pub fn open_listing(path: &Path) -> Result<BufReader<File>, ListingError> {
    let file = File::open(path).map_err(|source| ListingError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
