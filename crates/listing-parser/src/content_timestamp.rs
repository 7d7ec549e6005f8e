//! 从文件名中提取内容时间戳，例如 `cam1_20230115_083000.mp4` -> 2023-01-15 08:30:00。

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use s3_listing_common::LineError;

pub const CONTENT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

static CONTENT_TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{8}_[0-9]{6}").expect("valid regex"));

/// 只取第一个匹配；没有匹配返回 Ok(None)，匹配但不是合法时间返回错误
pub fn extract_content_timestamp(filename: &str) -> Result<Option<DateTime<Utc>>, LineError> {
    let Some(m) = CONTENT_TIMESTAMP_RE.find(filename) else {
        return Ok(None);
    };
    let value = m.as_str();
    NaiveDateTime::parse_from_str(value, CONTENT_TIMESTAMP_FORMAT)
        .map(|naive| Some(naive.and_utc()))
        .map_err(|source| LineError::InvalidContentTimestamp {
            value: value.to_string(),
            source,
        })
}
