use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 列表中的一个对象条目；字段名沿用 results.json 的既有格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// 存储端报告的修改时间
    #[serde(rename = "S3ModificationTime")]
    pub modified_at: DateTime<Utc>,
    #[serde(rename = "FileSize")]
    pub size: u64,
    #[serde(rename = "Filename")]
    pub filename: String,
    /// 文件名中嵌入的时间戳，没有时等于 modified_at
    #[serde(rename = "FileTimestamp")]
    pub content_timestamp: DateTime<Utc>,
}

impl ObjectRecord {
    pub fn new(
        modified_at: DateTime<Utc>,
        size: u64,
        filename: impl Into<String>,
        content_timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            modified_at,
            size,
            filename: filename.into(),
            content_timestamp: content_timestamp.unwrap_or(modified_at),
        }
    }

    /// 内容时间与修改时间不同（文件名中的时间恰好等于修改时间时也为 false）
    pub fn content_differs_from_modified(&self) -> bool {
        self.content_timestamp != self.modified_at
    }
}
