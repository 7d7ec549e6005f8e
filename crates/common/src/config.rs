use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ListingError;

pub const DEFAULT_INPUT: &str = "list.txt";
pub const DEFAULT_BUCKET: &str = "streamboxdineorb";
pub const DEFAULT_SYNC_DEST: &str = "/tmp/video";
pub const DEFAULT_JSON_FILE: &str = "results.json";

/// 排序键：文件名中的时间戳，或列表给出的修改时间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    ContentTimestamp,
    ModificationTime,
}

impl FromStr for SortKey {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timestamp" => Ok(Self::ContentTimestamp),
            "s3" => Ok(Self::ModificationTime),
            other => Err(ListingError::Config(format!(
                "invalid sort option '{}', use 'timestamp' or 's3'",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContentTimestamp => f.write_str("timestamp"),
            Self::ModificationTime => f.write_str("s3"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(ListingError::Config(format!(
                "invalid sort order '{}', use 'asc' or 'desc'",
                other
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("asc"),
            Self::Descending => f.write_str("desc"),
        }
    }
}

/// rm.sh / sync.sh 的生成方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptMode {
    /// 先删除已有脚本再重新生成
    #[default]
    Fresh,
    /// 保留已有脚本，在末尾追加
    Append,
    Off,
}

impl FromStr for ScriptMode {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fresh" => Ok(Self::Fresh),
            "append" => Ok(Self::Append),
            "off" => Ok(Self::Off),
            other => Err(ListingError::Config(format!(
                "invalid script mode '{}', use 'fresh', 'append' or 'off'",
                other
            ))),
        }
    }
}

/// 运行配置：启动时由命令行参数构造一次，按引用传给各阶段
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    /// 是否从文件名中提取 `YYYYMMDD_HHMMSS` 时间戳
    pub extract_content_timestamp: bool,
    pub script_mode: ScriptMode,
    pub bucket: String,
    pub sync_dest: String,
    pub output_dir: PathBuf,
    /// JSON 结果文件名；None 表示不输出
    pub json_file: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            extract_content_timestamp: true,
            script_mode: ScriptMode::default(),
            bucket: DEFAULT_BUCKET.to_string(),
            sync_dest: DEFAULT_SYNC_DEST.to_string(),
            output_dir: PathBuf::from("."),
            json_file: Some(DEFAULT_JSON_FILE.to_string()),
        }
    }
}

impl ReportConfig {
    /// 输出目录为 `.` 时直接返回文件名
    pub fn json_path(&self) -> Option<PathBuf> {
        let name = self.json_file.as_ref()?;
        if self.output_dir == Path::new(".") {
            Some(PathBuf::from(name))
        } else {
            Some(self.output_dir.join(name))
        }
    }
}
