use std::fs;
use std::path::Path;

use s3_listing_common::ListingError;
use s3_listing_domain::ObjectRecord;

/// 以两空格缩进的 JSON 数组写出全部记录（覆盖已有文件）
pub fn write_results_json(path: &Path, records: &[ObjectRecord]) -> Result<(), ListingError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|source| ListingError::Artifact {
        path: path.to_path_buf(),
        source,
    })
}
