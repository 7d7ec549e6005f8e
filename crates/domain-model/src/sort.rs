use s3_listing_common::{SortKey, SortOrder};

use crate::ObjectRecord;

/// 按选定的时间字段和方向原地排序；稳定排序，相同时间保持输入顺序
pub fn sort_records(records: &mut [ObjectRecord], key: SortKey, order: SortOrder) {
    let field = |r: &ObjectRecord| match key {
        SortKey::ContentTimestamp => r.content_timestamp,
        SortKey::ModificationTime => r.modified_at,
    };
    match order {
        SortOrder::Ascending => records.sort_by(|a, b| field(a).cmp(&field(b))),
        SortOrder::Descending => records.sort_by(|a, b| field(b).cmp(&field(a))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap()
    }

    fn names(records: &[ObjectRecord]) -> Vec<&str> {
        records.iter().map(|r| r.filename.as_str()).collect()
    }

    /// 修改时间与内容时间顺序相反，用于区分两个排序键
    fn sample() -> Vec<ObjectRecord> {
        vec![
            ObjectRecord::new(at(2), 1, "b", Some(at(20))),
            ObjectRecord::new(at(3), 1, "c", Some(at(10))),
            ObjectRecord::new(at(1), 1, "a", Some(at(30))),
        ]
    }

    #[test]
    fn test_sort_by_modification_time() {
        let mut records = sample();
        sort_records(&mut records, SortKey::ModificationTime, SortOrder::Ascending);
        assert_eq!(names(&records), ["a", "b", "c"]);

        sort_records(&mut records, SortKey::ModificationTime, SortOrder::Descending);
        assert_eq!(names(&records), ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_by_content_timestamp() {
        let mut records = sample();
        sort_records(&mut records, SortKey::ContentTimestamp, SortOrder::Ascending);
        assert_eq!(names(&records), ["c", "b", "a"]);

        sort_records(&mut records, SortKey::ContentTimestamp, SortOrder::Descending);
        assert_eq!(names(&records), ["a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut records = vec![
            ObjectRecord::new(at(1), 1, "first", None),
            ObjectRecord::new(at(1), 1, "second", None),
        ];
        sort_records(&mut records, SortKey::ModificationTime, SortOrder::Descending);
        assert_eq!(names(&records), ["first", "second"]);
    }

    #[test]
    fn test_sort_empty() {
        let mut records: Vec<ObjectRecord> = vec![];
        sort_records(&mut records, SortKey::ContentTimestamp, SortOrder::Ascending);
        assert!(records.is_empty());
    }
}
