use chrono::{DateTime, Utc};

const SI_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// 以 1000 为进制的可读大小：`999 B`、`1.0 kB`、`15 MB`
pub fn format_size(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < SI_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let rounded = (value * 10.0 + 0.5).floor() / 10.0;
    if rounded < 10.0 {
        format!("{:.1} {}", rounded, SI_UNITS[unit])
    } else {
        format!("{:.0} {}", rounded, SI_UNITS[unit])
    }
}

/// `now - since` 拆成非零的 `Nd Nh Nm Ns`；零或未来时间为 `0s`
pub fn format_age(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let total = (now - since).num_seconds().max(0);

    let parts = [
        (total / 86_400, "d"),
        (total % 86_400 / 3_600, "h"),
        (total % 3_600 / 60, "m"),
        (total % 60, "s"),
    ];

    let age: Vec<String> = parts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{}{}", n, unit))
        .collect();

    if age.is_empty() {
        "0s".to_string()
    } else {
        age.join(" ")
    }
}
