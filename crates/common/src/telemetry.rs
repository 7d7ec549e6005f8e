use env_logger::{Env, Target};

/// 初始化日志：默认级别 info，可用 RUST_LOG 覆盖；输出到 stderr，stdout 只留报告内容
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .format_timestamp_secs()
        .try_init();
}
