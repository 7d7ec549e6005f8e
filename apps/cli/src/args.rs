use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use s3_listing_common::{
    ListingError, ReportConfig, DEFAULT_BUCKET, DEFAULT_INPUT, DEFAULT_JSON_FILE,
    DEFAULT_SYNC_DEST,
};

/// 按时间排序 S3 对象列表并生成清理脚本。
///
/// 输入为 `aws s3 ls` 的输出，每行：日期 时间 大小 文件名。
///
/// 示例：
///   aws s3 ls s3://bucket --recursive > list.txt
///   s3-listing -file list.txt -sort s3 -order desc
#[derive(Parser, Debug)]
#[command(name = "s3-listing")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input file
    #[arg(long, default_value = DEFAULT_INPUT, allow_hyphen_values = true)]
    pub file: PathBuf,

    /// Sort by 'timestamp' (embedded in filename) or 's3' modification time
    #[arg(long, default_value = "timestamp", allow_hyphen_values = true)]
    pub sort: String,

    /// Sort order: 'asc' or 'desc'
    #[arg(long, default_value = "asc", allow_hyphen_values = true)]
    pub order: String,

    /// Bucket used in generated rm/sync commands
    #[arg(long, default_value = DEFAULT_BUCKET, allow_hyphen_values = true)]
    pub bucket: String,

    /// Local destination of generated sync commands
    #[arg(long, default_value = DEFAULT_SYNC_DEST, allow_hyphen_values = true)]
    pub sync_dest: String,

    /// Script generation: 'fresh' (replace rm.sh/sync.sh), 'append' or 'off'
    #[arg(long, default_value = "fresh", allow_hyphen_values = true)]
    pub scripts: String,

    /// Directory for rm.sh, sync.sh and the JSON dump
    #[arg(long, default_value = ".", allow_hyphen_values = true)]
    pub output_dir: PathBuf,

    /// File name of the JSON dump
    #[arg(long, default_value = DEFAULT_JSON_FILE, allow_hyphen_values = true)]
    pub json: String,

    /// Do not write the JSON dump
    #[arg(long)]
    pub no_json: bool,

    /// Do not extract YYYYMMDD_HHMMSS timestamps from filenames
    #[arg(long)]
    pub no_extract: bool,
}

impl Cli {
    /// 校验排序键等取值；非法值为致命配置错误，发生在任何输出之前
    pub fn into_config(self) -> Result<ReportConfig, ListingError> {
        Ok(ReportConfig {
            input: self.file,
            sort_key: self.sort.parse()?,
            sort_order: self.order.parse()?,
            extract_content_timestamp: !self.no_extract,
            script_mode: self.scripts.parse()?,
            bucket: self.bucket,
            sync_dest: self.sync_dest,
            output_dir: self.output_dir,
            json_file: (!self.no_json).then_some(self.json),
        })
    }
}

/// 兼容 `-file list.txt`、`-sort=s3` 这类单横线长参数：改写为 `--file` 形式。
/// 只改写已知的长参数名；紧跟在需要取值的参数之后的实参视为取值，原样保留。
/// 与 Go 的 flag 包一致，取值可以以 `-` 开头
pub fn normalize_go_style_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let command = Cli::command();
    let long_names: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .chain(["help", "version"])
        .collect();
    let value_names: Vec<&str> = command
        .get_arguments()
        .filter(|arg| arg.get_action().takes_values())
        .filter_map(|arg| arg.get_long())
        .collect();

    let mut expects_value = false;
    let mut normalized = Vec::new();
    for (idx, arg) in args.into_iter().enumerate() {
        if idx == 0 || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let name = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .filter(|rest| !rest.is_empty() && !rest.contains('='));
        expects_value = name.is_some_and(|name| value_names.contains(&name));

        let rewrite = !arg.starts_with("--")
            && arg
                .strip_prefix('-')
                .map(|rest| rest.split('=').next().unwrap_or(rest))
                .is_some_and(|name| long_names.contains(&name));
        if rewrite {
            normalized.push(format!("-{}", arg));
        } else {
            normalized.push(arg);
        }
    }
    normalized
}
