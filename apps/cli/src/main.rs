//! s3-listing：读取 `aws s3 ls` 风格的列表，按时间排序输出报告，并生成 rm.sh / sync.sh 与 results.json。

use std::process::ExitCode;

use clap::Parser;

mod args;
mod run;

use args::{normalize_go_style_args, Cli};

fn main() -> ExitCode {
    s3_listing_common::init_logging();

    let cli = Cli::parse_from(normalize_go_style_args(std::env::args()));
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run::execute(&config) {
        Ok(summary) => {
            log::info!(
                "{} records reported, {} lines skipped",
                summary.records,
                summary.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
