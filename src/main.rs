//! # CID Filler — 应用入口
//!
//! 本文件仅负责日志、命令行与致命错误的退出码。
//! 业务流程见 `app::run`。

use std::process::ExitCode;

use clap::Parser;
use cid_filler::app::{self, RunOptions};
use cid_filler::cli::Cli;
use cid_filler::clipboard::SystemClipboard;
use cid_filler::config::Config;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if !cli.no_banner {
        println!("{}", app::banner());
    }

    let config = match Config::load(&cli.env_file) {
        Ok(config) => config,
        Err(err) => {
            log::error!("❌ 配置错误: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut clipboard = match SystemClipboard::init() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            log::error!("❌ 剪贴板初始化失败: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = RunOptions { no_copy: cli.no_copy };
    match app::run(&config, &mut clipboard, options) {
        Ok(outcome) => {
            log::debug!("运行结束: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}
