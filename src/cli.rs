use std::path::PathBuf;

use clap::Parser;

/// 从剪贴板读取输入码，查询 SQLite 后把结果写回剪贴板
#[derive(Parser, Debug)]
#[command(name = "cid-filler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 设置文件路径（dotenv 格式）
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// 只打印结果，不写回剪贴板
    #[arg(long)]
    pub no_copy: bool,

    /// 不打印启动横幅
    #[arg(long)]
    pub no_banner: bool,
}
