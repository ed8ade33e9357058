//! 运行编排模块
//!
//! # 设计思路
//!
//! 把"读剪贴板 → 解析 → 查询 → 写回"串成一次运行，返回 `RunOutcome` 说明本次做了什么。
//! 剪贴板通过 `TextClipboard` 注入，因此整条链路可以在没有桌面会话时测试。
//!
//! # 错误语义
//!
//! - 查询失败只记录警告并返回 `LookupFailed`，不写剪贴板
//! - 写回剪贴板失败向上返回 `AppError::Clipboard`

use crate::clipboard::TextClipboard;
use crate::codes::{join_results, parse_codes};
use crate::config::Config;
use crate::db::lookup_codes;
use crate::error::AppError;

/// 运行选项
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// 只打印结果，不写回剪贴板
    pub no_copy: bool,
}

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 剪贴板为空
    EmptyClipboard,
    /// 剪贴板只有空白行
    NoCodes,
    /// 查询中止，剪贴板未修改
    LookupFailed,
    /// 查询成功但没有任何结果（当前查询链路下不可达）
    NoResults,
    /// 结果已打印，按选项未写回
    Printed(String),
    /// 结果已写回剪贴板
    Copied(String),
}

/// 启动横幅
pub fn banner() -> String {
    format!(
        "📃 CID Filler version: v{}\n🐦‍🔥 Author: {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    )
}

/// 执行一次完整的查询流程
pub fn run(
    config: &Config,
    clipboard: &mut dyn TextClipboard,
    options: RunOptions,
) -> Result<RunOutcome, AppError> {
    println!("♨️ 正在从剪贴板读取输入码...");
    println!("🗂️ 数据库: {}", config.db_path);
    println!(
        "🔍 查询映射: {}.{} -> {}.{}",
        config.table_name, config.input_column, config.table_name, config.output_column
    );

    let content = clipboard.read_text();
    if content.is_empty() {
        println!("❌ 剪贴板中没有内容，请重新复制后再试");
        return Ok(RunOutcome::EmptyClipboard);
    }

    let codes = parse_codes(&content);
    if codes.is_empty() {
        println!("❌ 剪贴板中没有可用的输入码，请重新复制后再试");
        return Ok(RunOutcome::NoCodes);
    }
    println!("💡 共找到 {} 个输入码", codes.len());

    let results = match lookup_codes(&codes, config) {
        Ok(results) => results,
        Err(err) => {
            log::warn!("⚠️ 查询失败，请检查剪贴板内容是否为有效的输入码: {}", err);
            return Ok(RunOutcome::LookupFailed);
        }
    };

    // lookup_codes 对每个输入码恰好返回一个结果，codes 非空时此分支不会命中
    if results.is_empty() {
        println!("⚠️ 没有查询到结果");
        return Ok(RunOutcome::NoResults);
    }

    let payload = join_results(&results);
    println!("\nℹ️ 查询结果:");
    println!("{}", payload);

    if options.no_copy {
        log::info!("已启用 --no-copy，跳过写回剪贴板");
        return Ok(RunOutcome::Printed(payload));
    }

    clipboard.write_text(&payload)?;
    println!("\n✅ 结果已复制到剪贴板");
    Ok(RunOutcome::Copied(payload))
}

#[cfg(test)]
mod tests {
    use super::{banner, run, RunOptions, RunOutcome};
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;

    fn config_without_db() -> Config {
        Config {
            db_path: std::env::temp_dir()
                .join("cid-filler-app-test-missing.db")
                .to_string_lossy()
                .to_string(),
            table_name: "codes".to_string(),
            input_column: "sc".to_string(),
            output_column: "cid".to_string(),
        }
    }

    #[test]
    fn banner_names_version() {
        assert!(banner().contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn empty_clipboard_stops_before_lookup() {
        let mut clipboard = MemoryClipboard::default();
        let outcome = run(&config_without_db(), &mut clipboard, RunOptions::default()).expect("run");

        assert_eq!(outcome, RunOutcome::EmptyClipboard);
        assert_eq!(clipboard.writes(), 0);
    }

    #[test]
    fn whitespace_only_clipboard_has_no_codes() {
        let mut clipboard = MemoryClipboard::with_text("  \n\t\n");
        let outcome = run(&config_without_db(), &mut clipboard, RunOptions::default()).expect("run");

        assert_eq!(outcome, RunOutcome::NoCodes);
        assert_eq!(clipboard.content(), "  \n\t\n");
    }

    #[test]
    fn unreachable_database_leaves_clipboard_untouched() {
        let mut clipboard = MemoryClipboard::with_text("101\n202");
        let outcome = run(&config_without_db(), &mut clipboard, RunOptions::default()).expect("run");

        assert_eq!(outcome, RunOutcome::LookupFailed);
        assert_eq!(clipboard.writes(), 0);
        assert_eq!(clipboard.content(), "101\n202");
    }
}
