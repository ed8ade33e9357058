//! 剪贴板适配模块
//!
//! # 设计思路
//!
//! 只暴露纯文本的读与写两个能力，通过 `TextClipboard` trait 与具体后端解耦：
//! - **系统剪贴板**：`SystemClipboard`，基于 `arboard`，需在进程内显式 `init()` 一次
//! - **内存剪贴板**：`MemoryClipboard`，无需桌面会话，便于测试与无头环境
//!
//! # 实现思路
//!
//! - 读取失败（空剪贴板、非文本内容）统一降级为空字符串，由上层按"无内容"处理。
//! - 写入失败返回 `AppError::Clipboard`，由上层决定是否终止进程。

mod memory;
mod system;

pub use memory::MemoryClipboard;
pub use system::SystemClipboard;

use crate::error::AppError;

/// 纯文本剪贴板
pub trait TextClipboard {
    /// 读取当前文本内容，无文本时返回空字符串
    fn read_text(&mut self) -> String;

    /// 用给定文本替换剪贴板内容
    fn write_text(&mut self, content: &str) -> Result<(), AppError>;
}
