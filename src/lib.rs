//! # CID Filler — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main ── cli (clap) ── env_logger                        │
//! │    │                                                     │
//! │    ├─ config ──── .env + 环境变量 → Config               │
//! │    ├─ clipboard ─ SystemClipboard (arboard)              │
//! │    └─ app::run                                           │
//! │         ├─ codes ── 拆行 / 去空白 / 拼接结果             │
//! │         └─ db ───── LookupSession (rusqlite, 只读)       │
//! │                                                          │
//! │  error ── AppError (统一错误类型)                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`config`] | 读取并校验四个必填配置项 |
//! | [`clipboard`] | 纯文本剪贴板读写（系统 / 内存两种实现） |
//! | [`codes`] | 输入码解析与结果拼接 |
//! | [`db`] | 标识符校验、参数化查询、只读会话 |
//! | [`app`] | 单次运行编排，返回 `RunOutcome` |
//! | [`cli`] | 命令行参数 |

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod codes;
pub mod config;
pub mod db;
pub mod error;
