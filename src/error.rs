//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，配置、剪贴板、数据库三条链路共用。
//! 调用侧按分支区分致命错误（配置缺失、剪贴板不可用）与可降级错误（查询失败）。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 底层错误在调用点 `map_err` 时附带上下文（打开 / 准备 / 查询），统一收敛为字符串。

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 必填配置项缺失或为空，携带配置键名
    #[error("{0} 为必填配置项，请检查 .env 或环境变量")]
    MissingSetting(&'static str),

    /// 表名 / 列名不是合法的 SQL 标识符
    #[error("配置项 {key} 的值 '{value}' 不是合法的标识符")]
    InvalidIdentifier { key: &'static str, value: String },

    /// 剪贴板初始化或读写失败
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// 数据库打开或查询失败
    #[error("数据库错误: {0}")]
    Database(String),
}
