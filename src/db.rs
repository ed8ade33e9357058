//! 数据库查询模块
//!
//! # 设计思路
//!
//! 数据库只作为只读协作方：不建表、不迁移、不写入。
//! 每次运行只打开一个连接，为每个输入码执行同一条参数化查询。
//!
//! # 实现思路
//!
//! - `query`：校验表名/列名并拼出 `SELECT <output> FROM <table> WHERE <input> = ?1`
//! - `lookup`：`LookupSession` 持有连接，`Drop` 时自动关闭，任何提前返回都不会泄漏
//!
//! # 错误语义
//!
//! - 某个输入码没有匹配行 → 结果记为 `"Not found"`，继续处理
//! - 连接失败、表/列不存在等数据库错误 → `AppError::Database`，整批中止

mod lookup;
mod query;

pub use lookup::{lookup_codes, LookupSession, NOT_FOUND};
pub use query::{build_query, is_valid_identifier};
