use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, OptionalExtension};

use super::query::build_query;
use crate::config::Config;
use crate::error::AppError;

/// 输入码没有匹配行时的结果
pub const NOT_FOUND: &str = "Not found";

/// 一次查询会话
///
/// 持有唯一的数据库连接与查询语句，会话离开作用域时连接随之关闭。
pub struct LookupSession {
    conn: Connection,
    sql: String,
}

impl LookupSession {
    /// 以只读方式打开 `DB_PATH` 指向的数据库
    pub fn open(config: &Config) -> Result<Self, AppError> {
        let sql = build_query(config)?;
        let conn = Connection::open_with_flags(&config.db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| AppError::Database(format!("打开数据库 {} 失败: {}", config.db_path, e)))?;
        log::debug!("数据库已打开（只读）: {}", config.db_path);
        Ok(Self { conn, sql })
    }

    /// 复用已有连接，主要用于内存数据库
    pub fn with_connection(conn: Connection, config: &Config) -> Result<Self, AppError> {
        let sql = build_query(config)?;
        Ok(Self { conn, sql })
    }

    /// 查询单个输入码
    ///
    /// 无匹配行返回 [`NOT_FOUND`]；其余数据库错误直接返回。
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        let code = code.trim();
        let mut stmt = self
            .conn
            .prepare_cached(&self.sql)
            .map_err(|e| AppError::Database(format!("准备查询失败: {}", e)))?;

        let value = stmt
            .query_row([code], |row| row.get::<_, Value>(0))
            .optional()
            .map_err(|e| AppError::Database(format!("查询 '{}' 失败: {}", code, e)))?;

        Ok(match value {
            Some(value) => value_to_text(value),
            None => {
                log::debug!("🔍 未找到输入码: {}", code);
                NOT_FOUND.to_string()
            }
        })
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => NOT_FOUND.to_string(),
        Value::Integer(v) => v.to_string(),
        Value::Real(v) => v.to_string(),
        Value::Text(s) => s,
        Value::Blob(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// 按输入顺序查询全部输入码
///
/// 遇到第一个数据库错误即中止，已取得的部分结果丢弃。
pub fn lookup_codes(codes: &[String], config: &Config) -> Result<Vec<String>, AppError> {
    let session = LookupSession::open(config)?;
    codes.iter().map(|code| session.resolve(code)).collect()
}
