//! 查询语句构造子模块
//!
//! ## 职责
//! - 校验配置中的表名与列名形如 SQL 标识符
//! - 拼出唯一一条参数化查询
//!
//! ## 约束
//! 表名与列名来自操作者配置，直接写入 SQL 文本；输入码始终作为绑定参数。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{Config, INPUT_COLUMN, OUTPUT_COLUMN, TABLE_NAME};
use crate::error::AppError;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// 判断字符串是否为不需要引号的 SQL 标识符
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER.is_match(value)
}

fn require_identifier(key: &'static str, value: &str) -> Result<(), AppError> {
    if is_valid_identifier(value) {
        Ok(())
    } else {
        Err(AppError::InvalidIdentifier {
            key,
            value: value.to_string(),
        })
    }
}

/// 构造查询语句
pub fn build_query(config: &Config) -> Result<String, AppError> {
    require_identifier(TABLE_NAME, &config.table_name)?;
    require_identifier(INPUT_COLUMN, &config.input_column)?;
    require_identifier(OUTPUT_COLUMN, &config.output_column)?;

    Ok(format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        config.output_column, config.table_name, config.input_column
    ))
}
