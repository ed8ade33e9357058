//! 配置加载模块
//!
//! # 设计思路
//!
//! 启动时一次性解析四个必填配置项，构造不可变的 `Config`，
//! 之后以引用形式传给各组件，不使用任何全局状态。
//!
//! # 实现思路
//!
//! - 设置文件（默认 `.env`）通过 `dotenvy::from_path_iter` 读入内存，不修改进程环境。
//! - 进程环境变量优先于设置文件，与 `dotenvy::dotenv()` 不覆盖已有变量的规则一致。
//! - 设置文件缺失或不可读只记录警告，不中断启动。
//! - 按 `DB_PATH → TABLE_NAME → INPUT_COLUMN → OUTPUT_COLUMN` 顺序校验，遇到第一个缺失即返回。

use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::error::AppError;

pub const DB_PATH: &str = "DB_PATH";
pub const TABLE_NAME: &str = "TABLE_NAME";
pub const INPUT_COLUMN: &str = "INPUT_COLUMN";
pub const OUTPUT_COLUMN: &str = "OUTPUT_COLUMN";

/// 查询配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    pub table_name: String,
    pub input_column: String,
    pub output_column: String,
}

impl Config {
    /// 从设置文件与进程环境加载配置
    pub fn load(settings_file: &Path) -> Result<Self, AppError> {
        Self::load_with(settings_file, |key| env::var(key).ok())
    }

    /// 合并设置文件与给定的环境来源，环境来源优先
    pub fn load_with(
        settings_file: &Path,
        env_lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let file_values = read_settings_file(settings_file);
        Self::from_lookup(|key| env_lookup(key).or_else(|| file_values.get(key).cloned()))
    }

    /// 通过任意键值来源构造配置，空字符串视为缺失
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let require = |key: &'static str| -> Result<String, AppError> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(AppError::MissingSetting(key))
        };

        Ok(Self {
            db_path: require(DB_PATH)?,
            table_name: require(TABLE_NAME)?,
            input_column: require(INPUT_COLUMN)?,
            output_column: require(OUTPUT_COLUMN)?,
        })
    }
}

fn read_settings_file(path: &Path) -> HashMap<String, String> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) => {
            log::warn!("⚠️ 加载设置文件 {} 失败，仅使用环境变量: {}", path.display(), err);
            return HashMap::new();
        }
    };

    let mut values = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(err) => {
                log::warn!("⚠️ 设置文件 {} 解析中断: {}", path.display(), err);
                break;
            }
        }
    }
    log::debug!("从 {} 读取到 {} 个设置项", path.display(), values.len());
    values
}
