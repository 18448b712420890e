//! 配置读取与数据目录解析
//!
//! 配置来源优先级：环境变量 > TOML 配置文件 > 默认值。
//!
//! 读取配置发生在日志系统初始化之前，无效的环境变量取值以告警文本返回，
//! 由调用方在日志就绪后输出。

use crate::data::{DataError, Result};
use crate::models::config::{AppConfig, LogFormat, LogLevel, LogOutput};
use std::fs;
use std::path::{Path, PathBuf};

/// 覆盖数据根目录的环境变量
pub const DATA_DIR_ENV: &str = "REALTY_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "REALTY_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "REALTY_LOG_FORMAT";
pub const LOG_OUTPUT_ENV: &str = "REALTY_LOG_OUTPUT";

/// 读取配置文件（若文件不存在返回默认配置），随后应用环境变量覆盖
///
/// 返回配置以及被忽略的环境变量告警。
pub fn load_app_config(path: Option<&Path>) -> Result<(AppConfig, Vec<String>)> {
    let mut config = match path {
        Some(path) if path.exists() => {
            let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
            toml::from_str(&content)?
        }
        _ => AppConfig::default(),
    };

    let warnings = apply_env_overrides(&mut config);
    Ok((config, warnings))
}

/// 应用环境变量覆盖，无法识别的取值忽略并保留原配置，返回对应的告警
pub fn apply_env_overrides(config: &mut AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(dir) = env_value(DATA_DIR_ENV) {
        config.data_dir = Some(PathBuf::from(dir));
    }

    if let Some(level) = env_value(LOG_LEVEL_ENV) {
        match LogLevel::parse(&level) {
            Some(level) => config.log.level = level,
            None => warnings.push(format!("{}={} 不是有效的日志级别，忽略", LOG_LEVEL_ENV, level)),
        }
    }

    if let Some(format) = env_value(LOG_FORMAT_ENV) {
        match format.to_lowercase().as_str() {
            "json" => config.log.format = LogFormat::Json,
            "text" => config.log.format = LogFormat::Text,
            _ => warnings.push(format!("{}={} 不是有效的日志格式，忽略", LOG_FORMAT_ENV, format)),
        }
    }

    if let Some(output) = env_value(LOG_OUTPUT_ENV) {
        match output.to_lowercase().as_str() {
            "console" => config.log.output = LogOutput::Console,
            "file" => config.log.output = LogOutput::File,
            "both" => config.log.output = LogOutput::Both,
            _ => warnings.push(format!(
                "{}={} 不是有效的日志输出目标，忽略",
                LOG_OUTPUT_ENV, output
            )),
        }
    }

    warnings
}

/// 默认数据根目录
///
/// 依次尝试：`REALTY_DATA_DIR` 环境变量、可执行文件同级的 `data` 目录、当前目录下的 `data`。
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = env_value(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")))
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
