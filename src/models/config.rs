// 应用配置结构：数据目录与日志配置

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// 解析字符串为日志级别（忽略大小写）
    pub fn parse(level: &str) -> Option<Self> {
        match level.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 日志输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// 标准错误输出（标准输出留给报表）
    #[default]
    Console,
    File,
    Both,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub output: LogOutput,
    /// 日志目录（文件输出时使用，缺省为 ~/.realty-data/logs）
    #[serde(default)]
    pub file_path: Option<String>,
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 数据根目录，缺省时按可执行文件位置推导
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub log: LogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.log.output, LogOutput::Console);
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
data_dir = "/srv/realty/data"

[log]
level = "debug"
output = "both"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/realty/data")));
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.output, LogOutput::Both);
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
