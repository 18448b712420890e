use crate::models::config::{LogConfig, LogFormat, LogLevel, LogOutput};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// 初始化日志系统
///
/// 支持基于配置的日志输出，包括：
/// - 日志级别（trace/debug/info/warn/error）
/// - 输出格式（JSON/纯文本）
/// - 输出目标（控制台/文件/both），控制台输出写到 stderr，stdout 留给报表
/// - 文件路径（用于文件输出）
///
/// `RUST_LOG` 环境变量优先于配置中的级别。进程内只能初始化一次。
///
/// # 示例
/// ```
/// use realty_data::models::config::LogConfig;
/// use realty_data::core::init_logger;
///
/// let config = LogConfig::default();
/// init_logger(&config).expect("初始化日志系统失败");
/// ```
pub fn init_logger(config: &LogConfig) -> anyhow::Result<()> {
    let filter_layer = create_env_filter(&config.level);

    // 根据配置组合输出层
    let console_layer = match config.output {
        LogOutput::Console | LogOutput::Both => Some(create_console_layer(config.format)),
        LogOutput::File => None,
    };
    let file_layer = match config.output {
        LogOutput::File | LogOutput::Both => {
            Some(create_file_layer(config.format, config.file_path.as_deref())?)
        }
        LogOutput::Console => None,
    };

    Registry::default()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("日志系统已初始化，不能重复初始化: {}", e))?;

    tracing::info!(
        level = config.level.as_str(),
        format = ?config.format,
        output = ?config.output,
        file_path = ?config.file_path,
        "日志系统初始化完成"
    );

    Ok(())
}

/// 创建环境过滤器
fn create_env_filter(level: &LogLevel) -> EnvFilter {
    // 优先从环境变量读取
    // 格式：RUST_LOG=debug 或 RUST_LOG=realty_data=trace
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("realty_data={}", level.as_str())))
}

/// 创建控制台输出层（stderr）
fn create_console_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    match format {
        LogFormat::Text => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(cfg!(debug_assertions))
            .with_thread_ids(false)
            .with_ansi(true)
            .with_span_events(if cfg!(debug_assertions) {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            })
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(cfg!(debug_assertions))
            .with_thread_ids(false)
            .boxed(),
    }
}

/// 创建文件输出层（按天滚动）
fn create_file_layer<S>(
    format: LogFormat,
    file_path: Option<&str>,
) -> anyhow::Result<Box<dyn Layer<S> + Send + Sync + 'static>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let log_dir = get_log_dir(file_path)?;
    let file_appender = rolling::daily(log_dir, "realty-data");
    let (non_blocking, guard) = non_blocking(file_appender);

    // 存储 guard 到全局静态变量（防止被 drop）
    Box::leak(Box::new(guard));

    let layer = match format {
        LogFormat::Text => fmt::layer()
            .with_writer(non_blocking)
            .with_target(cfg!(debug_assertions))
            .with_thread_ids(false)
            .with_ansi(false)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_ansi(false)
            .boxed(),
    };
    Ok(layer)
}

/// 获取日志目录
fn get_log_dir(file_path: Option<&str>) -> anyhow::Result<std::path::PathBuf> {
    match file_path {
        Some(path) => {
            let dir = std::path::PathBuf::from(path);
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        }
        None => {
            // 使用用户主目录下的 .realty-data/logs
            let app_dir = dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("无法获取用户主目录"))?
                .join(".realty-data")
                .join("logs");

            std::fs::create_dir_all(&app_dir)?;
            Ok(app_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_filter_uses_configured_level() {
        std::env::remove_var("RUST_LOG");
        let filter = create_env_filter(&LogLevel::Warn);
        assert_eq!(filter.to_string(), "realty_data=warn");
    }

    #[test]
    fn test_explicit_log_dir_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("logs");

        let dir = get_log_dir(target.to_str()).unwrap();
        assert_eq!(dir, target);
        assert!(target.is_dir());
    }
}
