// 命令行入口：加载数据并以 JSON 输出一份报表
//
// 用法：realty-data [DATA_DIR] [REPORT] [ARGS...]
//   city                  城市概况（默认）
//   area <name>           区域综合报告
//   agent <id>            经纪人看板
//   property <id>         房源洞察
//   trends [area]         市场趋势
//   search <query>        房源检索
//   compare <area>...     区域指标对比
//
// 第一个参数不是报表名时视为数据根目录，优先于配置文件与 REALTY_DATA_DIR。
// 配置文件路径取自 REALTY_CONFIG（缺省为当前目录下的 realty.toml）。

use anyhow::{bail, Context, Result};
use realty_data::{init_logger, load_app_config, DataStore};
use serde::Serialize;
use std::path::PathBuf;

const CONFIG_ENV: &str = "REALTY_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "realty.toml";
const REPORTS: [&str; 7] = ["city", "area", "agent", "property", "trends", "search", "compare"];

fn main() -> Result<()> {
    let config_path = std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
    let (mut config, warnings) = load_app_config(Some(&config_path))
        .with_context(|| format!("读取配置失败: {}", config_path.display()))?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(dir) = take_data_dir(&mut args) {
        config.data_dir = Some(dir);
    }

    init_logger(&config.log)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let store = DataStore::with_config(&config);
    let snapshot = store.snapshot();

    let report = args.first().map(String::as_str).unwrap_or("city");
    let arg = args.get(1).map(String::as_str);

    tracing::debug!(report, ?arg, data_dir = %store.data_dir().display(), "生成报表");

    match (report, arg) {
        ("city", _) => print_json(&snapshot.get_city_overview()),
        ("area", Some(area)) => print_json(&snapshot.get_comprehensive_area_report(area)),
        ("agent", Some(id)) => match snapshot.get_agent_dashboard(id) {
            Some(dashboard) => print_json(&dashboard),
            None => bail!("未找到经纪人: {}", id),
        },
        ("property", Some(id)) => match snapshot.get_property_insights(id) {
            Some(insights) => print_json(&insights),
            None => bail!("未找到房源: {}", id),
        },
        ("trends", area) => print_json(&snapshot.calculate_market_trends(area)),
        ("search", Some(query)) => print_json(&snapshot.search_properties(query)),
        ("compare", Some(_)) => print_json(&snapshot.compare_areas(&args[1..])),
        (other, _) => bail!("未知报表或缺少参数: {}", other),
    }
}

/// 第一个参数不是报表名时取出作为数据根目录
fn take_data_dir(args: &mut Vec<String>) -> Option<PathBuf> {
    if args
        .first()
        .is_some_and(|first| !REPORTS.contains(&first.as_str()))
    {
        Some(PathBuf::from(args.remove(0)))
    } else {
        None
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("序列化报表失败")?;
    println!("{}", output);
    Ok(())
}
