//! 房产数据存储
//!
//! `DataStore` 负责从数据根目录加载七个固定数据集，`Snapshot` 是加载结果的不可变集合，
//! 所有查询都在快照上进行，按职责拆分为多个子模块。
//!
//! # 刷新语义
//!
//! `refresh` 清空路径缓存并完整加载一份新快照，随后在一次写锁内整体替换，
//! 持有旧快照的读者不受影响，也不会看到只刷新了一部分的数据。
//!
//! # 使用示例
//!
//! ```rust
//! use realty_data::{DataStore, PropertyFilter};
//!
//! let store = DataStore::open("/srv/realty/data");
//! let snapshot = store.snapshot();
//! let homes = snapshot.filter_properties(&PropertyFilter::new().min_price(600_000.0));
//! ```

mod agents;
mod amenities;
mod areas;
mod clients;
mod market;
mod properties;
mod reports;
mod transactions;


pub use reports::{AgentDashboard, AreaReport, PropertyInsights};

use crate::data::managers::JsonManager;
use crate::models::config::AppConfig;
use crate::models::{
    AgentsDocument, AmenitiesDocument, AreasDocument, ClientsDocument, MarketDocument,
    PropertiesDocument, TransactionsDocument,
};
use crate::utils::config::default_data_dir;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// 数据集及其在数据根目录下的固定相对路径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Properties,
    Agents,
    Market,
    Clients,
    Amenities,
    Transactions,
    Areas,
}

impl Dataset {
    pub const ALL: [Dataset; 7] = [
        Dataset::Properties,
        Dataset::Agents,
        Dataset::Market,
        Dataset::Clients,
        Dataset::Amenities,
        Dataset::Transactions,
        Dataset::Areas,
    ];

    pub fn relative_path(self) -> &'static str {
        match self {
            Dataset::Properties => "properties/active_listings.json",
            Dataset::Agents => "agents/agent_profiles.json",
            Dataset::Market => "market/market_analytics.json",
            Dataset::Clients => "clients/client_database.json",
            Dataset::Amenities => "amenities/local_amenities.json",
            Dataset::Transactions => "transactions/recent_sales.json",
            Dataset::Areas => "areas/city_overview.json",
        }
    }

    pub fn path_in(self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }
}

/// 一次完整加载得到的全部文档
///
/// 加载失败的文档以空文档代替，因此调用方无法区分“加载失败”和“文档本身为空”。
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub(crate) properties: PropertiesDocument,
    pub(crate) agents: AgentsDocument,
    pub(crate) market: MarketDocument,
    pub(crate) clients: ClientsDocument,
    pub(crate) amenities: AmenitiesDocument,
    pub(crate) transactions: TransactionsDocument,
    pub(crate) areas: AreasDocument,
}

impl Snapshot {
    fn load(json: &JsonManager, root: &Path) -> Self {
        let snapshot = Self {
            properties: load_document(json, root, Dataset::Properties),
            agents: load_document(json, root, Dataset::Agents),
            market: load_document(json, root, Dataset::Market),
            clients: load_document(json, root, Dataset::Clients),
            amenities: load_document(json, root, Dataset::Amenities),
            transactions: load_document(json, root, Dataset::Transactions),
            areas: load_document(json, root, Dataset::Areas),
        };

        tracing::debug!(
            properties = snapshot.properties.active_listings.len(),
            agents = snapshot.agents.agents.len(),
            clients = snapshot.clients.clients.len(),
            sales = snapshot.transactions.recent_sales.len(),
            areas = snapshot.areas.areas.len(),
            "数据快照加载完成"
        );

        snapshot
    }
}

/// 加载单个数据集，失败时记录警告并返回空文档
fn load_document<T>(json: &JsonManager, root: &Path, dataset: Dataset) -> T
where
    T: DeserializeOwned + Default,
{
    let path = dataset.path_in(root);
    match json.read_as(&path) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(
                dataset = ?dataset,
                path = %path.display(),
                error = %e,
                "加载数据文件失败，使用空文档"
            );
            T::default()
        }
    }
}

/// 房产数据存储
pub struct DataStore {
    data_dir: PathBuf,
    json: JsonManager,
    snapshot: RwLock<Arc<Snapshot>>,
}

impl DataStore {
    /// 使用默认数据目录创建（见 [`default_data_dir`]）
    pub fn new() -> Self {
        Self::open(default_data_dir())
    }

    /// 从指定数据根目录创建，构造时立即加载全部数据集
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let json = JsonManager::new();
        let snapshot = Snapshot::load(&json, &data_dir);

        tracing::info!(data_dir = %data_dir.display(), "数据存储初始化完成");

        Self {
            data_dir,
            json,
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// 按应用配置创建
    pub fn with_config(config: &AppConfig) -> Self {
        match &config.data_dir {
            Some(dir) => Self::open(dir.clone()),
            None => Self::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// 获取当前快照
    pub fn snapshot(&self) -> Arc<Snapshot> {
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// 清空缓存并从磁盘重新加载全部数据集
    pub fn refresh(&self) {
        self.json.clear_cache();
        let fresh = Arc::new(Snapshot::load(&self.json, &self.data_dir));

        match self.snapshot.write() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }

        tracing::info!(data_dir = %self.data_dir.display(), "数据已刷新");
    }

    /// 读取数据集的原始 JSON（经路径缓存），加载失败时返回空对象
    pub fn raw_document(&self, dataset: Dataset) -> Value {
        let path = dataset.path_in(&self.data_dir);
        self.json.read(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "读取原始文档失败，使用空文档");
            Value::Object(serde_json::Map::new())
        })
    }

    /// 当前缓存的文档数
    pub fn cached_documents(&self) -> usize {
        self.json.cached_len()
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
