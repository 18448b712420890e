//! 区域与城市概况查询

use super::Snapshot;
use crate::models::{AreaRecord, CityOverview};

impl Snapshot {
    pub fn get_all_areas(&self) -> &[AreaRecord] {
        &self.areas.areas
    }

    /// 按名称查找（忽略大小写），重名时返回第一条
    pub fn get_area_info(&self, area_name: &str) -> Option<&AreaRecord> {
        self.get_all_areas().iter().find(|a| a.is_named(area_name))
    }

    pub fn get_city_overview(&self) -> CityOverview {
        CityOverview::from(&self.areas)
    }
}
