//! 配套设施查询

use super::Snapshot;
use crate::models::{AreaAmenities, ShoppingEntry, Venue};
use serde_json::Value;
use std::collections::BTreeMap;

impl Snapshot {
    /// 学校列表
    ///
    /// 学校数据没有区域归属，`area` 参数目前不参与筛选，
    /// 按小学、初中、高中、私立的固定顺序返回全部学校。
    pub fn get_schools_by_area(&self, _area: &str) -> Vec<&Venue> {
        self.amenities
            .schools
            .as_ref()
            .map(|schools| schools.all().collect())
            .unwrap_or_default()
    }

    /// 按分类键取原始配套数据，分类不存在时返回空对象
    pub fn get_amenities_by_type(&self, amenity_type: &str) -> Value {
        self.amenities.by_type(amenity_type)
    }

    /// 区域配套汇总：学校（不筛选）、该区域的公园、各购物分类下该区域的商店
    pub fn get_area_amenities(&self, area: &str) -> AreaAmenities<'_> {
        let parks: Vec<&Venue> = self
            .amenities
            .parks()
            .iter()
            .filter(|park| park.in_area(area))
            .collect();

        let shopping: BTreeMap<&str, Vec<&Venue>> = self
            .amenities
            .shopping
            .iter()
            .flatten()
            .filter_map(|(shop_type, entry)| match entry {
                ShoppingEntry::Venues(shops) => Some((
                    shop_type.as_str(),
                    shops.iter().filter(|shop| shop.in_area(area)).collect(),
                )),
                ShoppingEntry::Other(_) => None,
            })
            .collect();

        AreaAmenities {
            schools: self.get_schools_by_area(area),
            parks,
            shopping,
        }
    }
}
