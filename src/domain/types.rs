// ==========================================
// 活体水族发货决策系统 - 领域类型定义
// ==========================================
// 职责: 候选配送日、商品类别等基础枚举
// 红线: 纯类型定义,不含 I/O 与引擎逻辑
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 候选配送日 (Delivery Day)
// ==========================================
// 每周两个固定的周中配送槽位,按槽位顺序优先
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryDay {
    Wed, // 周三槽位 (第一候选)
    Thu, // 周四槽位 (第二候选)
}

impl DeliveryDay {
    /// 两个槽位,按优先顺序
    pub fn all() -> [DeliveryDay; 2] {
        [DeliveryDay::Wed, DeliveryDay::Thu]
    }

    /// 槽位对应的星期
    pub fn weekday(&self) -> Weekday {
        match self {
            DeliveryDay::Wed => Weekday::Wed,
            DeliveryDay::Thu => Weekday::Thu,
        }
    }

    /// 报告用全称 (决策原因文案的一部分,输出契约为英文)
    pub fn full_name(&self) -> &'static str {
        match self {
            DeliveryDay::Wed => "Wednesday",
            DeliveryDay::Thu => "Thursday",
        }
    }

    /// 排序优先级: 槽位 1 < 槽位 2 (无配送日时调用方使用更大的键)
    pub fn priority(&self) -> u8 {
        match self {
            DeliveryDay::Wed => 0,
            DeliveryDay::Thu => 1,
        }
    }

    /// 从报告短名解析 (往返读取用)
    pub fn parse_slot(s: &str) -> Option<DeliveryDay> {
        match s {
            "Wed" => Some(DeliveryDay::Wed),
            "Thu" => Some(DeliveryDay::Thu),
            _ => None,
        }
    }
}

impl fmt::Display for DeliveryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 报告短名,与决策表 chosen_day 列一致
        match self {
            DeliveryDay::Wed => write!(f, "Wed"),
            DeliveryDay::Thu => write!(f, "Thu"),
        }
    }
}

// ==========================================
// 商品类别 (Item Category)
// ==========================================
// 关键词分类结果: 活体/盆栽 需温控包装, 其他走仓库拣货
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    LivestockPotted, // 活体/盆栽 (虾类、水草盆栽等)
    Other,           // 其他商品 (器材、耗材)
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemCategory::LivestockPotted => write!(f, "LIVESTOCK_POTTED"),
            ItemCategory::Other => write!(f, "OTHER"),
        }
    }
}
