// ==========================================
// 活体水族发货决策系统 - 订单实体
// ==========================================
// 职责: 订单原始行、行项目、合并后客户订单
// 红线: 不含导入逻辑,合并规则见 importer::order_merger
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 收货目的地 (Destination)
// ==========================================
// 同一运行内按目的地去重查询坐标与气象,作为缓存键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    pub city: String,     // 城市
    pub province: String, // 省/州 (两位代码或全称,原样透传)
}

impl Destination {
    pub fn new(city: impl Into<String>, province: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            province: province.into(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.province)
    }
}

// ==========================================
// 订单原始行 (Raw Order Row)
// ==========================================
// 表格导出约定: 地址字段仅出现在订单的首行,
// 后续行项目行的地址列为空;全部字段先以 Option 接住
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOrderRow {
    // ===== 订单标识 =====
    pub order_id: Option<String>,      // 订单号 (已去除前导 '#')
    pub customer_name: Option<String>, // 收货人姓名

    // ===== 收货地址 =====
    pub city: Option<String>,     // 城市
    pub province: Option<String>, // 省/州

    // ===== 行项目 =====
    pub item_name: Option<String>, // 商品名称
    pub quantity: Option<String>,  // 数量 (原始文本,解析失败时跳过该行项目)
}

// ==========================================
// 行项目 (Line Item)
// ==========================================
// 已解析、未分类;分类在决策装配阶段完成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: i64, // 数量
    pub name: String,  // 商品名称
}

impl LineItem {
    pub fn new(quantity: i64, name: impl Into<String>) -> Self {
        Self {
            quantity,
            name: name.into(),
        }
    }
}

// ==========================================
// 客户订单 (Customer Order)
// ==========================================
// 合并后实体: 每个唯一订单号恰好一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerOrder {
    pub order_id: String,          // 订单号
    pub customer_name: String,     // 收货人姓名
    pub destination: Destination,  // 收货目的地
    pub lines: Vec<LineItem>,      // 行项目列表
}

impl CustomerOrder {
    /// 订单内行项目总件数
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
