// ==========================================
// 活体水族发货决策系统 - 补货实体
// ==========================================
// 职责: 供应商商品、采购建议记录
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 供应商商品 (Vendor Product)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorProduct {
    pub product_id: i64, // 平台商品 ID
    pub title: String,   // 商品标题
}

// ==========================================
// 采购建议 (PO Recommendation)
// ==========================================
// 建议量 = max(0, 销量 x 缓冲 - 可用库存), 可用库存为负时先补齐缺口
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoRecommendation {
    pub product_id: i64,         // 平台商品 ID
    pub title: String,           // 商品标题
    pub sales_qty: i64,          // 窗口期销量
    pub current_inventory: i64,  // 当前库存 (各仓合计)
    pub incoming_inventory: i64, // 采购在途
    pub committed_qty: i64,      // 未履约占用
    pub buffer_factor: f64,      // 采用的缓冲系数
    pub recommended_qty: i64,    // 建议采购量
}

impl PoRecommendation {
    /// 缓冲系数的报告文案: 1.2 -> "20%"
    pub fn buffer_label(&self) -> String {
        format!("{:.0}%", (self.buffer_factor - 1.0) * 100.0)
    }
}
