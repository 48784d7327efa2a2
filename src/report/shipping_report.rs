// ==========================================
// 活体水族发货决策系统 - 发货决策报告
// ==========================================
// 职责: 决策列表 → CSV 报告行的格式化与读写
// 红线: 列名与文案是输出契约,不得擅改
// ==========================================

use crate::domain::decision::ShippingDecision;
use crate::report::error::ReportResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

// ==========================================
// DecisionRow - 报告行
// ==========================================
// 字段名即 CSV 列名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRow {
    // ===== 订单标识 =====
    pub order_id: String,
    pub customer_name: String,
    pub city: String,
    pub province: String,

    // ===== 判定结果 =====
    pub can_ship: bool,
    pub chosen_day: String,     // "Wed" / "Thu" / "none"
    pub delivery_date: String,  // ISO 日期,未选定时为空
    pub avg_temp_c: String,     // 选定日均温,如 "3.4°C",缺失为 "N/A"

    // ===== 逐日明细 =====
    pub wednesday_delivery: bool,
    pub thursday_delivery: bool,
    pub wed_avg_temp_c: String,
    pub thu_avg_temp_c: String,

    // ===== 包装提示 =====
    pub extra_cold: bool,
    pub needs_heatpack: bool,

    // ===== 原因与清单 =====
    pub reason: String,
    pub livestock_items: String,
    pub other_items: String,
    pub packing_list: String,
}

impl From<&ShippingDecision> for DecisionRow {
    fn from(decision: &ShippingDecision) -> Self {
        let assessment = &decision.assessment;
        let chosen = assessment.chosen_assessment();

        Self {
            order_id: decision.order_id.clone(),
            customer_name: decision.customer_name.clone(),
            city: decision.destination.city.clone(),
            province: decision.destination.province.clone(),
            can_ship: assessment.can_ship,
            chosen_day: match assessment.chosen_day {
                Some(day) => day.to_string(),
                None => "none".to_string(),
            },
            delivery_date: chosen
                .map(|a| a.delivery_date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            avg_temp_c: format_temp(chosen.and_then(|a| a.mean_temp_c)),
            wednesday_delivery: assessment.wednesday.deliverable,
            thursday_delivery: assessment.thursday.deliverable,
            wed_avg_temp_c: format_temp(assessment.wednesday.mean_temp_c),
            thu_avg_temp_c: format_temp(assessment.thursday.mean_temp_c),
            extra_cold: assessment.extra_cold,
            needs_heatpack: assessment.needs_heatpack,
            reason: assessment.reason.clone(),
            livestock_items: decision.livestock_list(),
            other_items: decision.other_list(),
            packing_list: decision.packing_list(),
        }
    }
}

/// 均温文案: 一位小数带单位,缺失为 "N/A"
fn format_temp(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{:.1}°C", value),
        None => "N/A".to_string(),
    }
}

/// 报告排序: 可发货在前,组内按选定日 (周三 → 周四),稳定
pub fn sort_decisions(decisions: &mut [ShippingDecision]) {
    decisions.sort_by_key(|d| (!d.assessment.can_ship, d.day_sort_key()));
}

/// 写出发货决策 CSV
pub fn write_csv(path: &Path, decisions: &[ShippingDecision]) -> ReportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for decision in decisions {
        writer.serialize(DecisionRow::from(decision))?;
    }
    writer.flush()?;
    info!(
        path = %path.display(),
        rows_count = decisions.len(),
        "发货决策报告已写出"
    );
    Ok(())
}

/// 读回发货决策 CSV (核对用)
pub fn read_csv(path: &Path) -> ReportResult<Vec<DecisionRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
