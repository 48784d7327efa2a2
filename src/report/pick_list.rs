// ==========================================
// 活体水族发货决策系统 - 仓库拣货清单
// ==========================================
// 职责: 可发货订单的普通商品按配送日汇总
// 红线: 活体/盆栽不进清单 (缸边现捞,不走仓库货架)
// ==========================================

use crate::domain::decision::ShippingDecision;
use crate::domain::types::DeliveryDay;
use crate::report::error::ReportResult;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

// ==========================================
// PickListEntry - 拣货条目
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct PickListEntry {
    pub delivery_day: DeliveryDay, // 配送日
    pub item_name: String,         // 商品名称
    pub total_quantity: i64,       // 跨订单合计数量
}

/// 汇总拣货清单
///
/// # 规则
/// - 仅统计可发货订单的普通商品行
/// - 同配送日同名商品数量合并
/// - 排序: 配送日槽位在前,同日按商品名升序
pub fn build_pick_list(decisions: &[ShippingDecision]) -> Vec<PickListEntry> {
    let mut totals: HashMap<(DeliveryDay, String), i64> = HashMap::new();

    for decision in decisions {
        let Some(day) = decision.assessment.chosen_day else {
            continue;
        };
        for line in decision.other_items() {
            *totals.entry((day, line.name.clone())).or_insert(0) += line.quantity;
        }
    }

    let mut entries: Vec<PickListEntry> = totals
        .into_iter()
        .map(|((delivery_day, item_name), total_quantity)| PickListEntry {
            delivery_day,
            item_name,
            total_quantity,
        })
        .collect();

    entries.sort_by(|a, b| {
        a.delivery_day
            .priority()
            .cmp(&b.delivery_day.priority())
            .then_with(|| a.item_name.cmp(&b.item_name))
    });
    entries
}

/// 写出拣货清单 CSV
pub fn write_csv(path: &Path, entries: &[PickListEntry]) -> ReportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["delivery_day", "item_name", "total_quantity"])?;
    for entry in entries {
        writer.write_record([
            entry.delivery_day.to_string(),
            entry.item_name.clone(),
            entry.total_quantity.to_string(),
        ])?;
    }
    writer.flush()?;
    info!(
        path = %path.display(),
        entries_count = entries.len(),
        "拣货清单已写出"
    );
    Ok(())
}
