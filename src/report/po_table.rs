// ==========================================
// 活体水族发货决策系统 - 采购建议表
// ==========================================
// 职责: 采购建议的控制台表格与 CSV 输出
// 红线: CSV 列名是输出契约,不得擅改
// ==========================================

use crate::domain::replenishment::PoRecommendation;
use crate::report::error::ReportResult;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

// CSV 列名
const PO_CSV_HEADER: [&str; 7] = [
    "item",
    "sales_last_2_weeks",
    "current_inventory",
    "incoming_inventory",
    "committed_quantity",
    "buffer_used",
    "recommended_order",
];

/// 渲染控制台表格 (列对齐)
pub fn render_table(recommendations: &[PoRecommendation]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<44} {:>15} {:>10} {:>9} {:>10} {:>7} {:>12}",
        "Item", "Sales (2 Weeks)", "Inventory", "Incoming", "Committed", "Buffer", "Recommended"
    );
    let _ = writeln!(out, "{}", "-".repeat(114));
    for rec in recommendations {
        let _ = writeln!(
            out,
            "{:<44} {:>15} {:>10} {:>9} {:>10} {:>7} {:>12}",
            rec.title,
            rec.sales_qty,
            rec.current_inventory,
            rec.incoming_inventory,
            rec.committed_qty,
            rec.buffer_label(),
            rec.recommended_qty
        );
    }
    out
}

/// 写出采购建议 CSV
pub fn write_csv(path: &Path, recommendations: &[PoRecommendation]) -> ReportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(PO_CSV_HEADER)?;
    for rec in recommendations {
        writer.write_record([
            rec.title.clone(),
            rec.sales_qty.to_string(),
            rec.current_inventory.to_string(),
            rec.incoming_inventory.to_string(),
            rec.committed_qty.to_string(),
            rec.buffer_label(),
            rec.recommended_qty.to_string(),
        ])?;
    }
    writer.flush()?;
    info!(
        path = %path.display(),
        rows_count = recommendations.len(),
        "采购建议表已写出"
    );
    Ok(())
}
