// ==========================================
// 活体水族发货决策系统 - 批次汇总
// ==========================================
// 职责: 决策批次的控制台汇总统计
// ==========================================

use crate::domain::decision::ShippingDecision;
use std::fmt;

// ==========================================
// BatchSummary - 批次汇总
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total_orders: usize,        // 订单总数
    pub shippable: usize,           // 可发货订单数
    pub wednesday_deliveries: usize, // 周三可配送数 (双日可配送的订单两边都计)
    pub thursday_deliveries: usize,  // 周四可配送数
    pub extra_cold: usize,          // 需加强保温包装数
}

impl BatchSummary {
    /// 从决策列表统计
    pub fn from_decisions(decisions: &[ShippingDecision]) -> Self {
        let shippable_decisions = || decisions.iter().filter(|d| d.assessment.can_ship);
        Self {
            total_orders: decisions.len(),
            shippable: shippable_decisions().count(),
            wednesday_deliveries: shippable_decisions()
                .filter(|d| d.assessment.wednesday.deliverable)
                .count(),
            thursday_deliveries: shippable_decisions()
                .filter(|d| d.assessment.thursday.deliverable)
                .count(),
            extra_cold: shippable_decisions()
                .filter(|d| d.assessment.extra_cold)
                .count(),
        }
    }

    pub fn unshippable(&self) -> usize {
        self.total_orders - self.shippable
    }

    /// 可发货占比 (总数为零时为 0.0)
    pub fn shippable_pct(&self) -> f64 {
        percentage(self.shippable, self.total_orders)
    }

    pub fn unshippable_pct(&self) -> f64 {
        percentage(self.unshippable(), self.total_orders)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Shipping Decision Summary =====")?;
        writeln!(f, "Total orders: {}", self.total_orders)?;
        writeln!(
            f,
            "Shippable orders: {} ({:.1}% of total)",
            self.shippable,
            self.shippable_pct()
        )?;
        writeln!(f, "  - Wednesday deliveries: {}", self.wednesday_deliveries)?;
        writeln!(f, "  - Thursday deliveries: {}", self.thursday_deliveries)?;
        writeln!(f, "  - Extra-cold packaging: {}", self.extra_cold)?;
        write!(
            f,
            "Unshippable orders: {} ({:.1}% of total)",
            self.unshippable(),
            self.unshippable_pct()
        )
    }
}
