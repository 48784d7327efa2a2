// ==========================================
// 活体水族发货决策系统 - 订单行合并
// ==========================================
// 职责: 原始行 → 客户订单的合并规则,CSV 与平台来源共用
// 红线: 坏行只跳过并告警,绝不让整批导入失败
// ==========================================

use crate::domain::order::{CustomerOrder, Destination, LineItem, RawOrderRow};
use std::collections::HashMap;
use tracing::{debug, warn};

// 合并过程中的半成品订单
#[derive(Debug, Default)]
struct PendingOrder {
    customer_name: Option<String>,
    city: Option<String>,
    province: Option<String>,
    lines: Vec<LineItem>,
}

// ==========================================
// OrderMerger - 订单行合并器
// ==========================================
pub struct OrderMerger;

impl OrderMerger {
    /// 合并原始行为客户订单
    ///
    /// # 规则
    /// - 按订单号分组,保持首次出现顺序
    /// - 地址与收货人取组内首个非空值 (导出约定: 地址仅在订单首行)
    /// - 每行的行项目独立解析,数量非法或名称缺失时跳过该行项目
    /// - 无订单号的行跳过;合并后仍缺城市或省份的订单整单跳过
    pub fn merge_rows(rows: Vec<RawOrderRow>) -> Vec<CustomerOrder> {
        let total_rows = rows.len();
        let mut order_keys: Vec<String> = Vec::new();
        let mut pending: HashMap<String, PendingOrder> = HashMap::new();

        for (row_idx, row) in rows.into_iter().enumerate() {
            let order_id = match row.order_id.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => {
                    warn!(row = row_idx + 1, "行缺少订单号,跳过");
                    continue;
                }
            };

            let entry = pending.entry(order_id.clone()).or_insert_with(|| {
                order_keys.push(order_id.clone());
                PendingOrder::default()
            });

            // 首个非空地址/收货人生效
            fill_first(&mut entry.customer_name, row.customer_name);
            fill_first(&mut entry.city, row.city);
            fill_first(&mut entry.province, row.province);

            // 行项目解析
            match (non_empty(row.item_name), non_empty(row.quantity)) {
                (Some(name), Some(quantity_text)) => match quantity_text.parse::<i64>() {
                    Ok(quantity) => entry.lines.push(LineItem::new(quantity, name)),
                    Err(_) => {
                        warn!(
                            row = row_idx + 1,
                            order_id = %order_id,
                            quantity = %quantity_text,
                            "行项目数量非法,跳过该行项目"
                        );
                    }
                },
                (Some(name), None) => {
                    warn!(
                        row = row_idx + 1,
                        order_id = %order_id,
                        item = %name,
                        "行项目缺少数量,跳过该行项目"
                    );
                }
                (None, Some(_)) => {
                    warn!(
                        row = row_idx + 1,
                        order_id = %order_id,
                        "行项目缺少名称,跳过该行项目"
                    );
                }
                // 地址行 (无行项目字段) 不视为坏行
                (None, None) => {}
            }
        }

        // 按首次出现顺序产出,过滤地址不完整的订单
        let mut orders = Vec::with_capacity(order_keys.len());
        for order_id in order_keys {
            let Some(entry) = pending.remove(&order_id) else {
                continue;
            };
            let (Some(city), Some(province)) = (entry.city, entry.province) else {
                warn!(order_id = %order_id, "订单缺少收货城市或省份,整单跳过");
                continue;
            };
            orders.push(CustomerOrder {
                order_id,
                customer_name: entry.customer_name.unwrap_or_default(),
                destination: Destination::new(city, province),
                lines: entry.lines,
            });
        }

        debug!(
            total_rows,
            merged_orders = orders.len(),
            "订单行合并完成"
        );
        orders
    }
}

fn fill_first(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        if let Some(v) = non_empty(value) {
            *slot = Some(v);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
