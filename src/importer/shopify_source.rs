// ==========================================
// 活体水族发货决策系统 - 平台订单来源
// ==========================================
// 职责: 实时拉取平台订单,压平为原始行后走统一合并管线
// 红线: 与 CSV 来源共用 OrderMerger,合并语义保持一致
// ==========================================

use crate::domain::order::{CustomerOrder, RawOrderRow};
use crate::importer::error::ImportResult;
use crate::importer::order_merger::OrderMerger;
use crate::importer::order_source::OrderSource;
use crate::shopify::{ShopifyClient, ShopifyOrderDto};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

// ==========================================
// ShopifyOrderSource - 平台订单来源
// ==========================================
pub struct ShopifyOrderSource {
    client: Arc<ShopifyClient>,
    since: NaiveDate, // 拉取窗口起点 (created_at_min)
}

impl ShopifyOrderSource {
    /// 创建来源
    ///
    /// # 参数
    /// - client: 平台客户端
    /// - since: 订单拉取窗口起点
    pub fn new(client: Arc<ShopifyClient>, since: NaiveDate) -> Self {
        Self { client, since }
    }
}

/// 平台订单压平为原始行
///
/// # 规则
/// - 已取消 / 已退款订单不参与发货决策
/// - 每个数量大于零的行项目产出一行,地址字段随行重复
/// - 无行项目 (或行项目全部无效) 的订单产出一条纯地址行
fn flatten_orders(orders: Vec<ShopifyOrderDto>) -> Vec<RawOrderRow> {
    let mut rows = Vec::new();

    for order in orders {
        if !order.is_active() {
            continue;
        }
        let order_id = order.order_number();
        if order_id.is_empty() {
            warn!(platform_id = order.id, "平台订单缺少编号,跳过");
            continue;
        }

        let (customer_name, city, province) = match &order.shipping_address {
            Some(address) => (
                non_empty(&address.name),
                non_empty(&address.city),
                non_empty(&address.province),
            ),
            None => (None, None, None),
        };

        let base = RawOrderRow {
            order_id: Some(order_id),
            customer_name,
            city,
            province,
            item_name: None,
            quantity: None,
        };

        let mut emitted = false;
        for line in &order.line_items {
            if line.quantity <= 0 {
                continue;
            }
            rows.push(RawOrderRow {
                item_name: non_empty(&line.name),
                quantity: Some(line.quantity.to_string()),
                ..base.clone()
            });
            emitted = true;
        }

        // 行项目为空的订单仍保留地址行,让其进入决策 (装箱清单为空)
        if !emitted {
            rows.push(base);
        }
    }

    rows
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[async_trait]
impl OrderSource for ShopifyOrderSource {
    async fn fetch_orders(&self) -> ImportResult<Vec<CustomerOrder>> {
        let orders = self.client.fetch_orders_since(self.since).await?;
        info!(
            since = %self.since,
            orders_count = orders.len(),
            "平台订单拉取完成"
        );
        Ok(OrderMerger::merge_rows(flatten_orders(orders)))
    }

    fn label(&self) -> &'static str {
        "shopify"
    }
}
