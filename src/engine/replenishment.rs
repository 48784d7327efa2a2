// ==========================================
// 活体水族发货决策系统 - 采购建议引擎
// ==========================================
// 红线: 建议量永不为负;目录为空时返回空列表,不报错
// ==========================================
// 职责: 单一供应商的采购量建议
// 公式: 建议量 = max(0, 销量 x 缓冲系数 - 可用库存)
//       可用库存 = 当前库存 + 采购在途 - 未履约占用
// ==========================================

use crate::config::ShippingConfigReader;
use crate::domain::replenishment::{PoRecommendation, VendorProduct};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument};

// ==========================================
// VendorCatalogSource - 供应商目录数据源
// ==========================================
// 引擎侧接口,由电商平台适配层实现
// 聚合值均以平台商品 ID 为键;缺失键按 0 处理
#[async_trait]
pub trait VendorCatalogSource: Send + Sync {
    /// 指定供应商的在售商品
    async fn fetch_vendor_products(
        &self,
        vendor: &str,
    ) -> Result<Vec<VendorProduct>, Box<dyn Error>>;

    /// 每商品当前库存 (各仓合计)
    async fn fetch_inventory_totals(
        &self,
        products: &[VendorProduct],
    ) -> Result<HashMap<i64, i64>, Box<dyn Error>>;

    /// 每商品未履约占用量
    async fn fetch_committed_quantities(
        &self,
        products: &[VendorProduct],
    ) -> Result<HashMap<i64, i64>, Box<dyn Error>>;

    /// 每商品窗口期销量 (since 起,含当日)
    async fn fetch_sales_quantities(
        &self,
        products: &[VendorProduct],
        since: NaiveDate,
    ) -> Result<HashMap<i64, i64>, Box<dyn Error>>;

    /// 每商品采购在途量
    async fn fetch_incoming_quantities(
        &self,
        products: &[VendorProduct],
    ) -> Result<HashMap<i64, i64>, Box<dyn Error>>;
}

// ==========================================
// ReplenishmentCore - 采购建议纯函数
// ==========================================
// 红线: 纯函数,不做任何 I/O
pub struct ReplenishmentCore;

impl ReplenishmentCore {
    /// 选择缓冲系数
    ///
    /// # 规则
    /// - 窗口期销量 >= 高销量阈值 → 高缓冲系数
    /// - 否则 → 低缓冲系数
    ///
    /// # 默认值
    /// - 阈值 10 件,高缓冲 1.2 (20%),低缓冲 1.15 (15%)
    pub fn buffer_factor(
        sales_qty: i64,
        high_threshold: i64,
        high_buffer: f64,
        low_buffer: f64,
    ) -> f64 {
        if sales_qty >= high_threshold {
            high_buffer
        } else {
            low_buffer
        }
    }

    /// 计算建议采购量
    ///
    /// # 规则
    /// - 可用库存 = 当前库存 + 采购在途 - 未履约占用
    /// - 需求量 = 销量 x 缓冲系数 - 可用库存 (可用为负时等于缺口 + 预期销量)
    /// - 建议量 = max(0, 需求量四舍五入)
    pub fn recommended_quantity(
        sales_qty: i64,
        current: i64,
        incoming: i64,
        committed: i64,
        buffer: f64,
    ) -> i64 {
        let available = current + incoming - committed;
        let needed = sales_qty as f64 * buffer - available as f64;
        if needed <= 0.0 {
            0
        } else {
            needed.round() as i64
        }
    }

    /// 组装单商品采购建议
    #[allow(clippy::too_many_arguments)]
    pub fn build_recommendation(
        product: &VendorProduct,
        sales_qty: i64,
        current: i64,
        incoming: i64,
        committed: i64,
        high_threshold: i64,
        high_buffer: f64,
        low_buffer: f64,
    ) -> PoRecommendation {
        let buffer = Self::buffer_factor(sales_qty, high_threshold, high_buffer, low_buffer);
        PoRecommendation {
            product_id: product.product_id,
            title: product.title.clone(),
            sales_qty,
            current_inventory: current,
            incoming_inventory: incoming,
            committed_qty: committed,
            buffer_factor: buffer,
            recommended_qty: Self::recommended_quantity(
                sales_qty, current, incoming, committed, buffer,
            ),
        }
    }
}

// ==========================================
// ReplenishmentEngine - 采购建议引擎
// ==========================================

pub struct ReplenishmentEngine<S, C>
where
    S: VendorCatalogSource,
    C: ShippingConfigReader,
{
    source: Arc<S>,
    config: Arc<C>,
}

impl<S, C> ReplenishmentEngine<S, C>
where
    S: VendorCatalogSource,
    C: ShippingConfigReader,
{
    /// 创建引擎实例
    ///
    /// # 参数
    /// - source: 供应商目录数据源
    /// - config: 配置读取器
    pub fn new(source: Arc<S>, config: Arc<C>) -> Self {
        Self { source, config }
    }

    /// 生成供应商采购建议
    ///
    /// # 参数
    /// - today: 当前日期 (销量窗口末端,含当日)
    ///
    /// # 返回
    /// 采购建议列表,按建议量降序 (同量保持目录顺序)
    #[instrument(skip(self))]
    pub async fn generate(&self, today: NaiveDate) -> Result<Vec<PoRecommendation>, Box<dyn Error>> {
        // === 步骤 1: 读取配置 ===
        let vendor = self.config.get_vendor_name().await?;
        let window_days = self.config.get_sales_window_days().await?;
        let high_threshold = self.config.get_high_sales_threshold().await?;
        let high_buffer = self.config.get_high_sales_buffer().await?;
        let low_buffer = self.config.get_low_sales_buffer().await?;

        info!(vendor = %vendor, window_days, "开始生成采购建议");

        // === 步骤 2: 拉取供应商商品目录 ===
        let products = self.source.fetch_vendor_products(&vendor).await?;
        if products.is_empty() {
            info!(vendor = %vendor, "供应商无在售商品,返回空建议");
            return Ok(Vec::new());
        }
        debug!(products_count = products.len(), "目录拉取完成");

        // === 步骤 3: 拉取库存 / 占用 / 在途 / 销量 ===
        // 窗口含当日: 起点 = 当日 - (窗口天数 - 1)
        let since = today - Duration::days(window_days - 1);

        let inventory = self.source.fetch_inventory_totals(&products).await?;
        let committed = self.source.fetch_committed_quantities(&products).await?;
        let incoming = self.source.fetch_incoming_quantities(&products).await?;
        let sales = self.source.fetch_sales_quantities(&products, since).await?;

        // === 步骤 4: 逐商品组装建议 ===
        let mut recommendations: Vec<PoRecommendation> = products
            .iter()
            .map(|product| {
                let id = product.product_id;
                ReplenishmentCore::build_recommendation(
                    product,
                    sales.get(&id).copied().unwrap_or(0),
                    inventory.get(&id).copied().unwrap_or(0),
                    incoming.get(&id).copied().unwrap_or(0),
                    committed.get(&id).copied().unwrap_or(0),
                    high_threshold,
                    high_buffer,
                    low_buffer,
                )
            })
            .collect();

        // === 步骤 5: 按建议量降序 ===
        // 稳定排序,同量商品保持目录顺序
        recommendations.sort_by(|a, b| b.recommended_qty.cmp(&a.recommended_qty));

        let to_order_count = recommendations
            .iter()
            .filter(|r| r.recommended_qty > 0)
            .count();
        info!(
            recommendations_count = recommendations.len(),
            to_order_count, "采购建议生成完成"
        );

        Ok(recommendations)
    }
}
