// ==========================================
// 活体水族发货决策系统 - 批次编排器
// ==========================================
// 用途: 协调分类器与判定引擎,批量产出发货决策
// 红线: 同批次内同一目的地只查询一次外部服务
// ==========================================

use crate::config::ShippingConfigReader;
use crate::domain::decision::{ShippingDecision, WeatherAssessment};
use crate::domain::order::{CustomerOrder, Destination};
use crate::engine::classifier::ItemClassifier;
use crate::engine::eligibility::ShippingEligibilityEngine;
use crate::weather::{ForecastProvider, GeocodeProvider};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info};

// ==========================================
// ShippingOrchestrator - 批次编排器
// ==========================================

pub struct ShippingOrchestrator<G, F, C>
where
    G: GeocodeProvider,
    F: ForecastProvider,
    C: ShippingConfigReader,
{
    config: Arc<C>,
    engine: ShippingEligibilityEngine<G, F, C>,
}

impl<G, F, C> ShippingOrchestrator<G, F, C>
where
    G: GeocodeProvider,
    F: ForecastProvider,
    C: ShippingConfigReader,
{
    /// 创建编排器实例
    ///
    /// # 参数
    /// - geocoder: 地理编码协作方
    /// - forecast: 预报协作方
    /// - config: 配置读取器
    pub fn new(geocoder: Arc<G>, forecast: Arc<F>, config: Arc<C>) -> Self {
        Self {
            engine: ShippingEligibilityEngine::new(geocoder, forecast, config.clone()),
            config,
        }
    }

    /// 执行完整批次决策流程
    ///
    /// # 参数
    /// - orders: 合并后的客户订单列表 (每订单号一条)
    /// - now: 当前时刻 (决定候选配送日期)
    ///
    /// # 返回
    /// 发货决策列表,按选定配送日排序 (周三 → 周四 → 不可发货)
    pub async fn decide_batch(
        &self,
        orders: Vec<CustomerOrder>,
        now: NaiveDateTime,
    ) -> Result<Vec<ShippingDecision>, Box<dyn Error>> {
        info!(orders_count = orders.len(), now = %now, "开始执行批次决策流程");

        // ==========================================
        // 步骤1: 构建商品分类器
        // ==========================================
        debug!("步骤1: 构建商品分类器");

        let classifier = ItemClassifier::from_config(&*self.config).await?;

        // ==========================================
        // 步骤2: 逐目的地气象判定 (批内复用)
        // ==========================================
        debug!("步骤2: 执行逐目的地气象判定");

        let mut assessments: HashMap<Destination, WeatherAssessment> = HashMap::new();

        for order in &orders {
            if assessments.contains_key(&order.destination) {
                continue;
            }
            debug!(destination = %order.destination, "评估新目的地");
            let assessment = self
                .engine
                .evaluate_destination(&order.destination, now)
                .await?;
            assessments.insert(order.destination.clone(), assessment);
        }

        info!(
            destinations_count = assessments.len(),
            "逐目的地气象判定完成"
        );

        // ==========================================
        // 步骤3: 组装发货决策
        // ==========================================
        debug!("步骤3: 组装发货决策");

        let mut decisions: Vec<ShippingDecision> = Vec::with_capacity(orders.len());

        for order in orders {
            // 步骤2 已保证每个目的地均有判定
            let assessment = match assessments.get(&order.destination) {
                Some(assessment) => assessment.clone(),
                None => continue,
            };
            let lines = order
                .lines
                .iter()
                .map(|line| classifier.classify_line(line))
                .collect();

            decisions.push(ShippingDecision {
                order_id: order.order_id,
                customer_name: order.customer_name,
                destination: order.destination,
                assessment,
                lines,
            });
        }

        // ==========================================
        // 步骤4: 按选定配送日排序
        // ==========================================
        // 稳定排序,日内保持订单输入顺序
        decisions.sort_by_key(ShippingDecision::day_sort_key);

        let shippable_count = decisions.iter().filter(|d| d.assessment.can_ship).count();
        info!(
            decisions_count = decisions.len(),
            shippable_count,
            "批次决策流程完成"
        );

        Ok(decisions)
    }
}
