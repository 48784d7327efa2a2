// ==========================================
// 活体水族发货决策系统 - 决策实体
// ==========================================
// 职责: 单日评估、气象判定、发货决策记录
// 红线: 实体只承载结果,判定规则见 engine::eligibility_core
// ==========================================

use crate::domain::order::Destination;
use crate::domain::types::{DeliveryDay, ItemCategory};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 单日评估 (Day Assessment)
// ==========================================
// 每个候选配送日一条: 解析出的配送日期、营业时段均温、可配送标志
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAssessment {
    pub day: DeliveryDay,           // 候选槽位
    pub delivery_date: NaiveDate,   // 解析出的配送日期
    pub mean_temp_c: Option<f64>,   // 营业时段均温 (数据缺失时为 None)
    pub deliverable: bool,          // 均温存在且 >= 最低发货温度
}

impl DayAssessment {
    /// 数据缺失评估: 均温缺失,必然不可配送
    pub fn unavailable(day: DeliveryDay, delivery_date: NaiveDate) -> Self {
        Self {
            day,
            delivery_date,
            mean_temp_c: None,
            deliverable: false,
        }
    }
}

// ==========================================
// 气象判定 (Weather Assessment)
// ==========================================
// 决策中与订单身份无关的部分,同一目的地同批次内可复用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAssessment {
    // ===== 判定结果 =====
    pub can_ship: bool,                    // 任一候选日可配送
    pub chosen_day: Option<DeliveryDay>,   // 选定配送日 (槽位顺序取首个可配送日)
    pub reason: String,                    // 判定原因 (固定英文文案,输出契约)

    // ===== 逐日评估 =====
    pub wednesday: DayAssessment,
    pub thursday: DayAssessment,

    // ===== 包装提示 (v0.3 新增) =====
    pub extra_cold: bool,     // 选定日均温处于下限临界区间,需加强保温
    pub needs_heatpack: bool, // 选定日均温低于加热包阈值
}

impl WeatherAssessment {
    /// 外部查询失败时的终态判定: 双日不可配送、均温缺失、标志全假
    pub fn failed(
        wednesday: DayAssessment,
        thursday: DayAssessment,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            can_ship: false,
            chosen_day: None,
            reason: reason.into(),
            wednesday,
            thursday,
            extra_cold: false,
            needs_heatpack: false,
        }
    }

    /// 按槽位取评估
    pub fn assessment_for(&self, day: DeliveryDay) -> &DayAssessment {
        match day {
            DeliveryDay::Wed => &self.wednesday,
            DeliveryDay::Thu => &self.thursday,
        }
    }

    /// 选定日的评估 (未选定时为 None)
    pub fn chosen_assessment(&self) -> Option<&DayAssessment> {
        self.chosen_day.map(|d| self.assessment_for(d))
    }
}

// ==========================================
// 决策行项目 (Order Line)
// ==========================================
// (数量, 名称, 类别) 三元组,从决策到报告全程结构化传递
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub quantity: i64,          // 数量
    pub name: String,           // 商品名称
    pub category: ItemCategory, // 分类结果
}

impl OrderLine {
    /// 报告片段: "N x 商品名"
    pub fn display_fragment(&self) -> String {
        format!("{} x {}", self.quantity, self.name)
    }
}

// ==========================================
// 发货决策 (Shipping Decision)
// ==========================================
// 每个唯一订单号恰好一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingDecision {
    pub order_id: String,              // 订单号
    pub customer_name: String,         // 收货人
    pub destination: Destination,      // 目的地
    pub assessment: WeatherAssessment, // 气象判定
    pub lines: Vec<OrderLine>,         // 已分类行项目
}

impl ShippingDecision {
    /// 活体/盆栽行项目
    pub fn livestock_items(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines
            .iter()
            .filter(|l| l.category == ItemCategory::LivestockPotted)
    }

    /// 其他行项目 (仓库拣货对象)
    pub fn other_items(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines
            .iter()
            .filter(|l| l.category == ItemCategory::Other)
    }

    /// 活体/盆栽清单文案
    pub fn livestock_list(&self) -> String {
        Self::join_fragments(self.livestock_items())
    }

    /// 其他商品清单文案
    pub fn other_list(&self) -> String {
        Self::join_fragments(self.other_items())
    }

    /// 合并装箱清单文案: 活体在前,其他在后
    pub fn packing_list(&self) -> String {
        let mut fragments: Vec<String> = self
            .livestock_items()
            .map(OrderLine::display_fragment)
            .collect();
        fragments.extend(self.other_items().map(OrderLine::display_fragment));
        fragments.join(", ")
    }

    /// 报告排序次级键: 选定日优先级,无配送日排最后
    pub fn day_sort_key(&self) -> u8 {
        match self.assessment.chosen_day {
            Some(day) => day.priority(),
            None => 2,
        }
    }

    fn join_fragments<'a>(lines: impl Iterator<Item = &'a OrderLine>) -> String {
        lines
            .map(OrderLine::display_fragment)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
