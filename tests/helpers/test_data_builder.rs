// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use aqua_shipping_dss::domain::decision::{
    DayAssessment, OrderLine, ShippingDecision, WeatherAssessment,
};
use aqua_shipping_dss::domain::order::{CustomerOrder, Destination, LineItem};
use aqua_shipping_dss::domain::types::{DeliveryDay, ItemCategory};
use chrono::NaiveDate;

// ==========================================
// CustomerOrder 构建器
// ==========================================

pub struct OrderBuilder {
    order_id: String,
    customer_name: String,
    city: String,
    province: String,
    lines: Vec<LineItem>,
}

impl OrderBuilder {
    pub fn new(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            customer_name: format!("Customer {}", order_id),
            city: "Calgary".to_string(),
            province: "AB".to_string(),
            lines: Vec::new(),
        }
    }

    pub fn customer(mut self, name: &str) -> Self {
        self.customer_name = name.to_string();
        self
    }

    pub fn destination(mut self, city: &str, province: &str) -> Self {
        self.city = city.to_string();
        self.province = province.to_string();
        self
    }

    pub fn line(mut self, quantity: i64, name: &str) -> Self {
        self.lines.push(LineItem::new(quantity, name));
        self
    }

    pub fn build(self) -> CustomerOrder {
        CustomerOrder {
            order_id: self.order_id,
            customer_name: self.customer_name,
            destination: Destination::new(self.city, self.province),
            lines: self.lines,
        }
    }
}

// ==========================================
// 决策记录构造
// ==========================================
// 固定测试日期: 2025-01-14 为周二,候选配送日为 01-15(周三) / 01-16(周四)

pub fn wednesday_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

pub fn thursday_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
}

/// 双日可配送评估,周三被选定
pub fn assessment_both_ok(wed_temp: f64, thu_temp: f64) -> WeatherAssessment {
    WeatherAssessment {
        can_ship: true,
        chosen_day: Some(DeliveryDay::Wed),
        reason: "Weather conditions acceptable for delivery".to_string(),
        wednesday: DayAssessment {
            day: DeliveryDay::Wed,
            delivery_date: wednesday_date(),
            mean_temp_c: Some(wed_temp),
            deliverable: true,
        },
        thursday: DayAssessment {
            day: DeliveryDay::Thu,
            delivery_date: thursday_date(),
            mean_temp_c: Some(thu_temp),
            deliverable: true,
        },
        extra_cold: wed_temp <= 0.0,
        needs_heatpack: wed_temp < 8.0,
    }
}

/// 仅周四可配送评估
pub fn assessment_thursday_only(wed_temp: f64, thu_temp: f64) -> WeatherAssessment {
    WeatherAssessment {
        can_ship: true,
        chosen_day: Some(DeliveryDay::Thu),
        reason: "Delivery possible on Thursday only".to_string(),
        wednesday: DayAssessment {
            day: DeliveryDay::Wed,
            delivery_date: wednesday_date(),
            mean_temp_c: Some(wed_temp),
            deliverable: false,
        },
        thursday: DayAssessment {
            day: DeliveryDay::Thu,
            delivery_date: thursday_date(),
            mean_temp_c: Some(thu_temp),
            deliverable: true,
        },
        extra_cold: thu_temp <= 0.0,
        needs_heatpack: thu_temp < 8.0,
    }
}

/// 双日均过冷评估
pub fn assessment_too_cold(wed_temp: f64, thu_temp: f64) -> WeatherAssessment {
    WeatherAssessment {
        can_ship: false,
        chosen_day: None,
        reason: "Temperature too low on both Wednesday and Thursday".to_string(),
        wednesday: DayAssessment {
            day: DeliveryDay::Wed,
            delivery_date: wednesday_date(),
            mean_temp_c: Some(wed_temp),
            deliverable: false,
        },
        thursday: DayAssessment {
            day: DeliveryDay::Thu,
            delivery_date: thursday_date(),
            mean_temp_c: Some(thu_temp),
            deliverable: false,
        },
        extra_cold: false,
        needs_heatpack: false,
    }
}

/// 构造已分类行项目
pub fn classified_line(quantity: i64, name: &str, category: ItemCategory) -> OrderLine {
    OrderLine {
        quantity,
        name: name.to_string(),
        category,
    }
}

/// 构造决策记录
pub fn decision(
    order_id: &str,
    customer_name: &str,
    city: &str,
    province: &str,
    assessment: WeatherAssessment,
    lines: Vec<OrderLine>,
) -> ShippingDecision {
    ShippingDecision {
        order_id: order_id.to_string(),
        customer_name: customer_name.to_string(),
        destination: Destination::new(city, province),
        assessment,
        lines,
    }
}
