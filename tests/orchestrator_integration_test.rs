// ==========================================
// 发货决策编排集成测试
// ==========================================
// 测试范围: 订单批次 → ShippingOrchestrator → 决策输出
// 场景: 多目的地批次、目的地级复用、配送日排序、分类流转
// ==========================================

mod helpers;

use aqua_shipping_dss::domain::forecast::Coordinate;
use aqua_shipping_dss::domain::order::Destination;
use aqua_shipping_dss::domain::types::{DeliveryDay, ItemCategory};
use aqua_shipping_dss::engine::ShippingOrchestrator;
use aqua_shipping_dss::logging;
use chrono::{NaiveDate, NaiveDateTime};
use helpers::mock_config::MockShippingConfig;
use helpers::mock_weather::{CountingGeocoder, ScriptedForecast};
use helpers::test_data_builder::OrderBuilder;
use std::sync::Arc;

// ==========================================
// 测试辅助函数
// ==========================================

/// 固定批次时刻: 2025-01-14 周二上午,候选配送日 01-15(周三) / 01-16(周四)
fn tuesday_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 14)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn calgary() -> (Destination, Coordinate) {
    (Destination::new("Calgary", "AB"), Coordinate::new(51.05, -114.07))
}

fn toronto() -> (Destination, Coordinate) {
    (Destination::new("Toronto", "ON"), Coordinate::new(43.65, -79.38))
}

fn edmonton() -> (Destination, Coordinate) {
    (Destination::new("Edmonton", "AB"), Coordinate::new(53.55, -113.49))
}

fn orchestrator(
    geocoder: Arc<CountingGeocoder>,
    forecast: Arc<ScriptedForecast>,
) -> ShippingOrchestrator<CountingGeocoder, ScriptedForecast, MockShippingConfig> {
    ShippingOrchestrator::new(geocoder, forecast, Arc::new(MockShippingConfig::default()))
}

// ==========================================
// 场景1: 基准批次与目的地级复用
// ==========================================

#[tokio::test]
async fn test_batch_reuses_destination_assessment() {
    logging::init_test();

    let (calgary_dest, calgary_coord) = calgary();
    let (toronto_dest, toronto_coord) = toronto();

    let geocoder = Arc::new(CountingGeocoder::new(vec![
        (calgary_dest, calgary_coord),
        (toronto_dest, toronto_coord),
    ]));
    let forecast = Arc::new(ScriptedForecast::new(vec![
        (calgary_coord, 5.0),
        (toronto_coord, -10.0),
    ]));

    let orders = vec![
        OrderBuilder::new("1001")
            .line(2, "Blue Dream Neocaridina (10 Pack)")
            .build(),
        OrderBuilder::new("1002")
            .line(1, "Sponge Filter")
            .build(),
        OrderBuilder::new("1003")
            .destination("Toronto", "ON")
            .line(1, "Assorted Shrimp Pack")
            .build(),
    ];

    let engine = orchestrator(Arc::clone(&geocoder), forecast);
    let decisions = engine
        .decide_batch(orders, tuesday_morning())
        .await
        .unwrap();

    assert_eq!(decisions.len(), 3);
    // 两个 Calgary 订单复用同一次解析
    assert_eq!(geocoder.resolve_calls(), 2);

    let calgary_decision = decisions
        .iter()
        .find(|d| d.order_id == "1001")
        .unwrap();
    assert!(calgary_decision.assessment.can_ship);
    assert_eq!(calgary_decision.assessment.chosen_day, Some(DeliveryDay::Wed));
    assert_eq!(
        calgary_decision.assessment.reason,
        "Weather conditions acceptable for delivery"
    );
    assert_eq!(
        calgary_decision.assessment.wednesday.mean_temp_c,
        Some(5.0)
    );
    assert!(calgary_decision.assessment.needs_heatpack);
    assert!(!calgary_decision.assessment.extra_cold);

    let toronto_decision = decisions
        .iter()
        .find(|d| d.order_id == "1003")
        .unwrap();
    assert!(!toronto_decision.assessment.can_ship);
    assert_eq!(
        toronto_decision.assessment.reason,
        "Temperature too low on both Wednesday and Thursday"
    );
    assert_eq!(
        toronto_decision.assessment.thursday.mean_temp_c,
        Some(-10.0)
    );
}

// ==========================================
// 场景2: 按配送日排序
// ==========================================

#[tokio::test]
async fn test_decisions_sorted_by_delivery_day() {
    logging::init_test();

    let (calgary_dest, calgary_coord) = calgary();
    let (toronto_dest, toronto_coord) = toronto();
    let (edmonton_dest, edmonton_coord) = edmonton();

    let geocoder = Arc::new(CountingGeocoder::new(vec![
        (calgary_dest, calgary_coord),
        (toronto_dest, toronto_coord),
        (edmonton_dest, edmonton_coord),
    ]));
    // Calgary 双日可配送; Edmonton 周三过冷、周四回暖; Toronto 双日过冷
    let forecast = Arc::new(
        ScriptedForecast::new(vec![(calgary_coord, 6.0), (toronto_coord, -15.0)])
            .day_temp(edmonton_coord, date(2025, 1, 15), -10.0)
            .day_temp(edmonton_coord, date(2025, 1, 16), 4.0),
    );

    // 刻意按 无配送日 → 周四 → 周三 的顺序投入
    let orders = vec![
        OrderBuilder::new("2001")
            .destination("Toronto", "ON")
            .line(1, "Java Fern")
            .build(),
        OrderBuilder::new("2002")
            .destination("Edmonton", "AB")
            .line(1, "Java Fern")
            .build(),
        OrderBuilder::new("2003")
            .line(1, "Java Fern")
            .build(),
    ];

    let engine = orchestrator(geocoder, forecast);
    let decisions = engine
        .decide_batch(orders, tuesday_morning())
        .await
        .unwrap();

    let ids: Vec<&str> = decisions.iter().map(|d| d.order_id.as_str()).collect();
    assert_eq!(ids, vec!["2003", "2002", "2001"]);

    let edmonton_decision = &decisions[1];
    assert_eq!(edmonton_decision.assessment.chosen_day, Some(DeliveryDay::Thu));
    assert_eq!(
        edmonton_decision.assessment.reason,
        "Delivery possible on Thursday only"
    );
    assert_eq!(
        edmonton_decision.assessment.wednesday.mean_temp_c,
        Some(-10.0)
    );
    assert_eq!(
        edmonton_decision.assessment.thursday.mean_temp_c,
        Some(4.0)
    );
}

// ==========================================
// 场景3: 未知目的地
// ==========================================

#[tokio::test]
async fn test_unknown_destination_location_not_found() {
    logging::init_test();

    let geocoder = Arc::new(CountingGeocoder::new(vec![]));
    let forecast = Arc::new(ScriptedForecast::new(vec![]));

    let orders = vec![
        OrderBuilder::new("3001")
            .destination("Atlantis", "XX")
            .line(3, "Assorted Shrimp Pack")
            .build(),
    ];

    let engine = orchestrator(geocoder, forecast);
    let decisions = engine
        .decide_batch(orders, tuesday_morning())
        .await
        .unwrap();

    assert_eq!(decisions.len(), 1);
    let decision = &decisions[0];
    assert!(!decision.assessment.can_ship);
    assert_eq!(decision.assessment.reason, "Location not found");
    // 配送日期仍按当前时刻解析,仅气温缺失
    assert_eq!(
        decision.assessment.wednesday.delivery_date,
        date(2025, 1, 15)
    );
    assert!(decision.assessment.wednesday.mean_temp_c.is_none());
    // 行项目分类不受气象失败影响
    assert_eq!(decision.lines.len(), 1);
    assert_eq!(decision.lines[0].category, ItemCategory::LivestockPotted);
}

// ==========================================
// 场景4: 分类结果流转到决策
// ==========================================

#[tokio::test]
async fn test_line_classification_flows_to_decision() {
    logging::init_test();

    let (calgary_dest, calgary_coord) = calgary();
    let geocoder = Arc::new(CountingGeocoder::new(vec![(calgary_dest, calgary_coord)]));
    let forecast = Arc::new(ScriptedForecast::new(vec![(calgary_coord, 10.0)]));

    let orders = vec![
        OrderBuilder::new("4001")
            .line(2, "Blue Dream Neocaridina (10 Pack)")
            .line(1, "Sponge Filter")
            .line(1, "ShrimpSafe Net")
            .build(),
    ];

    let engine = orchestrator(geocoder, forecast);
    let decisions = engine
        .decide_batch(orders, tuesday_morning())
        .await
        .unwrap();

    let decision = &decisions[0];
    assert_eq!(
        decision.livestock_list(),
        "2 x Blue Dream Neocaridina (10 Pack)"
    );
    // 排除词优先: ShrimpSafe 虽含 shrimp 词根仍归其他
    assert_eq!(decision.other_list(), "1 x Sponge Filter, 1 x ShrimpSafe Net");
    assert!(!decision.assessment.needs_heatpack);
}

// ==========================================
// 场景5: 截单后的窗口滚动
// ==========================================

#[tokio::test]
async fn test_cutoff_rolls_wednesday_to_next_week() {
    logging::init_test();

    let (calgary_dest, calgary_coord) = calgary();
    let geocoder = Arc::new(CountingGeocoder::new(vec![(calgary_dest, calgary_coord)]));
    let forecast = Arc::new(ScriptedForecast::new(vec![(calgary_coord, 5.0)]));

    // 周三 18:00 已过截单: 周三槽位滚动到下周,周四槽位仍是明天
    let wednesday_evening = date(2025, 1, 15).and_hms_opt(18, 0, 0).unwrap();

    let orders = vec![OrderBuilder::new("5001").line(1, "Java Fern").build()];

    let engine = orchestrator(geocoder, forecast);
    let decisions = engine
        .decide_batch(orders, wednesday_evening)
        .await
        .unwrap();

    let assessment = &decisions[0].assessment;
    assert_eq!(assessment.wednesday.delivery_date, date(2025, 1, 22));
    assert_eq!(assessment.thursday.delivery_date, date(2025, 1, 16));
    // 槽位优先序不随日期先后变化
    assert_eq!(assessment.chosen_day, Some(DeliveryDay::Wed));
}

// ==========================================
// 场景6: 临界低温标志
// ==========================================

#[tokio::test]
async fn test_extra_cold_boundary_flags() {
    logging::init_test();

    let (calgary_dest, calgary_coord) = calgary();
    let geocoder = Arc::new(CountingGeocoder::new(vec![(calgary_dest, calgary_coord)]));
    // -1.0°C: 达到最低发货温度,但处于临界保温区间
    let forecast = Arc::new(ScriptedForecast::new(vec![(calgary_coord, -1.0)]));

    let orders = vec![OrderBuilder::new("6001").line(1, "Java Fern").build()];

    let engine = orchestrator(geocoder, forecast);
    let decisions = engine
        .decide_batch(orders, tuesday_morning())
        .await
        .unwrap();

    let assessment = &decisions[0].assessment;
    assert!(assessment.can_ship);
    assert_eq!(assessment.chosen_day, Some(DeliveryDay::Wed));
    assert!(assessment.extra_cold);
    assert!(assessment.needs_heatpack);
}

// ==========================================
// 场景7: 空批次
// ==========================================

#[tokio::test]
async fn test_empty_batch_produces_no_decisions() {
    logging::init_test();

    let geocoder = Arc::new(CountingGeocoder::new(vec![]));
    let forecast = Arc::new(ScriptedForecast::new(vec![]));

    let engine = orchestrator(Arc::clone(&geocoder), forecast);
    let decisions = engine
        .decide_batch(Vec::new(), tuesday_morning())
        .await
        .unwrap();

    assert!(decisions.is_empty());
    assert_eq!(geocoder.resolve_calls(), 0);
}

// ==========================================
// 场景8: 坐标命中但无气温数据
// ==========================================

#[tokio::test]
async fn test_missing_forecast_weather_data_unavailable() {
    logging::init_test();

    let (calgary_dest, calgary_coord) = calgary();
    let geocoder = Arc::new(CountingGeocoder::new(vec![(calgary_dest, calgary_coord)]));
    // 预报源对该坐标无任何样本,返回空序列
    let forecast = Arc::new(ScriptedForecast::new(vec![]));

    let orders = vec![
        OrderBuilder::new("8001")
            .line(2, "Assorted Shrimp Pack")
            .build(),
    ];

    let engine = orchestrator(geocoder, forecast);
    let decisions = engine
        .decide_batch(orders, tuesday_morning())
        .await
        .unwrap();

    assert_eq!(decisions.len(), 1);
    let assessment = &decisions[0].assessment;
    assert!(!assessment.can_ship);
    assert_eq!(assessment.reason, "Weather data unavailable");
    assert!(assessment.wednesday.mean_temp_c.is_none());
    assert!(assessment.thursday.mean_temp_c.is_none());
    // 配送日期仍已解析,便于人工复核
    assert_eq!(assessment.wednesday.delivery_date, date(2025, 1, 15));
}
