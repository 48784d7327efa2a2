// ==========================================
// 活体水族发货决策系统 - Eligibility Core 纯函数库
// ==========================================
// 职责: 候选配送日解析、营业时段均温、可配送判定、原因文案
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::decision::{DayAssessment, WeatherAssessment};
use crate::domain::forecast::ForecastSeries;
use crate::domain::types::DeliveryDay;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};

// ==========================================
// 判定原因文案 (输出契约,固定英文)
// ==========================================
pub const REASON_BOTH_DAYS_OK: &str = "Weather conditions acceptable for delivery";
pub const REASON_BOTH_DAYS_TOO_COLD: &str = "Temperature too low on both Wednesday and Thursday";
pub const REASON_LOCATION_NOT_FOUND: &str = "Location not found";
pub const REASON_WEATHER_UNAVAILABLE: &str = "Weather data unavailable";

// ==========================================
// EligibilityCore - 纯函数工具类
// ==========================================
pub struct EligibilityCore;

impl EligibilityCore {
    /// 计算距目标星期还有几天
    ///
    /// # 规则
    /// - days_until = (target - now.weekday()) mod 7
    /// - 若 days_until = 0 且当前小时 >= cutoff_hour → 顺延 7 天
    /// - 若 days_until = 0 且未到截单时刻 → 当天即为候选日
    ///
    /// # 参数
    /// - now: 当前本地时间
    /// - target: 目标星期
    /// - cutoff_hour: 当日截单小时(默认17)
    pub fn days_until_weekday(now: NaiveDateTime, target: Weekday, cutoff_hour: u32) -> i64 {
        let today_idx = now.weekday().num_days_from_monday() as i64;
        let target_idx = target.num_days_from_monday() as i64;
        let mut days_until = (target_idx - today_idx).rem_euclid(7);

        // 截单规则: 当天已过截单时刻,发往下一周期
        if days_until == 0 && now.hour() >= cutoff_hour {
            days_until = 7;
        }
        days_until
    }

    /// 解析候选配送日期
    ///
    /// # 规则
    /// - delivery_date = now.date + days_until_weekday
    /// - 结果必然落在 [now.date, now.date + 7] 区间内
    pub fn resolve_delivery_date(
        now: NaiveDateTime,
        target: Weekday,
        cutoff_hour: u32,
    ) -> NaiveDate {
        now.date() + Duration::days(Self::days_until_weekday(now, target, cutoff_hour))
    }

    /// 计算预报拉取窗口
    ///
    /// # 规则
    /// - 起点 = 今天,终点 = 最晚候选日期
    /// - 窗口必须可证明地覆盖全部候选日
    ///
    /// # 参数
    /// - today: 当前日期
    /// - candidates: 候选配送日期列表
    pub fn forecast_window(today: NaiveDate, candidates: &[NaiveDate]) -> (NaiveDate, NaiveDate) {
        let end = candidates.iter().copied().max().unwrap_or(today);
        (today, end)
    }

    /// 计算指定日期营业时段均温
    ///
    /// # 规则
    /// - 样本须为同一自然日(精确日期匹配)
    /// - 小时须落在 [start_hour, end_hour] 闭区间(默认 10..=17)
    /// - 子集为空 → None(日期超出预报范围或无匹配时段)
    ///
    /// # 返回
    /// - Option<f64>: 算术平均温度,无样本时为 None
    pub fn business_hours_mean(
        series: &ForecastSeries,
        date: NaiveDate,
        start_hour: u32,
        end_hour: u32,
    ) -> Option<f64> {
        let temps: Vec<f64> = series
            .samples
            .iter()
            .filter(|s| {
                let hour = s.timestamp.hour();
                s.timestamp.date() == date && hour >= start_hour && hour <= end_hour
            })
            .map(|s| s.temperature_c)
            .collect();

        if temps.is_empty() {
            None
        } else {
            Some(temps.iter().sum::<f64>() / temps.len() as f64)
        }
    }

    /// 可配送判定
    ///
    /// # 规则
    /// - 均温存在且 >= min_temp → 可配送(>= 为含等比较)
    /// - 均温缺失 → 不可配送
    pub fn is_deliverable(mean_temp_c: Option<f64>, min_temp: f64) -> bool {
        matches!(mean_temp_c, Some(m) if m >= min_temp)
    }

    /// 评估单个候选配送日
    pub fn assess_day(
        day: DeliveryDay,
        delivery_date: NaiveDate,
        series: &ForecastSeries,
        start_hour: u32,
        end_hour: u32,
        min_temp: f64,
    ) -> DayAssessment {
        let mean_temp_c = Self::business_hours_mean(series, delivery_date, start_hour, end_hour);
        DayAssessment {
            day,
            delivery_date,
            mean_temp_c,
            deliverable: Self::is_deliverable(mean_temp_c, min_temp),
        }
    }

    /// 选定配送日
    ///
    /// # 规则
    /// - 按槽位顺序取首个可配送日: 周三优先于周四
    /// - 双日均不可配送 → None
    pub fn select_delivery_day(
        wednesday: &DayAssessment,
        thursday: &DayAssessment,
    ) -> Option<DeliveryDay> {
        if wednesday.deliverable {
            Some(DeliveryDay::Wed)
        } else if thursday.deliverable {
            Some(DeliveryDay::Thu)
        } else {
            None
        }
    }

    /// 组装判定原因文案
    ///
    /// # 规则
    /// - 双日可配送 → "Weather conditions acceptable for delivery"
    /// - 仅单日可配送 → "Delivery possible on {Wednesday|Thursday} only"
    /// - 双日均不可 → "Temperature too low on both Wednesday and Thursday"
    pub fn build_reason(wednesday: &DayAssessment, thursday: &DayAssessment) -> String {
        match (wednesday.deliverable, thursday.deliverable) {
            (true, true) => REASON_BOTH_DAYS_OK.to_string(),
            (true, false) => format!("Delivery possible on {} only", DeliveryDay::Wed.full_name()),
            (false, true) => format!("Delivery possible on {} only", DeliveryDay::Thu.full_name()),
            (false, false) => REASON_BOTH_DAYS_TOO_COLD.to_string(),
        }
    }

    /// 临界低温判定 (v0.3 新增)
    ///
    /// # 规则
    /// - 选定日均温 ∈ [min_temp, extra_cold_max] 闭区间 → 需加强保温
    pub fn is_extra_cold(mean_temp_c: f64, min_temp: f64, extra_cold_max: f64) -> bool {
        mean_temp_c >= min_temp && mean_temp_c <= extra_cold_max
    }

    /// 加热包判定 (v0.3 新增)
    ///
    /// # 规则
    /// - 选定日均温 < heatpack_temp → 需加热包(严格小于)
    pub fn needs_heatpack(mean_temp_c: f64, heatpack_temp: f64) -> bool {
        mean_temp_c < heatpack_temp
    }

    /// 组装完整气象判定
    ///
    /// # 规则
    /// 1. can_ship = 周三可配送 ∨ 周四可配送
    /// 2. chosen_day = 槽位顺序首个可配送日
    /// 3. 包装提示仅依据选定日均温计算;无选定日时恒为 false
    pub fn assemble_assessment(
        wednesday: DayAssessment,
        thursday: DayAssessment,
        min_temp: f64,
        extra_cold_max: f64,
        heatpack_temp: f64,
    ) -> WeatherAssessment {
        let chosen_day = Self::select_delivery_day(&wednesday, &thursday);
        let reason = Self::build_reason(&wednesday, &thursday);
        let can_ship = wednesday.deliverable || thursday.deliverable;

        // 选定日必然有均温: deliverable 蕴含 mean_temp_c 存在
        let chosen_mean = chosen_day.and_then(|d| match d {
            DeliveryDay::Wed => wednesday.mean_temp_c,
            DeliveryDay::Thu => thursday.mean_temp_c,
        });

        let (extra_cold, needs_heatpack) = match chosen_mean {
            Some(mean) => (
                Self::is_extra_cold(mean, min_temp, extra_cold_max),
                Self::needs_heatpack(mean, heatpack_temp),
            ),
            None => (false, false),
        };

        WeatherAssessment {
            can_ship,
            chosen_day,
            reason,
            wednesday,
            thursday,
            extra_cold,
            needs_heatpack,
        }
    }
}
