// ==========================================
// 活体水族发货决策系统 - 引擎层
// ==========================================
// 职责: 实现业务判定规则,不做 I/O
// 红线: 判定必须输出 reason;外部服务失败吸收为终态,不中断批次
// ==========================================

pub mod classifier;
pub mod eligibility;
pub mod eligibility_core;
pub mod orchestrator;
pub mod replenishment;

// 重导出核心引擎
pub use classifier::ItemClassifier;
pub use eligibility::ShippingEligibilityEngine;
pub use eligibility_core::EligibilityCore;
pub use orchestrator::ShippingOrchestrator;
pub use replenishment::{ReplenishmentCore, ReplenishmentEngine, VendorCatalogSource};
