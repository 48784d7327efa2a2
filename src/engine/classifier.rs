// ==========================================
// 活体水族发货决策系统 - 商品分类器
// ==========================================
// 职责: 按关键词将行项目分入 活体/盆栽 或 其他
// 红线: 关键词来自配置,匹配规则本身不随配置变化
// ==========================================

use crate::config::ShippingConfigReader;
use crate::domain::decision::OrderLine;
use crate::domain::order::LineItem;
use crate::domain::types::ItemCategory;
use std::error::Error;

// ==========================================
// ItemClassifier - 关键词分类器
// ==========================================
// 匹配规则: 名称小写后做子串匹配
// 1. 命中任一排除关键词 → Other(排除词强制覆盖)
// 2. 命中任一识别关键词 → LivestockPotted
// 3. 否则 → Other
#[derive(Debug, Clone)]
pub struct ItemClassifier {
    keywords: Vec<String>,   // 识别关键词(已小写)
    exclusions: Vec<String>, // 排除关键词(已小写)
}

impl ItemClassifier {
    /// 直接由关键词列表构建,构建时统一转小写
    pub fn new(keywords: Vec<String>, exclusions: Vec<String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            exclusions: exclusions.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// 从配置读取关键词构建
    pub async fn from_config<C: ShippingConfigReader>(
        config: &C,
    ) -> Result<Self, Box<dyn Error>> {
        let keywords = config.get_livestock_keywords().await?;
        let exclusions = config.get_exclusion_keywords().await?;
        Ok(Self::new(keywords, exclusions))
    }

    /// 分类单个商品名称
    pub fn classify(&self, item_name: &str) -> ItemCategory {
        let name_lower = item_name.to_lowercase();

        // 排除词优先: 器材名称含有机体词根时强制归入其他
        if self.exclusions.iter().any(|k| name_lower.contains(k)) {
            return ItemCategory::Other;
        }
        if self.keywords.iter().any(|k| name_lower.contains(k)) {
            return ItemCategory::LivestockPotted;
        }
        ItemCategory::Other
    }

    /// 为行项目附加分类结果
    pub fn classify_line(&self, line: &LineItem) -> OrderLine {
        OrderLine {
            quantity: line.quantity,
            name: line.name.clone(),
            category: self.classify(&line.name),
        }
    }
}
