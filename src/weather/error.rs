// ==========================================
// 活体水族发货决策系统 - 气象层错误
// ==========================================

use thiserror::Error;

// ==========================================
// 气象层错误类型
// ==========================================
// 地理编码与气温预报共用;引擎侧把这些错误吸收为终态判定
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("请求地址无效: {0}")]
    InvalidUrl(String),

    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("服务端返回异常状态 {status}: {context}")]
    BadStatus { status: u16, context: String },

    #[error("响应解析失败: {0}")]
    Parse(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type WeatherResult<T> = Result<T, WeatherError>;
