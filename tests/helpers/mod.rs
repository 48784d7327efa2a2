// ==========================================
// 集成测试共享辅助
// ==========================================
// 每个集成测试二进制独立编译本模块,只用到其中一部分

#![allow(dead_code)]

pub mod mock_config;
pub mod mock_weather;
pub mod test_data_builder;
