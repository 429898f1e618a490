use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// 检索词的解释方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// 按正则表达式解释（默认）
    #[default]
    Regex,
    /// 转义后按字面子串匹配
    Literal,
}

/// 书籍记录的格式校验策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// 不校验，缺失字段原样带入结果（默认）
    #[default]
    Lenient,
    /// 检索前校验所有书籍，遇到第一个不合格条目即报错
    Strict,
}

// SEARCH CONFIG
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub match_mode: MatchMode,
    pub schema_policy: SchemaPolicy,
}

impl SearchConfig {
    pub fn literal() -> Self {
        Self {
            match_mode: MatchMode::Literal,
            ..Self::default()
        }
    }

    pub fn strict() -> Self {
        Self {
            schema_policy: SchemaPolicy::Strict,
            ..Self::default()
        }
    }

    /// 从 JSON 读取配置，缺失的键取默认值
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        Ok(serde_json::from_str(json)?)
    }
}
