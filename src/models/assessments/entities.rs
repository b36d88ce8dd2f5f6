use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考核粒度：按队伍或按个人评分
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub enum Granularity {
    Team,       // 按队伍
    Individual, // 按个人
}

impl<'de> Deserialize<'de> for Granularity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "team" => Ok(Granularity::Team),
            "individual" => Ok(Granularity::Individual),
            _ => Err(serde::de::Error::custom(format!(
                "无效的考核粒度: '{s}'. 支持的粒度: team, individual"
            ))),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Team => write!(f, "team"),
            Granularity::Individual => write!(f, "individual"),
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team" => Ok(Granularity::Team),
            "individual" => Ok(Granularity::Individual),
            _ => Err(format!("Invalid granularity: {s}")),
        }
    }
}

/// 考核业务实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct Assessment {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub granularity: Granularity,
    pub is_released: bool,
    // 发布纪元计数，从 0 开始，每次发布递增
    pub current_release_number: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
