//! 目录数据模型定义
//! 仅存储应用数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 平台（封闭枚举，恰好四个取值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Web apps")]
    Web,
    #[serde(rename = "iOS apps")]
    Ios,
    #[serde(rename = "android apps")]
    Android,
    #[serde(rename = "desktop apps")]
    Desktop,
}

impl Platform {
    /// 规范顺序下的全部平台
    pub const ALL: [Platform; 4] = [Platform::Web, Platform::Ios, Platform::Android, Platform::Desktop];

    /// 与目录 JSON / 查询参数一致的取值
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "Web apps",
            Platform::Ios => "iOS apps",
            Platform::Android => "android apps",
            Platform::Desktop => "desktop apps",
        }
    }

    /// 精确匹配（区分大小写），不识别返回 None
    pub fn from_exact(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 应用唯一标识（JSON 中可为字符串或数字，统一按文本比较）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawAppId", into = "String")]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AppId> for String {
    fn from(id: AppId) -> Self {
        id.0
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAppId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawAppId> for AppId {
    fn from(raw: RawAppId) -> Self {
        match raw {
            RawAppId::Text(text) => Self(text),
            RawAppId::Number(number) => Self(number.to_string()),
        }
    }
}

/// 目录中的单个应用（只读快照）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppItem {
    pub id: AppId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub summary: String,
    // 可能包含轻量标记
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub platforms: Vec<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl AppItem {
    /// 快速创建（仅必填字段，其余取默认值）
    pub fn new(id: impl Into<AppId>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            logo: String::new(),
            summary: String::new(),
            description: String::new(),
            website: None,
            repo: None,
            tags: Vec::new(),
            platforms: Vec::new(),
            screenshots: None,
            weight: None,
            updated_at: None,
        }
    }

    /// 排序权重，缺失视为 0
    pub fn weight_or_zero(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    // ======== 构建辅助 ========
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = platforms.into_iter().collect();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }
}

impl fmt::Display for AppItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.slug)
    }
}

/// 列表视图的分类筛选
/// 「Mobile apps」是 iOS 与 Android 的并集，不属于平台枚举
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Platform(Platform),
    Mobile,
    /// 非平台取值：成员判断恒为假
    Unmatched(String),
}

impl Category {
    pub const MOBILE: &'static str = "Mobile apps";

    pub fn as_str(&self) -> &str {
        match self {
            Category::Platform(p) => p.as_str(),
            Category::Mobile => Self::MOBILE,
            Category::Unmatched(raw) => raw.as_str(),
        }
    }

    pub fn matches(&self, app: &AppItem) -> bool {
        match self {
            Category::Platform(p) => app.has_platform(*p),
            Category::Mobile => app.has_platform(Platform::Ios) || app.has_platform(Platform::Android),
            Category::Unmatched(_) => false,
        }
    }
}
