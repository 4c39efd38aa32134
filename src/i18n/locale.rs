//! 界面语言（封闭枚举：en / zh）

use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// 默认语言
pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// 精确匹配语言代码，不识别返回 None
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        Self::ALL.into_iter().find(|l| l.code() == raw)
    }

    /// 解析 lang 查询参数，不识别时回退到默认语言
    pub fn from_param(raw: Option<&str>) -> Self {
        Self::parse(raw).unwrap_or(DEFAULT_LOCALE)
    }
}

/// 是否为受支持的语言代码
pub fn is_locale(raw: Option<&str>) -> bool {
    Locale::parse(raw).is_some()
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
