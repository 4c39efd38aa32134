//! 顶层布局数据：语言 + 文案

use serde::Serialize;

use crate::i18n::{get_dictionary, Locale, UiDictionary};

/// 页面 <head> 元信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// 布局数据，所有页面共享
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    pub site_title: &'static str,
    pub site_description: &'static str,
    pub locale: Locale,
    pub dictionary: &'static UiDictionary,
}

impl LayoutData {
    /// 根据 lang 查询参数构建布局数据（不识别时使用默认语言）
    pub fn load(lang_param: Option<&str>) -> Self {
        Self::for_locale(Locale::from_param(lang_param))
    }

    pub fn for_locale(locale: Locale) -> Self {
        let dictionary = get_dictionary(locale);
        Self {
            site_title: dictionary.site_title,
            site_description: dictionary.site_description,
            locale,
            dictionary,
        }
    }

    /// 「前缀 · 站点标题」形式的页面标题
    pub(crate) fn titled(&self, prefix: &str) -> String {
        format!("{} · {}", prefix, self.site_title)
    }
}
