//! 界面文案字典
//! 每种语言一份完整的静态文案表，运行期只读

use serde::Serialize;
use tracing::warn;

use super::locale::Locale;
use super::{en, zh};
use crate::catalogue::Platform;

/// 完整界面文案
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiDictionary {
    pub locale: Locale,
    pub site_title: &'static str,
    pub site_description: &'static str,
    pub tagline: &'static str,
    pub nav: NavText,
    pub sidebar: SidebarText,
    pub card: CardText,
    pub list: ListText,
    pub detail: DetailText,
    pub tags_page: TagsPageText,
    pub about_page: AboutPageText,
    pub platform_labels: PlatformLabels,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavText {
    pub menu: &'static str,
    pub close_menu: &'static str,
    pub about: &'static str,
    pub rss: &'static str,
    pub rss_description: &'static str,
    pub bookmark: &'static str,
    pub bookmark_description: &'static str,
    pub bookmark_notice: &'static str,
    pub bookmark_fallback: &'static str,
    pub theme_toggle: &'static str,
    pub language: &'static str,
    pub language_names: LanguageNames,
    pub skip_to_content: &'static str,
}

/// 语言选择器中的语言名称
#[derive(Debug, Clone, Serialize)]
pub struct LanguageNames {
    pub en: &'static str,
    pub zh: &'static str,
}

impl LanguageNames {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarText {
    pub title: &'static str,
    pub filters_heading: &'static str,
    pub links_heading: &'static str,
    pub platform_filters: PlatformFilters,
    pub about: &'static str,
    pub github: &'static str,
}

/// 侧栏平台筛选项（「全部」+ 四个平台）
#[derive(Debug, Clone, Serialize)]
pub struct PlatformFilters {
    pub all: &'static str,
    #[serde(flatten)]
    pub platforms: PlatformLabels,
}

impl PlatformFilters {
    /// None 表示「全部」
    pub fn get(&self, platform: Option<Platform>) -> &'static str {
        platform.map_or(self.all, |p| self.platforms.get(p))
    }
}

/// 按平台取值的文案表
#[derive(Debug, Clone, Serialize)]
pub struct PlatformLabels {
    #[serde(rename = "Web apps")]
    pub web: &'static str,
    #[serde(rename = "iOS apps")]
    pub ios: &'static str,
    #[serde(rename = "android apps")]
    pub android: &'static str,
    #[serde(rename = "desktop apps")]
    pub desktop: &'static str,
}

impl PlatformLabels {
    pub fn get(&self, platform: Platform) -> &'static str {
        match platform {
            Platform::Web => self.web,
            Platform::Ios => self.ios,
            Platform::Android => self.android,
            Platform::Desktop => self.desktop,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardText {
    pub open_detail: &'static str,
    pub website: &'static str,
    pub repository: &'static str,
    pub updated_prefix: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListText {
    pub empty: &'static str,
    pub count_label: &'static str,
    pub filtered_by: &'static str,
    pub all_platforms: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailText {
    pub summary: &'static str,
    pub platforms: &'static str,
    pub tags: &'static str,
    pub website: &'static str,
    pub repo: &'static str,
    pub similar: &'static str,
    pub similar_empty: &'static str,
    pub share: &'static str,
    pub share_copy: &'static str,
    pub share_copied: &'static str,
    pub share_failed: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagsPageText {
    pub heading: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPageText {
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [AboutSection],
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

/// 获取指定语言的文案
pub fn get_dictionary(locale: Locale) -> &'static UiDictionary {
    match locale {
        Locale::En => &en::DICTIONARY,
        Locale::Zh => &zh::DICTIONARY,
    }
}

/// 按原始语言代码获取文案，不识别时回退到 en
pub fn get_dictionary_for_code(code: &str) -> &'static UiDictionary {
    match Locale::parse(Some(code)) {
        Some(locale) => get_dictionary(locale),
        None => {
            warn!("未知语言代码 {}，回退到 en", code);
            &en::DICTIONARY
        }
    }
}
