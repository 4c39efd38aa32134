//! appstacks - 精选应用目录核心逻辑（加载、排序、筛选、相似推荐、中英双语文案）

// 导出全局错误类型
pub use self::error::{AppstacksError, AppsResult, APP_NOT_FOUND_MSG, CATALOGUE_UNAVAILABLE_MSG};

// 导出配置模块
pub use self::config::{CatalogueConfig, ConfigManager, CustomConfigBuilder};

// 导出目录模块核心接口
pub use self::catalogue::{
    AppId, AppItem, Category, Platform,
    HttpGet, HttpResponse, LocalFileFetcher, ReqwestFetcher,
    CatalogueLoader, CATALOGUE_PATH,
    sort_apps, parse_platform, filter_by_platform, parse_category, filter_by_category, filter_by_tag,
    collect_tags, find_similar, DEFAULT_SIMILAR_LIMIT, find_by_slug, require_by_slug,
};

// 导出国际化模块核心接口
pub use self::i18n::{
    Locale, DEFAULT_LOCALE, UiDictionary, is_locale, get_dictionary, get_dictionary_for_code, format_updated_at,
};

// 导出页面处理接口
pub use self::page::{
    LayoutData, PageMeta, HomePage, CategoryPage, DetailPage, TagPage, AboutPage,
    load_home, load_category, load_detail, load_tag, load_about,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod catalogue;
pub mod i18n;
pub mod page;
pub mod ui;
pub mod utils;
