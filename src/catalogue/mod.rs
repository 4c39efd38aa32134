//! 目录模块：数据模型、拉取、排序、筛选、标签聚合、相似推荐、查找
pub mod model;
pub mod fetcher;
pub mod loader;
pub mod sorter;
pub mod filter;
pub mod tags;
pub mod similar;
pub mod lookup;

// 导出核心接口
pub use self::model::{AppId, AppItem, Category, Platform};
pub use self::fetcher::{HttpGet, HttpResponse, LocalFileFetcher, ReqwestFetcher};
pub use self::loader::{CatalogueLoader, CATALOGUE_PATH};
pub use self::sorter::sort_apps;
pub use self::filter::{filter_by_category, filter_by_platform, filter_by_tag, parse_category, parse_platform};
pub use self::tags::collect_tags;
pub use self::similar::{find_similar, DEFAULT_SIMILAR_LIMIT};
pub use self::lookup::{find_by_slug, require_by_slug};
