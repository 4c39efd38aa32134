//! 页面级处理：解析查询参数 → 加载目录 → 组合排序/筛选/聚合结果 + 文案
//! 目录加载失败为 500 类错误，按 slug 查不到为 404 类错误（见 AppstacksError::status_code）
pub mod layout;
pub mod listing;
pub mod detail;
pub mod tag;
pub mod about;

pub use self::layout::{LayoutData, PageMeta};
pub use self::listing::{load_category, load_home, CategoryPage, HomePage};
pub use self::detail::{load_detail, DetailPage};
pub use self::tag::{load_tag, TagPage};
pub use self::about::{load_about, AboutPage};
