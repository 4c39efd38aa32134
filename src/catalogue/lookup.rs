//! 按 slug 查找单个应用

use super::model::AppItem;
use crate::error::{AppsResult, AppstacksError};

/// 线性查找第一个 slug 完全相等的应用；不存在返回 None
pub fn find_by_slug<'a>(items: &'a [AppItem], slug: &str) -> Option<&'a AppItem> {
    items.iter().find(|app| app.slug == slug)
}

/// 页面边界使用：不存在时返回 NotFound
pub fn require_by_slug<'a>(items: &'a [AppItem], slug: &str) -> AppsResult<&'a AppItem> {
    find_by_slug(items, slug).ok_or_else(AppstacksError::app_not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_and_unknown() {
        let items = vec![AppItem::new(1u64, "alpha", "Alpha"), AppItem::new(2u64, "beta", "Beta")];
        assert_eq!(find_by_slug(&items, "beta").map(|a| a.name.as_str()), Some("Beta"));
        assert!(find_by_slug(&items, "gamma").is_none());
        assert!(find_by_slug(&items, "Alpha").is_none());
    }

    #[test]
    fn test_require_maps_to_not_found() {
        let items = vec![AppItem::new(1u64, "alpha", "Alpha")];
        assert!(require_by_slug(&items, "alpha").is_ok());
        let err = require_by_slug(&items, "nope").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
