//! 列表页：平台筛选（首页）与分类筛选（备用列表页）

use serde::Serialize;
use tracing::debug;

use super::layout::{LayoutData, PageMeta};
use crate::catalogue::{
    collect_tags, filter_by_category, filter_by_platform, parse_category, parse_platform, AppItem,
    CatalogueLoader, HttpGet, Platform,
};
use crate::error::AppsResult;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub apps: Vec<AppItem>,
    pub selected_platform: Option<Platform>,
    /// 基于未筛选的完整目录汇总
    pub tags: Vec<String>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub apps: Vec<AppItem>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub meta: PageMeta,
}

fn listing_meta(layout: &LayoutData) -> PageMeta {
    PageMeta {
        title: layout.site_title.to_string(),
        description: layout.site_description.to_string(),
    }
}

/// 首页：platform 查询参数不识别时不筛选
pub async fn load_home<H>(http: &H, layout: &LayoutData, platform_param: Option<&str>) -> AppsResult<HomePage>
where
    H: HttpGet + ?Sized,
{
    let all_apps = CatalogueLoader::fetch_apps(http).await?;

    let platform = parse_platform(platform_param);
    let apps: Vec<AppItem> = filter_by_platform(&all_apps, platform).into_iter().cloned().collect();
    let tags = collect_tags(&all_apps, layout.locale);
    debug!("首页：平台 {:?}，应用 {}/{}，标签 {}", platform, apps.len(), all_apps.len(), tags.len());

    Ok(HomePage {
        apps,
        selected_platform: platform,
        tags,
        meta: listing_meta(layout),
    })
}

/// 分类列表页：支持「Mobile apps」并集；非平台取值无匹配
pub async fn load_category<H>(http: &H, layout: &LayoutData, category_param: Option<&str>) -> AppsResult<CategoryPage>
where
    H: HttpGet + ?Sized,
{
    let all_apps = CatalogueLoader::fetch_apps(http).await?;

    let category = parse_category(category_param);
    let apps: Vec<AppItem> = filter_by_category(&all_apps, category.as_ref())
        .into_iter()
        .cloned()
        .collect();
    let tags = collect_tags(&all_apps, layout.locale);
    debug!("分类页：分类 {:?}，应用 {}/{}", category, apps.len(), all_apps.len());

    Ok(CategoryPage {
        apps,
        category: category.map(|c| c.as_str().to_string()),
        tags,
        meta: listing_meta(layout),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::test_support;

    fn slugs(apps: &[AppItem]) -> Vec<&str> {
        apps.iter().map(|a| a.slug.as_str()).collect()
    }

    #[tokio::test]
    async fn test_home_unfiltered_is_sorted() {
        let layout = LayoutData::load(None);
        let page = load_home(&test_support::ok(), &layout, None).await.unwrap();
        assert_eq!(slugs(&page.apps), vec!["beta", "alpha", "gamma"]);
        assert_eq!(page.selected_platform, None);
        assert_eq!(page.tags, vec!["design system", "notes", "sync"]);
        assert_eq!(page.meta.title, "huyixi's Apps");
    }

    #[tokio::test]
    async fn test_home_platform_filter_keeps_full_tag_list() {
        let layout = LayoutData::load(None);
        let page = load_home(&test_support::ok(), &layout, Some("Web apps")).await.unwrap();
        assert_eq!(slugs(&page.apps), vec!["alpha"]);
        assert_eq!(page.selected_platform, Some(Platform::Web));
        assert_eq!(page.tags.len(), 3);
    }

    #[tokio::test]
    async fn test_home_unknown_platform_means_no_filter() {
        let layout = LayoutData::load(None);
        let page = load_home(&test_support::ok(), &layout, Some("web")).await.unwrap();
        assert_eq!(page.apps.len(), 3);
        assert_eq!(page.selected_platform, None);
    }

    #[tokio::test]
    async fn test_home_catalogue_failure_is_server_error() {
        let layout = LayoutData::load(None);
        let err = load_home(&test_support::failing(), &layout, None).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Unable to load apps catalogue.");
    }

    #[tokio::test]
    async fn test_category_mobile_union_and_unmatched() {
        let layout = LayoutData::load(None);
        let mobile = load_category(&test_support::ok(), &layout, Some("Mobile apps")).await.unwrap();
        assert_eq!(slugs(&mobile.apps), vec!["beta", "gamma"]);
        assert_eq!(mobile.category.as_deref(), Some("Mobile apps"));

        let unknown = load_category(&test_support::ok(), &layout, Some("Games")).await.unwrap();
        assert!(unknown.apps.is_empty());

        let all = load_category(&test_support::ok(), &layout, None).await.unwrap();
        assert_eq!(all.apps.len(), 3);
        assert_eq!(all.category, None);
    }
}
