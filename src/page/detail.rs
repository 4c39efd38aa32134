//! 应用详情页

use serde::Serialize;

use super::layout::{LayoutData, PageMeta};
use crate::catalogue::{find_similar, require_by_slug, AppItem, CatalogueLoader, HttpGet};
use crate::error::AppsResult;

#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub app: AppItem,
    pub similar: Vec<AppItem>,
    pub meta: PageMeta,
}

/// 按 slug 加载详情；不存在时返回 NotFound（404）
pub async fn load_detail<H>(http: &H, layout: &LayoutData, slug: &str, similar_limit: usize) -> AppsResult<DetailPage>
where
    H: HttpGet + ?Sized,
{
    let all_apps = CatalogueLoader::fetch_apps(http).await?;
    let app = require_by_slug(&all_apps, slug)?;
    let similar = find_similar(&all_apps, app, similar_limit).into_iter().cloned().collect();

    Ok(DetailPage {
        meta: PageMeta {
            title: layout.titled(&app.name),
            description: app.summary.clone(),
        },
        app: app.clone(),
        similar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::DEFAULT_SIMILAR_LIMIT;
    use crate::page::test_support;

    #[tokio::test]
    async fn test_detail_with_similar() {
        let layout = LayoutData::load(None);
        let page = load_detail(&test_support::ok(), &layout, "alpha", DEFAULT_SIMILAR_LIMIT)
            .await
            .unwrap();
        assert_eq!(page.app.name, "Alpha");
        assert_eq!(page.meta.title, "Alpha · huyixi's Apps");
        assert_eq!(page.meta.description, "First app");
        // beta 与 gamma 各共享 1 个标签，beta 权重更高
        let similar: Vec<&str> = page.similar.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(similar, vec!["beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_detail_respects_limit() {
        let layout = LayoutData::load(Some("zh"));
        let page = load_detail(&test_support::ok(), &layout, "alpha", 1).await.unwrap();
        assert_eq!(page.similar.len(), 1);
        assert_eq!(page.meta.title, "Alpha · huyixi 的应用栈");
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let layout = LayoutData::load(None);
        let err = load_detail(&test_support::ok(), &layout, "missing", 6).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "App not found.");
    }

    #[tokio::test]
    async fn test_catalogue_failure_wins_over_lookup() {
        let layout = LayoutData::load(None);
        let err = load_detail(&test_support::failing(), &layout, "alpha", 6).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }
}
