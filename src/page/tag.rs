//! 标签页：路径片段为 URL 编码的标签

use percent_encoding::percent_decode_str;
use serde::Serialize;

use super::layout::{LayoutData, PageMeta};
use crate::catalogue::{filter_by_tag, sort_apps, AppItem, CatalogueLoader, HttpGet};
use crate::error::AppsResult;

#[derive(Debug, Clone, Serialize)]
pub struct TagPage {
    pub tag: String,
    pub apps: Vec<AppItem>,
    pub meta: PageMeta,
}

/// 解码路径中的标签（非法 UTF-8 序列按替换字符处理）
pub fn decode_tag(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

pub async fn load_tag<H>(http: &H, layout: &LayoutData, raw_tag: &str) -> AppsResult<TagPage>
where
    H: HttpGet + ?Sized,
{
    let all_apps = CatalogueLoader::fetch_apps(http).await?;

    let tag = decode_tag(raw_tag);
    let tagged: Vec<AppItem> = filter_by_tag(&all_apps, &tag).into_iter().cloned().collect();
    let apps = sort_apps(&tagged);

    let text = &layout.dictionary.tags_page;
    Ok(TagPage {
        meta: PageMeta {
            title: layout.titled(&format!("{} #{}", text.heading, tag)),
            description: format!("{} #{}", text.description, tag),
        },
        tag,
        apps,
    })
}
