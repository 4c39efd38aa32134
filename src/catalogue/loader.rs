//! 目录加载器
//! 通过注入的 HttpGet 拉取目录 JSON，返回按规范顺序排好的应用列表

use tracing::{debug, warn};

use super::fetcher::HttpGet;
use super::model::AppItem;
use super::sorter::sort_apps;
use crate::error::{AppsResult, AppstacksError};

/// 固定的目录路径
pub const CATALOGUE_PATH: &str = "/apps.json";

/// 目录加载器
pub struct CatalogueLoader;

impl CatalogueLoader {
    /// 拉取目录（固定路径），一次网络读取，无重试、无缓存
    pub async fn fetch_apps<H>(http: &H) -> AppsResult<Vec<AppItem>>
    where
        H: HttpGet + ?Sized,
    {
        Self::fetch_apps_from(http, CATALOGUE_PATH).await
    }

    /// 从指定路径拉取目录
    /// 传输失败 / 非 2xx / JSON 解析失败均折叠为 CatalogueUnavailable，细节写入日志
    pub async fn fetch_apps_from<H>(http: &H, path: &str) -> AppsResult<Vec<AppItem>>
    where
        H: HttpGet + ?Sized,
    {
        let response = http.get(path).await.map_err(|e| {
            warn!("拉取目录 {} 失败：{}", path, e);
            AppstacksError::catalogue_unavailable()
        })?;

        if !response.ok() {
            warn!("目录 {} 返回状态码 {}", path, response.status);
            return Err(AppstacksError::catalogue_unavailable());
        }

        let items: Vec<AppItem> = response.json().map_err(|e| {
            warn!("目录 {} 解析失败：{}", path, e);
            AppstacksError::catalogue_unavailable()
        })?;

        debug!("目录加载成功，应用总数：{}", items.len());
        Ok(sort_apps(&items))
    }
}
