//! 目录拉取能力
//! 加载器只依赖 HttpGet 特质：生产环境用 reqwest，离线/测试可用本地目录

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::CatalogueConfig;
use crate::error::{AppsResult, AppstacksError};

/// 响应快照：状态码 + 原始响应体
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 是否为成功状态（2xx）
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 按 JSON 解码响应体
    pub fn json<T: DeserializeOwned>(&self) -> AppsResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// 执行一次 GET 请求的能力
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, path: &str) -> AppsResult<HttpResponse>;
}

/// 基于 reqwest 的远程拉取器（相对路径基于 base_url 解析）
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
    base_url: Url,
}

impl ReqwestFetcher {
    pub fn new(config: &CatalogueConfig) -> AppsResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppstacksError::InvalidInput(format!("base_url {} 无效：{}", config.base_url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl HttpGet for ReqwestFetcher {
    async fn get(&self, path: &str) -> AppsResult<HttpResponse> {
        let url = self.base_url.join(path)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

/// 本地目录拉取器（模拟静态文件服务，文件不存在返回 404 响应）
#[derive(Debug, Clone)]
pub struct LocalFileFetcher {
    root: PathBuf,
}

impl LocalFileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 请求路径映射为根目录下的文件；包含 .. 等越界片段时返回 None
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl HttpGet for LocalFileFetcher {
    async fn get(&self, path: &str) -> AppsResult<HttpResponse> {
        let Some(file) = self.resolve(path) else {
            return Ok(HttpResponse::new(400, Vec::new()));
        };
        debug!("读取本地目录文件：{}", file.display());

        match tokio::fs::read(&file).await {
            Ok(body) => Ok(HttpResponse::new(200, body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HttpResponse::new(404, Vec::new())),
            Err(e) => Err(e.into()),
        }
    }
}
