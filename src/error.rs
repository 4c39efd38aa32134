//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

/// 目录加载失败时对外展示的统一提示
pub const CATALOGUE_UNAVAILABLE_MSG: &str = "Unable to load apps catalogue.";

/// 按 slug 查找不到应用时的提示
pub const APP_NOT_FOUND_MSG: &str = "App not found.";

#[derive(Error, Debug)]
pub enum AppstacksError {
    // 目录相关错误
    #[error("{0}")]
    CatalogueUnavailable(String),
    #[error("{0}")]
    NotFound(String),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl AppstacksError {
    /// 目录加载失败（统一对外提示）
    pub fn catalogue_unavailable() -> Self {
        Self::CatalogueUnavailable(CATALOGUE_UNAVAILABLE_MSG.to_string())
    }

    /// 应用不存在
    pub fn app_not_found() -> Self {
        Self::NotFound(APP_NOT_FOUND_MSG.to_string())
    }

    /// 页面边界使用的 HTTP 状态码：未找到为 404，其余一律 500
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            _ => 500,
        }
    }
}

// 全局Result类型
pub type AppsResult<T> = Result<T, AppstacksError>;
