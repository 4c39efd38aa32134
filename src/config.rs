//! 全局配置管理,存储所有可配置项

/// 全局配置
#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    // 目录服务根地址（相对路径基于此解析）
    pub base_url: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 请求 User-Agent
    pub user_agent: String,
    // 相似应用推荐数量上限
    pub similar_limit: usize,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173/".to_string(),
            http_timeout: 30,
            user_agent: concat!("appstacks/", env!("CARGO_PKG_VERSION")).to_string(),
            similar_limit: 6,
            verbose: false,
        }
    }
}

impl CatalogueConfig {
    /// 未设置 RUST_LOG 时的默认日志级别
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> CatalogueConfig {
        CatalogueConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: CatalogueConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: CatalogueConfig::default(),
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn similar_limit(mut self, limit: usize) -> Self {
        self.config.similar_limit = limit;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> CatalogueConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ConfigManager::get_default();
        assert_eq!(config.base_url, "http://localhost:5173/");
        assert_eq!(config.http_timeout, 30);
        assert_eq!(config.similar_limit, 6);
        assert!(!config.verbose);
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigManager::custom()
            .base_url("https://apps.example.com/")
            .http_timeout(5)
            .similar_limit(3)
            .verbose(true)
            .build();
        assert_eq!(config.base_url, "https://apps.example.com/");
        assert_eq!(config.http_timeout, 5);
        assert_eq!(config.similar_limit, 3);
        assert!(config.verbose);
        assert_eq!(config.log_level(), "debug");
    }
}
