//! appstacks 命令行：加载目录并以 JSON 输出页面数据

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use appstacks::{
    load_about, load_category, load_detail, load_home, load_tag, CatalogueConfig, ConfigManager,
    HttpGet, LayoutData, LocalFileFetcher, ReqwestFetcher,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "appstacks", version, about = "Curated app catalogue / 精选应用目录")]
struct Cli {
    /// 目录服务根地址
    #[arg(long, conflicts_with = "root")]
    base_url: Option<String>,

    /// 本地静态目录（包含 apps.json）
    #[arg(long)]
    root: Option<PathBuf>,

    /// 界面语言（en / zh，其他值回退到 en）
    #[arg(long)]
    lang: Option<String>,

    /// HTTP 超时（秒）
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// 相似应用数量上限
    #[arg(long, default_value_t = appstacks::DEFAULT_SIMILAR_LIMIT)]
    similar_limit: usize,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 应用列表（可按平台或分类筛选）
    List {
        #[arg(long, conflicts_with = "category")]
        platform: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// 应用详情 + 相似应用
    Show { slug: String },
    /// 全部标签
    Tags,
    /// 某个标签下的应用（支持 URL 编码）
    Tag { tag: String },
    /// 关于页元信息
    About,
}

fn init_tracing(config: &CatalogueConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = ConfigManager::custom()
        .http_timeout(cli.timeout)
        .similar_limit(cli.similar_limit)
        .verbose(cli.verbose);
    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url.clone());
    }
    let config = builder.build();
    init_tracing(&config);

    let http: Arc<dyn HttpGet> = match &cli.root {
        Some(root) => Arc::new(LocalFileFetcher::new(root.clone())),
        None => Arc::new(ReqwestFetcher::new(&config).context("无法创建 HTTP 客户端")?),
    };
    let layout = LayoutData::load(cli.lang.as_deref());
    debug!("语言：{}，配置：{:?}", layout.locale, config);

    // 页面错误附带状态码，便于与 Web 端的 500/404 对照
    let with_status = |e: appstacks::AppstacksError| anyhow::anyhow!("[{}] {}", e.status_code(), e);

    match cli.command {
        Command::List { platform, category } => {
            if category.is_some() {
                let page = load_category(http.as_ref(), &layout, category.as_deref())
                    .await
                    .map_err(with_status)?;
                print_json(&page)
            } else {
                let page = load_home(http.as_ref(), &layout, platform.as_deref())
                    .await
                    .map_err(with_status)?;
                print_json(&page)
            }
        }
        Command::Show { slug } => {
            let page = load_detail(http.as_ref(), &layout, &slug, config.similar_limit)
                .await
                .map_err(with_status)?;
            print_json(&page)
        }
        Command::Tags => {
            let page = load_home(http.as_ref(), &layout, None).await.map_err(with_status)?;
            print_json(&page.tags)
        }
        Command::Tag { tag } => {
            let page = load_tag(http.as_ref(), &layout, &tag).await.map_err(with_status)?;
            print_json(&page)
        }
        Command::About => print_json(&serde_json::json!({
            "layout": layout,
            "page": load_about(&layout),
        })),
    }
}
