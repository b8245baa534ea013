use clap::Parser;
use tracing::{info, warn};

use news_review::cli::args::Args;
use news_review::config::Config;
use news_review::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::new();
    config.update_from_args(&args);
    config.validate()?;

    logging::setup_logging(config.debug)?;

    match &config.siliconflow_api_key {
        Some(key) => {
            let preview: String = key.chars().take(8).collect();
            info!("SiliconFlow API key 已加载（{}...）", preview);
        }
        None => {
            warn!("NEWS_REVIEW_SILICONFLOW_API_KEY 未设置，评审请求将返回配置错误");
        }
    }

    server::run(config).await
}
