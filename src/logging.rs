use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// 设置日志系统
///
/// `RUST_LOG` 环境变量优先；未设置时按 debug 标志选择 info/debug 级别。
pub fn setup_logging(debug: bool) -> anyhow::Result<()> {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::from_default_env()
        .add_directive(format!("news_review={}", level).parse()?);

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok(); // 重复初始化（如测试中）不视为错误

    Ok(())
}
