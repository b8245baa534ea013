//! HTTP 服务器：绑定监听端口并处理优雅关闭

pub mod routes;

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{info, warn};

use crate::config::Config;
use routes::AppState;

/// 启动 HTTP 服务并阻塞至收到退出信号
pub async fn run(config: Config) -> Result<()> {
    let listener = bind_listener(config.port).await?;
    let local_addr = listener.local_addr()?;

    let state = AppState {
        config: Arc::new(config),
    };
    let app = routes::routes(state);

    info!("新闻稿智能评审服务已启动: http://localhost:{}", local_addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP 服务已关闭");
    Ok(())
}

/// 绑定监听端口
///
/// 优先尝试 IPv6 通配（双栈环境下 localhost → ::1 的访问），失败再降级 IPv4
async fn bind_listener(port: u16) -> Result<TcpListener> {
    let v6_addr = format!("[::]:{}", port);
    match TcpListener::bind(&v6_addr).await {
        Ok(listener) => Ok(listener),
        Err(e6) => {
            warn!("IPv6 绑定失败: {}，尝试 IPv4", e6);
            let v4_addr = format!("0.0.0.0:{}", port);
            TcpListener::bind(&v4_addr).await.map_err(|e4| {
                anyhow::anyhow!("端口 {} 绑定失败 (IPv4): {}；之前 IPv6 错误: {}", port, e4, e6)
            })
        }
    }
}

/// 优雅关闭信号处理
async fn shutdown_signal() {
    tokio::select! {
        _ = ctrl_c() => {
            info!("收到 SIGINT，准备退出");
        }
        _ = wait_for_sigterm() => {
            info!("收到 SIGTERM，准备退出");
        }
    }
}

async fn wait_for_sigterm() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term_signal) => {
                term_signal.recv().await;
            }
            Err(e) => {
                warn!("注册 SIGTERM 监听失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        // 非 Unix 系统，永远等待
        std::future::pending::<()>().await;
    }
}
