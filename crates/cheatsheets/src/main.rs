use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cheatsheets::catalog::Library;
use cheatsheets::config::Config;
use cheatsheets::server::CheatsheetServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting cheatsheets MCP server");

    let config = Config::from_env()?;
    info!(
        content_dir = config.content_dir.as_deref().unwrap_or("<built-in>"),
        tcp = config.tcp_listen_addr.is_some(),
        "configuration loaded"
    );

    let library = match config.content_dir() {
        Some(dir) => Library::from_dir(&dir)?,
        None => Library::builtin(),
    };
    for sheet in library.sheets() {
        info!(
            sheet = sheet.info.id,
            categories = sheet.catalog.categories().len(),
            entries = sheet.catalog.entry_count(),
            "cheatsheet loaded"
        );
    }

    let server = CheatsheetServer::new(library);
    match config.tcp_listen_addr {
        Some(addr) => serve_tcp(server, &addr).await,
        None => serve_stdio(server).await,
    }
}

async fn serve_stdio(server: CheatsheetServer) -> anyhow::Result<()> {
    info!("MCP server ready, serving on stdio");
    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| error!(error = %e, "MCP server error"))?;
    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}

/// One MCP session per accepted connection; a failed session does not stop the listener.
async fn serve_tcp(server: CheatsheetServer, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(listen_addr = %addr, "MCP server ready, serving on TCP");
    loop {
        let (stream, peer) = listener.accept().await?;
        let server = server.clone();
        tokio::spawn(async move {
            info!(%peer, "MCP client connected");
            match server.serve(stream).await {
                Ok(service) => {
                    if let Err(e) = service.waiting().await {
                        error!(%peer, error = %e, "MCP session failed");
                    }
                }
                Err(e) => error!(%peer, error = %e, "MCP server error"),
            }
            info!(%peer, "MCP client disconnected");
        });
    }
}
