//! Local preview server command.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// Run the serve command.
pub async fn run(port: u16, dir: PathBuf, open: bool) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Directory not found: {}. Run 'docshell build' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = router(dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    if open {
        let url = format!("http://{}", addr);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Static file router; directory requests resolve to their `index.html`.
fn router(dir: PathBuf) -> Router {
    Router::new().fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::fs;
    use tempfile::tempdir;
    use tower::ServiceExt;

    #[tokio::test]
    async fn refuses_missing_directory() {
        let temp = tempdir().unwrap();

        let err = run(0, temp.path().join("www"), false).await.unwrap_err();

        assert!(err.to_string().contains("docshell build"));
    }

    #[tokio::test]
    async fn directory_requests_serve_index() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("guide")).unwrap();
        fs::write(temp.path().join("guide/index.html"), "<h2>Scheme Guide</h2>").unwrap();

        let response = router(temp.path().to_path_buf())
            .oneshot(Request::builder().uri("/guide/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"<h2>Scheme Guide</h2>");
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let temp = tempdir().unwrap();

        let response = router(temp.path().to_path_buf())
            .oneshot(Request::builder().uri("/nope/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
