//! # HTTP Routes
//!
//! JSON endpoints for the gallery and profile plus the asset relay
//! endpoints. The relay handlers perform exactly one upstream fetch and
//! forward bytes unchanged; caching and CORS policy live entirely in the
//! response headers set here.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// Relay responses for gallery images are immutable; the upstream URL
/// changes when the asset does.
const IMAGE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";
const PDF_CACHE_CONTROL: &str = "public, max-age=3600";

const MISSING_URL: &str = "Missing url parameter";

#[derive(Debug, Deserialize)]
struct RelayParams {
    url: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/projects", get(projects))
        .route("/api/profile", get(profile))
        .route("/api/proxy-image", get(proxy_image))
        .route("/api/pdf-proxy", get(pdf_proxy))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /api/projects`. An empty array is a normal response.
async fn projects(State(state): State<AppState>) -> Response {
    Json(state.gallery.latest_projects().await).into_response()
}

/// `GET /api/profile`. 404 when no credential is configured or the host
/// is unreachable.
async fn profile(State(state): State<AppState>) -> Response {
    match state.gallery.profile().await {
        Some(profile) => Json(profile).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `GET /api/proxy-image?url=`. Relays an image byte-for-byte with a
/// long-lived cache policy and an open CORS header.
async fn proxy_image(
    State(state): State<AppState>,
    Query(params): Query<RelayParams>,
) -> Response {
    let Some(url) = params.url else {
        return (StatusCode::BAD_REQUEST, MISSING_URL).into_response();
    };

    let (status, content_type, body) = match relay_fetch(&state.relay, &url).await {
        Ok(parts) => parts,
        Err(response) => return response,
    };
    if !status.is_success() {
        return (status, "Failed to fetch image").into_response();
    }

    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
            (header::CACHE_CONTROL, IMAGE_CACHE_CONTROL.to_string()),
        ],
        body,
    )
        .into_response()
}

/// `GET /api/pdf-proxy?url=`. Relays a PDF for inline display with a
/// short-lived cache policy.
async fn pdf_proxy(State(state): State<AppState>, Query(params): Query<RelayParams>) -> Response {
    let Some(url) = params.url else {
        return (StatusCode::BAD_REQUEST, MISSING_URL).into_response();
    };

    let (status, _, body) = match relay_fetch(&state.relay, &url).await {
        Ok(parts) => parts,
        Err(response) => return response,
    };
    if !status.is_success() {
        return (status, "Failed to fetch document").into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=\"resume.pdf\"".to_string(),
            ),
            (header::CACHE_CONTROL, PDF_CACHE_CONTROL.to_string()),
        ],
        body,
    )
        .into_response()
}

/// One upstream GET. A transport error maps to 500; a non-success upstream
/// status is returned to the caller to relay as-is.
async fn relay_fetch(
    client: &reqwest::Client,
    url: &str,
) -> Result<(StatusCode, String, bytes::Bytes), Response> {
    let upstream = client.get(url).send().await.map_err(|e| {
        warn!(url, error = %e, "Relay fetch failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Upstream fetch failed").into_response()
    })?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let body = upstream.bytes().await.map_err(|e| {
        warn!(url, error = %e, "Relay body read failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Upstream fetch failed").into_response()
    })?;

    Ok((status, content_type, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use core_gallery::GalleryService;
    use core_runtime::GalleryConfig;
    use provider_github::{Profile, RepoId, RepositoryHost, RepositoryMetadata};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubHost;

    #[async_trait]
    impl RepositoryHost for StubHost {
        async fn list_repositories(
            &self,
            _account: &str,
            _limit: u32,
        ) -> provider_github::Result<Vec<RepoId>> {
            Ok(Vec::new())
        }

        async fn fetch_repository(
            &self,
            _id: &RepoId,
        ) -> provider_github::Result<RepositoryMetadata> {
            Ok(RepositoryMetadata {
                default_branch: "main".to_string(),
                description: None,
            })
        }

        async fn fetch_readme(
            &self,
            _id: &RepoId,
            _branch: &str,
        ) -> provider_github::Result<Option<String>> {
            Ok(None)
        }

        async fn fetch_profile(&self) -> provider_github::Result<Option<Profile>> {
            Ok(None)
        }
    }

    fn test_router() -> Router {
        let config = GalleryConfig::builder()
            .account_handle("acme")
            .build()
            .unwrap();
        let gallery = Arc::new(GalleryService::new(Arc::new(StubHost), config));
        router(AppState::new(gallery).unwrap())
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// Local upstream serving fixed assets, so the relay handlers can be
    /// exercised end to end without the network.
    async fn spawn_upstream() -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let upstream = Router::new()
            .route(
                "/asset.png",
                get(|| async {
                    ([(header::CONTENT_TYPE, "image/png")], &b"png-bytes"[..])
                }),
            )
            .route(
                "/resume.pdf",
                get(|| async {
                    (
                        [(header::CONTENT_TYPE, "application/octet-stream")],
                        &b"pdf-bytes"[..],
                    )
                }),
            )
            .route(
                "/missing.png",
                get(|| async { (StatusCode::NOT_FOUND, "gone") }),
            );

        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        addr
    }

    #[tokio::test]
    async fn test_proxy_image_requires_url() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/proxy-image")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "Missing url parameter");
    }

    #[tokio::test]
    async fn test_proxy_image_relays_body_and_headers() {
        let addr = spawn_upstream().await;

        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/proxy-image?url=http://{addr}/asset.png"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=31536000, immutable"
        );
        assert_eq!(body_string(response).await, "png-bytes");
    }

    #[tokio::test]
    async fn test_proxy_image_relays_upstream_status() {
        let addr = spawn_upstream().await;

        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/proxy-image?url=http://{addr}/missing.png"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_pdf_proxy_forces_pdf_headers() {
        let addr = spawn_upstream().await;

        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/pdf-proxy?url=http://{addr}/resume.pdf"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        // The upstream content-type is ignored for documents.
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "inline; filename=\"resume.pdf\""
        );
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=3600"
        );
        assert_eq!(body_string(response).await, "pdf-bytes");
    }

    #[tokio::test]
    async fn test_pdf_proxy_requires_url() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/pdf-proxy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_projects_without_credential_is_empty_array() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/projects")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn test_profile_unavailable_is_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
