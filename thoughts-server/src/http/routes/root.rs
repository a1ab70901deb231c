//! Root discovery endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// A registered route, for the discovery listing
#[derive(Serialize, Clone, Copy)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
}

/// Static route listing, kept in sync with the routers by hand
const ROUTES: &[RouteInfo] = &[
    RouteInfo { method: "GET", path: "/" },
    RouteInfo { method: "GET", path: "/health" },
    RouteInfo { method: "GET", path: "/thoughts" },
    RouteInfo { method: "POST", path: "/thoughts" },
    RouteInfo { method: "GET", path: "/thoughts/{id}" },
    RouteInfo { method: "PUT", path: "/thoughts/{id}" },
    RouteInfo { method: "DELETE", path: "/thoughts/{id}" },
    RouteInfo { method: "POST", path: "/thoughts/{id}/like" },
];

/// Discovery response
#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub routes: &'static [RouteInfo],
}

/// GET /
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to the Thoughts API",
        routes: ROUTES,
    })
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_lists_every_route() {
        let Json(body) = index().await;
        assert_eq!(body.message, "Welcome to the Thoughts API");

        for (method, path) in [
            ("GET", "/thoughts"),
            ("POST", "/thoughts"),
            ("GET", "/thoughts/{id}"),
            ("PUT", "/thoughts/{id}"),
            ("DELETE", "/thoughts/{id}"),
            ("POST", "/thoughts/{id}/like"),
        ] {
            assert!(
                body.routes
                    .iter()
                    .any(|r| r.method == method && r.path == path),
                "missing {} {}",
                method,
                path
            );
        }
    }
}
