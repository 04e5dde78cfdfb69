//! HTTP router for the server build

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler_with_context, generate_route_list};
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

use crate::app::{App, DefaultLocale, shell};
use crate::core::Locale;

/// Build the site router.
///
/// Both the matched routes and the not-found fallback render with
/// `default_locale` in context, so `/` and every 404 agree on the language.
pub fn site_router(options: LeptosOptions, default_locale: Locale, compression: bool) -> Router {
    let routes = generate_route_list(App);
    let provide_locale = move || provide_context(DefaultLocale(default_locale));

    // Serve pre-compressed .br/.gz bundles when present
    let pkg_service = ServeDir::new(format!("{}/pkg", options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes_with_context(&options, routes, provide_locale, {
            let options = options.clone();
            move || shell(options.clone())
        })
        .fallback(file_and_error_handler_with_context(provide_locale, shell))
        .with_state(options);

    if compression {
        app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
    } else {
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_app(default_locale: Locale) -> Router {
        let options = LeptosOptions::builder().output_name("studytrack").build();
        site_router(options, default_locale, false)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_serves_default_locale() {
        let (status, body) = get(create_test_app(Locale::En), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"lang="en""#));
        assert!(body.contains("AI Capabilities"));
        assert!(!body.contains("Bosh sahifa"));
    }

    #[tokio::test]
    async fn test_unknown_path_renders_not_found_in_default_locale() {
        let (status, body) = get(create_test_app(Locale::En), "/does-not-exist").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains(r#"lang="en""#));
        assert!(!body.contains(r#"lang="uz""#));
        assert!(body.contains("Page Not Found"));
        assert!(!body.contains("Sahifa topilmadi"));
        assert!(body.contains(r#"href="/""#));
    }
}
