use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// 页面与数据接口同源时不需要 CORS；独立前端开发服务器通过 ALLOWED_ORIGINS 放行
pub fn cors_layer() -> CorsLayer {
    let allowed_env = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
    let origins = parse_origins(&allowed_env);

    let origins = if origins.is_empty() {
        vec![
            HeaderValue::from_static("http://localhost:5000"),
            HeaderValue::from_static("http://127.0.0.1:5000"),
        ]
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .filter_map(|o| {
            let trimmed = o.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect()
}
