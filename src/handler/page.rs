use axum::{extract::State, response::Html};

use crate::app::AppState;
use crate::handler::error::AppError;

/// 首页，直接返回模板目录下的 index.html
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.data.index_page();
    let page = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::error!("Failed to read landing page {}: {}", path.display(), e);
        AppError::InternalServerError
    })?;
    Ok(Html(page))
}

pub async fn healthz() -> &'static str {
    "ok"
}
