use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use crate::app::AppState;
use crate::handler::error::not_found;

mod market;
mod root;

pub fn build_routes(static_dir: &Path) -> Router<AppState> {
    Router::new()
        // 首页与健康检查
        .merge(root::router())
        // 数据接口，路径沿用前端脚本中的地址
        .merge(market::router())
        // 前端脚本与样式
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
}
