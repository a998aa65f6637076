use axum::{extract::State, Json};

use crate::api_models::{DjiRow, EdgeRow};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::services::{dji_loader, edge_loader};

/// 指数日线：每次请求都重新读取文件，按日期升序
pub async fn get_dji_data(State(state): State<AppState>) -> Result<Json<Vec<DjiRow>>, AppError> {
    let path = state.data.dji_csv.clone();
    let rows = tokio::task::spawn_blocking(move || dji_loader::load_dji(&path)).await??;
    Ok(Json(rows))
}

/// 桑基图连线数据，原样透传
pub async fn get_edge_data(State(state): State<AppState>) -> Result<Json<Vec<EdgeRow>>, AppError> {
    let path = state.data.edge_csv.clone();
    let rows = tokio::task::spawn_blocking(move || edge_loader::load_edges(&path)).await??;
    Ok(Json(rows))
}
