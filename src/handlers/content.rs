use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::SiteContent;
use crate::services::content::{site_content, SECTIONS};
use crate::state::AppState;

// GET /api/content
pub async fn get_content(State(state): State<Arc<AppState>>) -> Result<Json<SiteContent>, AppError> {
    Ok(Json(site_content(&state.config)?))
}

// GET /api/content/:section
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !SECTIONS.contains(&section.as_str()) {
        return Err(AppError::NotFound(format!("content section {section}")));
    }

    let content = serde_json::to_value(site_content(&state.config)?)?;
    content
        .get(&section)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("content section {section}")))
}
