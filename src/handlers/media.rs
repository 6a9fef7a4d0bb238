use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::media::{optimized_image, responsive_srcset, DEFAULT_SRCSET_WIDTHS};

// GET /api/media/image
#[derive(Deserialize)]
pub struct ImageQuery {
    pub url: String,
    pub width: Option<u32>,
    pub quality: Option<String>,
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct ImageResponse {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
}

pub async fn optimize_image(Query(query): Query<ImageQuery>) -> Result<Json<ImageResponse>, AppError> {
    if query.url.trim().is_empty() {
        return Err(AppError::Validation("url is required".to_string()));
    }

    let quality = query.quality.as_deref();
    let format = query.format.as_deref();
    Ok(Json(ImageResponse {
        src: optimized_image(&query.url, query.width, quality, format),
        srcset: responsive_srcset(&query.url, &DEFAULT_SRCSET_WIDTHS, quality, format),
    }))
}
