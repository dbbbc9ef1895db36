//! SPTrans line search and vehicle position handlers

use axum::{Json, extract::State};
use domain::{LinePositions, TransitLine};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::{
    error::ApiError,
    middleware::{ValidatedPath, ValidatedQuery},
    state::AppState,
};

/// Query for `/sptrans/linhas`
#[derive(Debug, Deserialize, Validate)]
pub struct LineSearchQuery {
    /// Line number or part of its name
    #[validate(length(min = 1, max = 256, message = "must be between 1 and 256 characters"))]
    pub termo_busca: String,
}

/// Path for `/sptrans/posicoes/{codigo_linha}`
#[derive(Debug, Deserialize, Validate)]
pub struct LineCodePath {
    /// Line code from a previous search
    #[validate(range(min = 0, message = "must not be negative"))]
    pub codigo_linha: i64,
}

/// Search bus lines
#[instrument(skip(state))]
pub async fn search_lines(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<LineSearchQuery>,
) -> Result<Json<Vec<TransitLine>>, ApiError> {
    let lines = state.transit()?.search_lines(&query.termo_busca).await?;
    Ok(Json(lines))
}

/// Current vehicle positions on a line
#[instrument(skip(state))]
pub async fn line_positions(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<LineCodePath>,
) -> Result<Json<LinePositions>, ApiError> {
    let positions = state.transit()?.line_positions(path.codigo_linha).await?;
    Ok(Json(positions))
}
