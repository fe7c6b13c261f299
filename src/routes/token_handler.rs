use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::app_state::AppState;
use crate::error::AppError;
use crate::token::duration::DurationParams;

pub async fn token_handler(
    Path(user): Path<String>,
    Query(params): Query<DurationParams>,
    State(state): State<Arc<AppState>>,
) -> Result<String, AppError> {
    let duration_secs = params.resolve()?;

    state.issuer.issue(&user, duration_secs)
}
