use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster::{
    models::{FundraiserRecord, ReferralProfile},
    progress::Progress,
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::{
    error::AppError,
    state::State,
    utils::{activity_feed, parse_id},
};

/// Record fields with the derived values flattened alongside.
#[derive(Serialize)]
pub struct InternView<'a> {
    #[serde(flatten)]
    pub record: &'a FundraiserRecord,
    #[serde(flatten)]
    pub progress: Progress,
}

#[derive(Serialize)]
pub struct RankedIntern<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub intern: InternView<'a>,
}

fn view<'a>(state: &State, record: &'a FundraiserRecord) -> Result<InternView<'a>, AppError> {
    let progress = Progress::of(record, state.now(), state.config.campaign_end)
        .map_err(|e| AppError::internal(e, state.config.expose_errors))?;

    Ok(InternView { record, progress })
}

fn find_intern<'a>(state: &'a State, raw_id: &str) -> Result<&'a FundraiserRecord, AppError> {
    parse_id(raw_id)
        .and_then(|id| state.roster.by_id(id))
        .ok_or_else(|| {
            debug!("No intern for id {raw_id}");
            AppError::InternNotFound
        })
}

pub async fn interns_handler(AxumState(state): AxumState<Arc<State>>) -> Result<Response, AppError> {
    let interns = state
        .roster
        .all()
        .iter()
        .map(|record| view(&state, record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(interns).into_response())
}

pub async fn leaderboard_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Response, AppError> {
    let leaderboard = state
        .roster
        .ranked()
        .into_iter()
        .map(|(rank, record)| {
            Ok(RankedIntern {
                rank,
                intern: view(&state, record)?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Json(leaderboard).into_response())
}

pub async fn intern_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = find_intern(&state, &id)?;

    Ok(Json(view(&state, record)?).into_response())
}

pub async fn referral_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let record = state.roster.by_referral_code(&code).ok_or_else(|| {
        debug!("No intern for referral code {code}");
        AppError::ReferralNotFound
    })?;

    Ok(Json(ReferralProfile::from(record)).into_response())
}

pub async fn activity_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = find_intern(&state, &id)?;

    Ok(Json(activity_feed(record)).into_response())
}

/// Reports the path as the client sent it, prefix and query included.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    let path = uri
        .path_and_query()
        .map(|path| path.as_str())
        .unwrap_or_else(|| uri.path());

    debug!("No route for {path}");

    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found", "path": path })),
    )
}
