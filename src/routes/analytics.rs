use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::analytics_dto::HiringTrendQuery,
    error::Result,
    models::user::{Actor, Role},
    services::analytics_service::TrendPeriod,
    utils::time::now,
    AppState,
};

const ANALYTICS_ROLES: &[Role] = &[Role::Employer, Role::Admin];

#[utoipa::path(
    get,
    path = "/api/analytics/hiring-trends",
    params(
        ("period" = Option<String>, Query, description = "1month, 3months, 6months or 1year")
    ),
    responses(
        (status = 200, description = "Monthly application counts", body = Vec<MonthlyBucket>),
        (status = 401, description = "Missing identity"),
        (status = 403, description = "Not an employer or admin")
    )
)]
#[axum::debug_handler]
pub async fn hiring_trends(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<HiringTrendQuery>,
) -> Result<impl IntoResponse> {
    actor.require(ANALYTICS_ROLES)?;
    let raw = query
        .period
        .as_deref()
        .unwrap_or(state.config.default_trend_period.as_str());
    let period = TrendPeriod::parse(Some(raw));
    tracing::info!(actor_id = %actor.id, role = ?actor.role, ?period, "hiring trends requested");

    let trend = state
        .analytics_service
        .hiring_trend(actor.employer_scope(), period, now())?;
    Ok(Json(trend))
}

#[utoipa::path(
    get,
    path = "/api/analytics/time-to-hire",
    responses(
        (status = 200, description = "Average days to shortlist per closed job", body = TimeToHire),
        (status = 401, description = "Missing identity"),
        (status = 403, description = "Not an employer or admin")
    )
)]
#[axum::debug_handler]
pub async fn time_to_hire(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<impl IntoResponse> {
    actor.require(ANALYTICS_ROLES)?;
    tracing::info!(actor_id = %actor.id, role = ?actor.role, "time to hire requested");
    let metrics = state.analytics_service.time_to_hire(actor.employer_scope())?;
    Ok(Json(metrics))
}

#[utoipa::path(
    get,
    path = "/api/analytics/demographics",
    responses(
        (status = 200, description = "Applicant demographics", body = Demographics),
        (status = 401, description = "Missing identity"),
        (status = 403, description = "Not an employer or admin")
    )
)]
#[axum::debug_handler]
pub async fn demographics(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<impl IntoResponse> {
    actor.require(ANALYTICS_ROLES)?;
    tracing::info!(actor_id = %actor.id, role = ?actor.role, "demographics requested");
    let demographics = state.analytics_service.demographics(actor.employer_scope())?;
    Ok(Json(demographics))
}
