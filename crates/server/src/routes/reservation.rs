use crate::{
    dtos::{
        reservation::{ReservationQueryParams, ReservationResponse},
        response::{ApiResponse, CountResponse, ErrorResponse},
    },
    error::AppError,
    routes::parse_id,
    state::AppState,
};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, put},
};
use database::services::reservation::ReservationService;
use log::info;
use models::{
    reservation::{ReservationPayload, StatusPayload},
    reservation_status::ReservationStatus,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_users).post(create_user))
        .route("/count", get(get_total_count))
        .route("/count/done", get(get_done_count))
        .route("/count/pending", get(get_pending_count))
        .route("/{id}/status", put(update_user_status))
}

/// Submit a new reservation
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = ReservationPayload,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Missing or oversized fields", body = ErrorResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<ReservationPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), AppError> {
    let Json(payload) = body?;
    let reservation = ReservationService::create(&state.db, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(reservation.into())),
    ))
}

/// List reservations, newest first
#[utoipa::path(
    get,
    path = "/api/reservations",
    params(ReservationQueryParams),
    responses(
        (status = 200, description = "Reservations", body = ApiResponse<Vec<ReservationResponse>>),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    params: Result<Query<ReservationQueryParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<ReservationResponse>>>, AppError> {
    let Query(params) = params?;
    let reservations = ReservationService::list_all(&state.db, params.status).await?;

    Ok(Json(ApiResponse::list(
        reservations.into_iter().map(Into::into).collect(),
    )))
}

/// Mark a reservation Pending or Done
#[utoipa::path(
    put,
    path = "/api/reservations/{id}/status",
    params(
        ("id" = String, Path, description = "Reservation ID")
    ),
    request_body = StatusPayload,
    responses(
        (status = 200, description = "Reservation updated", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Missing or unknown status", body = ErrorResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StatusPayload>, JsonRejection>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let id = parse_id(&id, "Reservation")?;
    let Json(payload) = body?;

    let reservation = ReservationService::update_status(&state.db, id, payload).await?;
    info!(
        "Reservation {} marked {}",
        reservation.id,
        reservation.status
    );

    Ok(Json(ApiResponse::data(reservation.into())))
}

/// Count every reservation
#[utoipa::path(
    get,
    path = "/api/reservations/count",
    responses(
        (status = 200, description = "Total reservations", body = ApiResponse<CountResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn get_total_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
    let count = ReservationService::count_all(&state.db).await?;
    Ok(Json(ApiResponse::data(CountResponse { count })))
}

/// Count reservations marked Done
#[utoipa::path(
    get,
    path = "/api/reservations/count/done",
    responses(
        (status = 200, description = "Done reservations", body = ApiResponse<CountResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn get_done_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
    count_with_status(&state, ReservationStatus::Done).await
}

/// Count reservations still Pending
#[utoipa::path(
    get,
    path = "/api/reservations/count/pending",
    responses(
        (status = 200, description = "Pending reservations", body = ApiResponse<CountResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Reservations"
)]
pub async fn get_pending_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
    count_with_status(&state, ReservationStatus::Pending).await
}

async fn count_with_status(
    state: &AppState,
    status: ReservationStatus,
) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
    let count = ReservationService::count_by_status(&state.db, status).await?;
    Ok(Json(ApiResponse::data(CountResponse { count })))
}
