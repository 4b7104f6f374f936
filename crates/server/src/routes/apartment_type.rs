use crate::{
    dtos::{
        apartment_type::ApartmentTypeResponse,
        response::{ApiResponse, ErrorResponse},
    },
    error::AppError,
    routes::parse_id,
    state::AppState,
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use database::services::apartment_type::ApartmentTypeService;
use models::apartment_type::ApartmentTypePayload;

const ENTITY: &str = "Apartment type";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_all_apartment_types).post(create_apartment_type),
        )
        .route(
            "/{id}",
            get(get_apartment_type_by_id)
                .put(update_apartment_type)
                .delete(delete_apartment_type),
        )
}

/// Create an apartment type
#[utoipa::path(
    post,
    path = "/api/apartment-types",
    request_body = ApartmentTypePayload,
    responses(
        (status = 201, description = "Apartment type created", body = ApiResponse<ApartmentTypeResponse>),
        (status = 400, description = "Invalid fields or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Apartment Types"
)]
pub async fn create_apartment_type(
    State(state): State<AppState>,
    body: Result<Json<ApartmentTypePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ApartmentTypeResponse>>), AppError> {
    let Json(payload) = body?;
    let apartment_type = ApartmentTypeService::create(&state.db, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(apartment_type.into())),
    ))
}

/// List apartment types by name
#[utoipa::path(
    get,
    path = "/api/apartment-types",
    responses(
        (status = 200, description = "Apartment types", body = ApiResponse<Vec<ApartmentTypeResponse>>),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Apartment Types"
)]
pub async fn get_all_apartment_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ApartmentTypeResponse>>>, AppError> {
    let apartment_types = ApartmentTypeService::list_all(&state.db).await?;

    Ok(Json(ApiResponse::list(
        apartment_types.into_iter().map(Into::into).collect(),
    )))
}

/// Get a specific apartment type by ID
#[utoipa::path(
    get,
    path = "/api/apartment-types/{id}",
    params(
        ("id" = String, Path, description = "Apartment type ID")
    ),
    responses(
        (status = 200, description = "Apartment type found", body = ApiResponse<ApartmentTypeResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse),
        (status = 404, description = "Apartment type not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Apartment Types"
)]
pub async fn get_apartment_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ApartmentTypeResponse>>, AppError> {
    let id = parse_id(&id, ENTITY)?;
    let apartment_type = ApartmentTypeService::get_by_id(&state.db, id).await?;

    Ok(Json(ApiResponse::data(apartment_type.into())))
}

/// Update some or all fields of an apartment type
#[utoipa::path(
    put,
    path = "/api/apartment-types/{id}",
    params(
        ("id" = String, Path, description = "Apartment type ID")
    ),
    request_body = ApartmentTypePayload,
    responses(
        (status = 200, description = "Apartment type updated", body = ApiResponse<ApartmentTypeResponse>),
        (status = 400, description = "Invalid fields or duplicate name", body = ErrorResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse),
        (status = 404, description = "Apartment type not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Apartment Types"
)]
pub async fn update_apartment_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ApartmentTypePayload>, JsonRejection>,
) -> Result<Json<ApiResponse<ApartmentTypeResponse>>, AppError> {
    let id = parse_id(&id, ENTITY)?;
    let Json(payload) = body?;
    let apartment_type = ApartmentTypeService::update(&state.db, id, payload).await?;

    Ok(Json(ApiResponse::data(apartment_type.into())))
}

/// Delete an apartment type
#[utoipa::path(
    delete,
    path = "/api/apartment-types/{id}",
    params(
        ("id" = String, Path, description = "Apartment type ID")
    ),
    responses(
        (status = 200, description = "Apartment type deleted", body = ApiResponse<ApartmentTypeResponse>),
        (status = 401, description = "Unauthorized - invalid or missing JWT", body = ErrorResponse),
        (status = 404, description = "Apartment type not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Apartment Types"
)]
pub async fn delete_apartment_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ApartmentTypeResponse>>, AppError> {
    let id = parse_id(&id, ENTITY)?;
    ApartmentTypeService::delete(&state.db, id).await?;

    Ok(Json(ApiResponse::message(
        "Apartment type deleted successfully",
    )))
}
