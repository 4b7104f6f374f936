use crate::{
    doc::ApiDoc,
    middleware::{
        auth::require_auth,
        error_handler::{handle_panic, normalize_errors, not_found},
        request_log::log_requests,
    },
    routes::{apartment_type, auth, health, reservation, root},
    state::AppState,
};
use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{
            ACCEPT, AUTHORIZATION, CONTENT_TYPE, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS, X_XSS_PROTECTION,
        },
    },
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, cors::CorsLayer,
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the complete HTTP application around an injected state
pub fn build_router(state: AppState) -> Router {
    // Every route in here sits behind the authentication gate
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .nest("/api/reservations", reservation::router())
        .nest("/api/users", reservation::router())
        .nest("/api/apartment-types", apartment_type::router())
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health::health))
        .route("/api", get(root::api_info))
        .merge(protected)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        // Known path, unsupported method: same 404 as an unknown path
        .method_not_allowed_fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(log_requests))
                .layer(cors_layer(&state))
                .layer(CompressionLayer::new())
                // Browser hardening headers, unless a handler already set them
                .layer(header(X_CONTENT_TYPE_OPTIONS, "nosniff"))
                .layer(header(X_FRAME_OPTIONS, "SAMEORIGIN"))
                .layer(header(REFERRER_POLICY, "no-referrer"))
                .layer(header(X_XSS_PROTECTION, "0"))
                .layer(from_fn_with_state(state.clone(), normalize_errors))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

fn cors_layer(state: &AppState) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(state.config.frontend_origin.clone())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE])
}

fn header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}
