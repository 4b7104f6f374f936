use crate::routes::{apartment_type, auth, health, reservation, root};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        root::api_info,
        auth::me,
        reservation::create_user,
        reservation::get_all_users,
        reservation::update_user_status,
        reservation::get_total_count,
        reservation::get_done_count,
        reservation::get_pending_count,
        apartment_type::create_apartment_type,
        apartment_type::get_all_apartment_types,
        apartment_type::get_apartment_type_by_id,
        apartment_type::update_apartment_type,
        apartment_type::delete_apartment_type
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Reservations", description = "Client reservation requests and their status"),
        (name = "Apartment Types", description = "Apartment type catalog"),
    ),
    info(
        title = "Crypto Immobilier API",
        version = "1.0.0",
        description = "Reservation workflow backend",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
