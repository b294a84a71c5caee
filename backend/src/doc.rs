//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the item, sign-in and health endpoints together with
//! the schema wrappers from [`crate::inbound::http::schemas`], which keep the
//! domain types free of utoipa derives.

use crate::inbound::http::auth::{LoginRequest, LoginResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ItemSchema, SpecificationSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Product Hub API",
        description = "Read access to the product catalogue, sign-in and health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ItemSchema,
        SpecificationSchema,
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        LoginResponse
    )),
    tags(
        (name = "items", description = "Catalogue reads"),
        (name = "auth", description = "Session sign-in and sign-out"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Document structure checks.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    const ITEM_SCHEMA_NAME: &str = "crate.domain.Item";
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/items")]
    #[case("/api/items/{id}")]
    #[case("/api/login")]
    #[case("/api/logout")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn item_and_error_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let item = schemas.get(ITEM_SCHEMA_NAME).expect("Item schema");
        assert_object_schema_has_field(item, "_id");
        assert_object_schema_has_field(item, "price");

        let error = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");
        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "message");
    }
}
