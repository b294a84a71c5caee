//! Catalogue item endpoints.
//!
//! ```text
//! GET /api/items
//! GET /api/items/{id}
//! ```

use actix_web::{get, web};

use crate::domain::Item;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ItemSchema};
use crate::inbound::http::state::HttpState;

/// List every catalogue item in store order.
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All catalogue items", body = [ItemSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Item store unavailable", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems",
    security([])
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Item>>> {
    state.catalogue.list_items().await.map(web::Json)
}

/// Fetch one item by its store identifier.
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The item", body = ItemSchema),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Item store unavailable", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItem",
    security([])
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Item>> {
    let id = path.into_inner();
    state.catalogue.get_item(&id).await.map(web::Json)
}

#[cfg(test)]
mod tests {
    //! Handler coverage over a mocked item store.
    use std::sync::Arc;

    use super::*;
    use crate::Trace;
    use crate::domain::ports::{ItemRepositoryError, MockItemRepository, RejectingLoginService};
    use crate::domain::{CatalogueService, ITEM_NOT_FOUND, ItemId, TRACE_ID_HEADER};
    use crate::test_support::sample_item;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn state_with(repository: MockItemRepository) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            CatalogueService::new(Arc::new(repository)),
            Arc::new(RejectingLoginService),
        ))
    }

    async fn call(repository: MockItemRepository, uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(repository))
                .service(web::scope("/api").service(list_items).service(get_item)),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value = serde_json::from_slice(&body).expect("JSON body");
        (status, value)
    }

    #[rstest]
    #[actix_web::test]
    async fn lists_items_in_store_order() {
        let mut repository = MockItemRepository::new();
        repository.expect_list().times(1).return_once(|| {
            Ok(vec![
                sample_item("b2", "Zeta", 5.0, "ai"),
                sample_item("a1", "Alpha", 10.0, "design"),
            ])
        });

        let (status, body) = call(repository, "/api/items").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|item| item["_id"].as_str())
            .collect();
        assert_eq!(ids, vec!["b2", "a1"]);
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_store_lists_an_empty_array() {
        let mut repository = MockItemRepository::new();
        repository.expect_list().return_once(|| Ok(Vec::new()));

        let (status, body) = call(repository, "/api/items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Array(Vec::new()));
    }

    #[rstest]
    #[actix_web::test]
    async fn known_item_is_returned() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id: &ItemId| id.as_ref() == "a1")
            .return_once(|_| Ok(Some(sample_item("a1", "Alpha", 10.0, "design"))));

        let (status, body) = call(repository, "/api/items/a1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["_id"], "a1");
        assert_eq!(body["name"], "Alpha");
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_item_is_not_found() {
        let mut repository = MockItemRepository::new();
        repository.expect_find_by_id().return_once(|_| Ok(None));

        let (status, body) = call(repository, "/api/items/zzz").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "code": "not_found", "message": ITEM_NOT_FOUND })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn not_found_body_is_the_traced_error_envelope() {
        let mut repository = MockItemRepository::new();
        repository.expect_find_by_id().return_once(|_| Ok(None));
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(repository))
                .wrap(Trace)
                .service(web::scope("/api").service(get_item)),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/items/zzz").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace-id header");
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({ "code": "not_found", "message": ITEM_NOT_FOUND, "traceId": trace_id })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_identifier_is_not_found_without_a_lookup() {
        let mut repository = MockItemRepository::new();
        repository.expect_find_by_id().never();

        let (status, body) = call(repository, "/api/items/not%20an%20id").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], ITEM_NOT_FOUND);
    }

    #[rstest]
    #[case(ItemRepositoryError::connection("refused"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(ItemRepositoryError::query("bad document"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[actix_web::test]
    async fn store_failures_map_to_server_errors(
        #[case] failure: ItemRepositoryError,
        #[case] expected: StatusCode,
    ) {
        let mut repository = MockItemRepository::new();
        repository.expect_list().return_once(move || Err(failure));

        let (status, body) = call(repository, "/api/items").await;

        assert_eq!(status, expected);
        assert!(body["message"].is_string());
    }
}
