//! Behaviour tests for the catalogue read and sign-in endpoints.
//!
//! Each request builds a fresh in-process app over the fixture catalogue,
//! so scenarios never need a database or a bound socket.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::http::Method;
use actix_web::{App, test as actix_test, web};
use product_hub::Trace;
use product_hub::domain::ports::{ItemRepository, LoginService};
use product_hub::domain::{CatalogueService, TRACE_ID_HEADER};
use product_hub::inbound::http::auth::{login, logout};
use product_hub::inbound::http::items::{get_item, list_items};
use product_hub::inbound::http::state::HttpState;
use product_hub::outbound::auth::ConfiguredLoginService;
use product_hub::outbound::document_store::JsonFileItemRepository;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

const LOGIN_EMAIL: &str = "curator@example.com";
const LOGIN_PASSWORD: &str = "correct horse";

struct Captured {
    status: u16,
    trace_id: Option<String>,
    body: Value,
}

struct ItemsWorld {
    repository: RefCell<Option<Arc<JsonFileItemRepository>>>,
    last: RefCell<Option<Captured>>,
}

impl ItemsWorld {
    fn new() -> Self {
        Self {
            repository: RefCell::new(None),
            last: RefCell::new(None),
        }
    }

    fn use_fixture_catalogue(&self) {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/items.json");
        let repository = JsonFileItemRepository::load(&path).expect("fixture catalogue loads");
        *self.repository.borrow_mut() = Some(Arc::new(repository));
    }

    fn use_empty_catalogue(&self) {
        *self.repository.borrow_mut() = Some(Arc::new(JsonFileItemRepository::from_items(
            Vec::new(),
        )));
    }

    fn http_state(&self) -> HttpState {
        let repository: Arc<dyn ItemRepository> = self
            .repository
            .borrow()
            .clone()
            .expect("catalogue configured");
        let login_service: Arc<dyn LoginService> =
            Arc::new(ConfiguredLoginService::new(LOGIN_EMAIL, LOGIN_PASSWORD));
        HttpState::new(CatalogueService::new(repository), login_service)
    }

    fn request(&self, method: Method, path: &str, payload: Option<Value>) {
        let state = web::Data::new(self.http_state());
        let path = path.to_owned();
        let captured = actix_rt::System::new().block_on(async move {
            let session =
                SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                    .cookie_secure(false)
                    .build();
            let app = actix_test::init_service(
                App::new().app_data(state).wrap(Trace).service(
                    web::scope("/api")
                        .wrap(session)
                        .service(list_items)
                        .service(get_item)
                        .service(login)
                        .service(logout),
                ),
            )
            .await;

            let mut request = actix_test::TestRequest::default()
                .method(method)
                .uri(&path);
            if let Some(payload) = payload {
                request = request.set_json(payload);
            }
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = actix_test::read_body(response).await;
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("json body")
            };
            Captured {
                status,
                trace_id,
                body,
            }
        });
        *self.last.borrow_mut() = Some(captured);
    }

    fn with_last<F>(&self, f: F)
    where
        F: FnOnce(&Captured),
    {
        let last = self.last.borrow();
        f(last.as_ref().expect("a request was made"));
    }
}

#[fixture]
fn world() -> ItemsWorld {
    ItemsWorld::new()
}

#[given("the fixture catalogue")]
fn the_fixture_catalogue(world: &ItemsWorld) {
    world.use_fixture_catalogue();
}

#[given("an empty catalogue")]
fn an_empty_catalogue(world: &ItemsWorld) {
    world.use_empty_catalogue();
}

#[when("the client lists items")]
fn the_client_lists_items(world: &ItemsWorld) {
    world.request(Method::GET, "/api/items", None);
}

#[when("the client fetches item {id}")]
fn the_client_fetches_item(world: &ItemsWorld, id: String) {
    world.request(Method::GET, &format!("/api/items/{id}"), None);
}

#[when("the client signs in with the configured credentials")]
fn the_client_signs_in(world: &ItemsWorld) {
    world.request(
        Method::POST,
        "/api/login",
        Some(json!({ "email": LOGIN_EMAIL, "password": LOGIN_PASSWORD })),
    );
}

#[when("the client signs in with a wrong password")]
fn the_client_signs_in_with_wrong_password(world: &ItemsWorld) {
    world.request(
        Method::POST,
        "/api/login",
        Some(json!({ "email": LOGIN_EMAIL, "password": "wrong" })),
    );
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &ItemsWorld, status: u16) {
    world.with_last(|last| assert_eq!(last.status, status));
}

#[then("the response lists {count} items")]
fn the_response_lists_items(world: &ItemsWorld, count: usize) {
    world.with_last(|last| {
        let items = last.body.as_array().expect("array body");
        assert_eq!(items.len(), count);
    });
}

#[then("the response item is named {name}")]
fn the_response_item_is_named(world: &ItemsWorld, name: String) {
    world.with_last(|last| {
        assert_eq!(last.body["name"], Value::String(name));
        assert!(last.body["_id"].is_string());
    });
}

#[then("the error message is {message}")]
fn the_error_message_is(world: &ItemsWorld, message: String) {
    world.with_last(|last| {
        assert_eq!(last.body["message"], Value::String(message));
    });
}

#[then("the error body carries the trace identifier")]
fn the_error_body_carries_the_trace_identifier(world: &ItemsWorld) {
    world.with_last(|last| {
        let header = last.trace_id.as_deref().expect("trace-id header");
        assert_eq!(last.body["traceId"], Value::String(header.to_owned()));
    });
}

#[then("the error body holds only the code, message and trace identifier")]
fn the_error_body_holds_only_the_envelope_fields(world: &ItemsWorld) {
    world.with_last(|last| {
        let header = last.trace_id.clone().expect("trace-id header");
        assert_eq!(
            last.body,
            json!({ "code": "not_found", "message": "Item not found", "traceId": header })
        );
    });
}

#[then("the client is redirected to {path}")]
fn the_client_is_redirected_to(world: &ItemsWorld, path: String) {
    world.with_last(|last| {
        assert_eq!(last.body["redirect"], Value::String(path));
    });
}

#[scenario(
    path = "tests/features/items_endpoints.feature",
    name = "Listing the fixture catalogue"
)]
fn listing_the_fixture_catalogue(world: ItemsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/items_endpoints.feature",
    name = "Listing an empty catalogue"
)]
fn listing_an_empty_catalogue(world: ItemsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/items_endpoints.feature",
    name = "Fetching a known item"
)]
fn fetching_a_known_item(world: ItemsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/items_endpoints.feature",
    name = "Fetching an unknown item"
)]
fn fetching_an_unknown_item(world: ItemsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/items_endpoints.feature",
    name = "Fetching a malformed identifier"
)]
fn fetching_a_malformed_identifier(world: ItemsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/items_endpoints.feature",
    name = "Signing in with the configured account"
)]
fn signing_in_with_the_configured_account(world: ItemsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/items_endpoints.feature",
    name = "Signing in with a wrong password"
)]
fn signing_in_with_a_wrong_password(world: ItemsWorld) {
    drop(world);
}
