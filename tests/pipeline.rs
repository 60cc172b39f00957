//! End-to-end pipeline tests: scripted transport, in-memory storage,
//! recording navigator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};

use tavolo::adapters::http::MockTransport;
use tavolo::adapters::navigation::RecordingNavigator;
use tavolo::adapters::storage::MemoryStore;
use tavolo::api::{ApiClient, ApiError};
use tavolo::config::ApiConfig;
use tavolo::domain::{RestaurantDraft, Session};
use tavolo::ports::{KeyValueStore, Method, RequestBody};
use tavolo::session::{SessionStore, TOKEN_KEY};
use tavolo::validation::{LoginInput, RegisterInput, Schema};

struct Harness {
    storage: Arc<MemoryStore>,
    session: Arc<SessionStore>,
    transport: Arc<MockTransport>,
    navigator: Arc<RecordingNavigator>,
    client: ApiClient,
}

fn harness(transport: MockTransport) -> Harness {
    let storage = Arc::new(MemoryStore::new());
    let session = Arc::new(SessionStore::new(storage.clone()));
    let transport = Arc::new(transport);
    let navigator = Arc::new(RecordingNavigator::new());
    let client = ApiClient::new(
        ApiConfig::new("http://localhost:4000"),
        transport.clone(),
        storage.clone(),
        session.clone(),
        navigator.clone(),
    );
    Harness {
        storage,
        session,
        transport,
        navigator,
        client,
    }
}

fn user_json(name: &str) -> Value {
    json!({
        "id": format!("id-{name}"),
        "uniqueID": format!("pub-{name}"),
        "email": format!("{name}@b.co"),
        "username": name,
        "createdAt": "2024-01-10T09:00:00Z",
        "updatedAt": "2024-01-10T09:00:00Z"
    })
}

fn restaurant_json(id: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "name": "Trattoria",
        "isPublished": false,
        "userId": "id-alice",
        "createdAt": "2024-02-01T10:00:00Z",
        "updatedAt": "2024-02-01T10:00:00Z"
    })
}

fn body_json(body: &RequestBody) -> &Value {
    match body {
        RequestBody::Json(value) => value,
        other => panic!("expected a JSON body, got {other:?}"),
    }
}

// Scenario: register, then list own restaurants with the fresh token.
#[tokio::test]
async fn register_then_list_own() {
    let transport = MockTransport::new()
        .with_json(200, json!({"token": "T", "user": user_json("alice")}))
        .with_json(200, json!({"restaurants": []}));
    let h = harness(transport);

    let fired = Arc::new(AtomicUsize::new(0));
    let seen = fired.clone();
    h.session.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let input = RegisterInput::parse(&json!({
        "email": "a@b.co",
        "username": "alice",
        "password": "123456"
    }))
    .unwrap();
    let auth = h.client.register(&input).await.unwrap();
    assert_eq!(auth.token, "T");
    assert!(h.session.current().is_authenticated());
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    let restaurants = h.client.list_own().await.unwrap();
    assert!(restaurants.is_empty());

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://localhost:4000/auth/register");
    assert_eq!(requests[0].header("Authorization"), None);
    assert_eq!(requests[1].url, "http://localhost:4000/restaurants");
    assert_eq!(requests[1].header("Authorization"), Some("Bearer T"));
}

// Scenario: a 401 clears the token, resets the session, emits exactly one
// /login signal, and still rejects the caller with status 401.
#[tokio::test]
async fn unauthorized_recovery() {
    let transport = MockTransport::new().with_json(401, json!({"error": {"message": "expired"}}));
    let h = harness(transport);
    h.session
        .set_authenticated(serde_json::from_value(user_json("alice")).unwrap(), "T".to_string())
        .unwrap();
    assert_eq!(h.storage.get(TOKEN_KEY).unwrap().as_deref(), Some("T"));

    let error = h.client.list_own().await.unwrap_err();
    assert_eq!(error.status(), Some(401));
    assert!(matches!(error, ApiError::Unauthorized { .. }));

    assert_eq!(h.storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(h.session.current(), Session::Anonymous);
    assert_eq!(h.navigator.routes(), ["/login"]);
}

// Scenario: a NaN-ish location normalizes away and the cleaned payload
// omits the key entirely.
#[tokio::test]
async fn location_normalization_reaches_the_wire() {
    let transport =
        MockTransport::new().with_json(200, json!({"restaurant": restaurant_json("r1", "trattoria")}));
    let h = harness(transport);

    let draft = RestaurantDraft::parse(&json!({
        "name": "Trattoria",
        "location": {"lat": null, "lng": 139.6}
    }))
    .unwrap();
    assert!(draft.location.is_none());

    h.client.create(&draft).await.unwrap();

    let requests = h.transport.requests();
    let body = body_json(&requests[0].body);
    assert!(body.get("location").is_none());
    assert_eq!(body["name"], "Trattoria");
}

// Scenario: removing the featured menu item clears the featured dish and
// the payload carries an explicit null to tell the backend.
#[tokio::test]
async fn featured_dish_clear_serializes_null() {
    let transport =
        MockTransport::new().with_json(200, json!({"restaurant": restaurant_json("r1", "trattoria")}));
    let h = harness(transport);

    let mut draft = RestaurantDraft::parse(&json!({
        "name": "Trattoria",
        "menuItems": [
            {"id": "m1", "name": "Carbonara", "price": "1400"},
            {"id": "m2", "name": "Tiramisu", "price": "600"}
        ],
        "featuredDish": {"menuItemId": "m2"}
    }))
    .unwrap();
    draft.remove_menu_item("m2");

    h.client.patch("r1", &draft).await.unwrap();

    let requests = h.transport.requests();
    let body = body_json(&requests[0].body);
    assert!(body["featuredDish"].is_null());
    assert_eq!(body["menuItems"].as_array().unwrap().len(), 1);
}

// Scenario: patching with isPublished=true issues the patch first and the
// publish toggle second, in exactly that order.
#[tokio::test]
async fn publish_toggle_ordering() {
    let published = {
        let mut r = restaurant_json("r1", "trattoria");
        r["isPublished"] = json!(true);
        r
    };
    let transport = MockTransport::new()
        .with_json(200, json!({"restaurant": restaurant_json("r1", "trattoria")}))
        .with_json(200, json!({"restaurant": published}));
    let h = harness(transport);

    let draft = RestaurantDraft::parse(&json!({"name": "X", "isPublished": true})).unwrap();
    let restaurant = h.client.patch("r1", &draft).await.unwrap();
    assert!(restaurant.is_published);

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Patch);
    assert_eq!(requests[0].url, "http://localhost:4000/restaurants/r1");
    assert_eq!(body_json(&requests[0].body)["isPublished"], json!(true));
    assert_eq!(requests[1].method, Method::Patch);
    assert_eq!(requests[1].url, "http://localhost:4000/restaurants/r1/publish");
    assert!(matches!(requests[1].body, RequestBody::Empty));
}

// The toggle failing does not roll back the patch; the error surfaces.
#[tokio::test]
async fn publish_toggle_failure_surfaces() {
    let transport = MockTransport::new()
        .with_json(200, json!({"restaurant": restaurant_json("r1", "trattoria")}))
        .with_json(500, json!({"message": "publish failed"}));
    let h = harness(transport);

    let draft = RestaurantDraft::parse(&json!({"name": "X", "isPublished": true})).unwrap();
    let error = h.client.patch("r1", &draft).await.unwrap_err();
    assert_eq!(error.status(), Some(500));
    assert_eq!(h.transport.request_count(), 2);
}

// Scenario: slug regeneration returns the fresh slug, and the next
// get_own simply reflects whatever the backend holds.
#[tokio::test]
async fn slug_regeneration() {
    let transport = MockTransport::new()
        .with_json(200, json!({"restaurant": restaurant_json("r1", "new-slug")}))
        .with_json(200, json!({"restaurant": restaurant_json("r1", "new-slug")}));
    let h = harness(transport);

    let restaurant = h.client.regenerate_slug("r1").await.unwrap();
    assert_eq!(restaurant.slug, "new-slug");

    let fetched = h.client.get_own("r1").await.unwrap();
    assert_eq!(fetched.slug, "new-slug");

    let requests = h.transport.requests();
    assert_eq!(
        requests[0].url,
        "http://localhost:4000/restaurants/r1/regenerate-slug"
    );
    assert_eq!(requests[0].method, Method::Patch);
}

// Bearer header present iff the durable token is present at request time.
#[tokio::test]
async fn bearer_follows_durable_token() {
    let transport = MockTransport::new()
        .with_json(200, json!({"data": {"restaurants": []}}))
        .with_json(200, json!({"data": {"restaurants": []}}));
    let h = harness(transport);

    h.client.list_public().await.unwrap();
    h.storage.set(TOKEN_KEY, "T2").unwrap();
    h.client.list_public().await.unwrap();

    let requests = h.transport.requests();
    assert_eq!(requests[0].header("Authorization"), None);
    assert_eq!(requests[1].header("Authorization"), Some("Bearer T2"));
}

// Public envelope parsing: the documented shapes succeed, anything else
// is a structured shape error.
#[tokio::test]
async fn public_envelope_shapes() {
    let transport = MockTransport::new()
        .with_json(200, json!({"data": {"restaurant": restaurant_json("r1", "trattoria")}}))
        .with_json(200, json!({"restaurant": restaurant_json("r1", "trattoria")}));
    let h = harness(transport);

    let restaurant = h.client.get_public_by_slug("trattoria").await.unwrap();
    assert_eq!(restaurant.slug, "trattoria");

    // no {data: ...} wrapper: structurally wrong for a public endpoint
    let error = h.client.get_public_by_slug("trattoria").await.unwrap_err();
    assert!(matches!(error, ApiError::UnexpectedShape(_)));
}

// Unknown public slug renders as NotFound, a distinct error kind.
#[tokio::test]
async fn public_slug_not_found() {
    let transport =
        MockTransport::new().with_json(404, json!({"error": {"message": "No such restaurant"}}));
    let h = harness(transport);

    let error = h.client.get_public_by_slug("gone").await.unwrap_err();
    assert!(matches!(error, ApiError::NotFound { ref message } if message == "No such restaurant"));
}

// Login transitions a guest session to authenticated.
#[tokio::test]
async fn login_upgrades_guest_session() {
    let transport =
        MockTransport::new().with_json(200, json!({"token": "T", "user": user_json("alice")}));
    let h = harness(transport);
    h.session.set_guest().unwrap();

    let input = LoginInput::parse(&json!({"email": "a@b.co", "password": "123456"})).unwrap();
    h.client.login(&input).await.unwrap();

    assert_eq!(h.session.current().token(), Some("T"));
    assert_eq!(h.storage.get(TOKEN_KEY).unwrap().as_deref(), Some("T"));
}

// Transport failures surface without retries and without side effects.
#[tokio::test]
async fn network_error_is_transport_failure() {
    let transport = MockTransport::new().with_network_error("connection refused");
    let h = harness(transport);

    let error = h.client.list_own().await.unwrap_err();
    assert!(matches!(error, ApiError::Transport(_)));
    assert_eq!(error.status(), None);
    assert_eq!(h.navigator.routes(), Vec::<String>::new());
    assert_eq!(h.transport.request_count(), 1);
}

// Delete resolves on an empty-object body.
#[tokio::test]
async fn delete_accepts_empty_envelope() {
    let transport = MockTransport::new().with_json(200, json!({}));
    let h = harness(transport);

    h.client.delete_restaurant("r1").await.unwrap();
    let requests = h.transport.requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].url, "http://localhost:4000/restaurants/r1");
}

// Upload: multipart under the `image` field, URL out of the envelope.
#[tokio::test]
async fn upload_image_round_trip() {
    let transport = MockTransport::new()
        .with_json(200, json!({"data": {"url": "https://cdn.tavolo.app/i/abc.jpg"}}));
    let h = harness(transport);

    let url = h
        .client
        .upload_image("cover.jpg", "image/jpeg", vec![0xFF, 0xD8])
        .await
        .unwrap();
    assert_eq!(url, "https://cdn.tavolo.app/i/abc.jpg");

    let requests = h.transport.requests();
    match &requests[0].body {
        RequestBody::Multipart(file) => {
            assert_eq!(file.field, "image");
            assert_eq!(file.content_type, "image/jpeg");
        }
        other => panic!("expected multipart body, got {other:?}"),
    }
    // multipart sets its own content type with the boundary
    assert_eq!(requests[0].header("Content-Type"), None);
}
