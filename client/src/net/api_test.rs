use futures::executor::block_on;

use super::*;
use crate::net::http::{Method, RequestBody};
use crate::net::testing::{ScriptedTransport, sweet_json, test_api, user_json};
use crate::state::storage::MemoryTokens;

#[test]
fn endpoint_helpers_format_expected_paths() {
    assert_eq!(sweet_endpoint(12), "/api/sweets/12");
    assert_eq!(restock_endpoint(4), "/api/inventory/restock/4");
}

#[test]
fn bearer_is_read_from_storage_at_call_time() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!([])).reply(200, serde_json::json!([]));
    let tokens = MemoryTokens::default();
    let api = test_api(&transport, &tokens);

    block_on(api.list_sweets()).unwrap();
    tokens.save("tok-1");
    block_on(api.list_sweets()).unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].bearer, None);
    assert_eq!(sent[1].bearer.as_deref(), Some("tok-1"));
}

#[test]
fn base_url_prefixes_paths() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!(["Chocolate"]));
    let api = ApiClient::new(transport.clone(), MemoryTokens::default(), "http://shop.local");

    let categories = block_on(api.categories()).unwrap();
    assert_eq!(categories, vec!["Chocolate".to_owned()]);
    assert_eq!(transport.sent()[0].path, "http://shop.local/api/sweets/categories/list");
}

#[test]
fn non_success_status_maps_to_api_error_with_detail() {
    let transport = ScriptedTransport::default();
    transport.reply(404, serde_json::json!({ "detail": "Sweet not found" }));
    let api = test_api(&transport, &MemoryTokens::default());

    let err = block_on(api.get_sweet(99)).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, detail: "Sweet not found".to_owned() });
}

#[test]
fn transport_failure_surfaces_as_transport_error() {
    let transport = ScriptedTransport::default();
    transport.fail("connection refused");
    let api = test_api(&transport, &MemoryTokens::default());

    let err = block_on(api.list_sweets()).unwrap_err();
    assert_eq!(err, ApiError::Transport("connection refused".to_owned()));
}

#[test]
fn malformed_success_body_is_decode_error() {
    let transport = ScriptedTransport::default();
    transport.reply_raw(200, "not json");
    let api = test_api(&transport, &MemoryTokens::default());

    assert!(matches!(block_on(api.list_sweets()), Err(ApiError::Decode(_))));
}

#[test]
fn login_posts_form_encoded_username_and_password() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!({ "access_token": "tok", "token_type": "bearer" }));
    let api = test_api(&transport, &MemoryTokens::default());

    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let token = block_on(api.login(&creds)).unwrap();
    assert_eq!(token.access_token, "tok");

    let sent = &transport.sent()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, LOGIN_ENDPOINT);
    assert_eq!(
        sent.body,
        RequestBody::Form(vec![
            ("username".to_owned(), "a@b.com".to_owned()),
            ("password".to_owned(), "pw".to_owned()),
        ])
    );
}

#[test]
fn register_posts_json_and_returns_server_identity() {
    let transport = ScriptedTransport::default();
    transport.reply(201, user_json(5, "new@b.com", false));
    let api = test_api(&transport, &MemoryTokens::default());

    let reg = Registration {
        email: "new@b.com".to_owned(),
        password: "secret123".to_owned(),
        full_name: Some("New".to_owned()),
    };
    let user = block_on(api.register(&reg)).unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(
        transport.sent()[0].body,
        RequestBody::Json(serde_json::json!({ "email": "new@b.com", "password": "secret123", "full_name": "New" }))
    );
}

#[test]
fn search_omits_empty_category() {
    let transport = ScriptedTransport::default();
    transport.reply(200, serde_json::json!([sweet_json(1, "Chocolate Bar", 3)]));
    let api = test_api(&transport, &MemoryTokens::default());

    let query = SearchQuery { name: Some("choc".to_owned()), category: Some(String::new()), ..SearchQuery::default() };
    let found = block_on(api.search_sweets(&query)).unwrap();
    assert_eq!(found.len(), 1);

    let sent = &transport.sent()[0];
    assert_eq!(sent.path, SEARCH_ENDPOINT);
    assert_eq!(sent.query, vec![("name".to_owned(), "choc".to_owned())]);
}

#[test]
fn delete_accepts_empty_no_content_body() {
    let transport = ScriptedTransport::default();
    transport.reply_raw(204, "");
    let api = test_api(&transport, &MemoryTokens::with_token("admin"));

    block_on(api.delete_sweet(3)).unwrap();
    let sent = &transport.sent()[0];
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.path, "/api/sweets/3");
}

#[test]
fn restock_sends_quantity_as_query() {
    let transport = ScriptedTransport::default();
    transport.reply(
        200,
        serde_json::json!({
            "message": "Sweet 'Fudge' restocked successfully",
            "old_quantity": 1,
            "new_quantity": 11,
            "added_quantity": 10,
        }),
    );
    let api = test_api(&transport, &MemoryTokens::with_token("admin"));

    let result = block_on(api.restock(4, 10)).unwrap();
    assert_eq!(result.new_quantity, 11);
    let sent = &transport.sent()[0];
    assert_eq!(sent.path, "/api/inventory/restock/4");
    assert_eq!(sent.query, vec![("quantity".to_owned(), "10".to_owned())]);
    assert_eq!(sent.body, RequestBody::Empty);
}

#[test]
fn purchase_posts_sweet_and_quantity() {
    let transport = ScriptedTransport::default();
    transport.reply(
        201,
        serde_json::json!({
            "id": 1, "user_id": 2, "sweet_id": 7, "quantity": 1,
            "unit_price": 2.5, "total_price": 2.5, "status": "completed",
            "created_at": "2024-05-01T10:00:00", "sweet_name": "Fudge", "user_email": "a@b.com",
        }),
    );
    let api = test_api(&transport, &MemoryTokens::with_token("tok"));

    let purchase = block_on(api.purchase(7, 1)).unwrap();
    assert_eq!(purchase.sweet_name.as_deref(), Some("Fudge"));
    assert_eq!(
        transport.sent()[0].body,
        RequestBody::Json(serde_json::json!({ "sweet_id": 7, "quantity": 1 }))
    );
}
