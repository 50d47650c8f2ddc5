use super::*;

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User = serde_json::from_str(
        r#"{"id":3,"email":"a@b.com","is_admin":false,"is_active":true,"created_at":"2024-05-01T10:00:00"}"#,
    )
    .unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.full_name, None);
    assert_eq!(user.updated_at, None);
}

#[test]
fn registration_omits_missing_full_name() {
    let reg = Registration { email: "a@b.com".to_owned(), password: "secret123".to_owned(), full_name: None };
    assert_eq!(
        serde_json::to_value(&reg).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "secret123" })
    );
    assert_eq!(reg.credentials().email, "a@b.com");
}

#[test]
fn sweet_deserializes_api_payload() {
    let sweet: Sweet = serde_json::from_str(
        r#"{"id":9,"name":"Fudge","category":"Chocolate","price":3.5,"quantity":0,
            "description":null,"is_available":true,"is_in_stock":false,
            "created_at":"2024-05-01T10:00:00","updated_at":null}"#,
    )
    .unwrap();
    assert_eq!(sweet.name, "Fudge");
    assert!(!sweet.is_in_stock);
    assert_eq!(sweet.image_url, None);
}

#[test]
fn search_query_omits_empty_filters() {
    let query = SearchQuery { name: Some("choc".to_owned()), category: Some(String::new()), ..SearchQuery::default() };
    assert_eq!(query.query_pairs(), vec![("name", "choc".to_owned())]);
}

#[test]
fn search_query_includes_price_bounds() {
    let query = SearchQuery { min_price: Some(1.0), max_price: Some(4.25), ..SearchQuery::default() };
    assert_eq!(query.query_pairs(), vec![("min_price", "1".to_owned()), ("max_price", "4.25".to_owned())]);
    assert!(SearchQuery::default().is_empty());
}

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price(2.5), "$2.50");
    assert_eq!(format_price(10.0), "$10.00");
}
