use super::*;

// =============================================================
// email
// =============================================================

#[test]
fn plausible_email_shapes() {
    assert!(is_plausible_email("a@b.com"));
    assert!(is_plausible_email("first.last@shop.co.uk"));
    assert!(!is_plausible_email("no-at-sign"));
    assert!(!is_plausible_email("@b.com"));
    assert!(!is_plausible_email("a@b"));
    assert!(!is_plausible_email("a@b@c.com"));
    assert!(!is_plausible_email("a b@c.com"));
    assert!(!is_plausible_email("a@.com"));
}

// =============================================================
// login / register
// =============================================================

#[test]
fn login_requires_both_fields() {
    let err = LoginForm::default().validate().unwrap_err();
    assert_eq!(err.message_for("email"), Some("Email is required"));
    assert_eq!(err.message_for("password"), Some("Password is required"));
}

#[test]
fn login_trims_email_but_not_password() {
    let form = LoginForm { email: "  a@b.com ".to_owned(), password: " pw ".to_owned() };
    let creds = form.validate().unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, " pw ");
}

#[test]
fn register_enforces_password_length() {
    let short = RegisterForm { email: "a@b.com".to_owned(), password: "short".to_owned(), ..RegisterForm::default() };
    let err = short.validate().unwrap_err();
    assert_eq!(err.message_for("password"), Some("Password must be at least 8 characters"));

    let long = RegisterForm { email: "a@b.com".to_owned(), password: "x".repeat(101), ..RegisterForm::default() };
    assert!(long.validate().unwrap_err().message_for("password").is_some());
}

#[test]
fn register_blank_full_name_is_omitted() {
    let form = RegisterForm {
        email: "a@b.com".to_owned(),
        password: "password1".to_owned(),
        full_name: "   ".to_owned(),
    };
    assert_eq!(form.validate().unwrap().full_name, None);
}

#[test]
fn register_reports_every_bad_field() {
    let form = RegisterForm { email: "bad".to_owned(), password: String::new(), full_name: "n".repeat(256) };
    let err = form.validate().unwrap_err();
    assert_eq!(err.errors.len(), 3);
}

// =============================================================
// sweet
// =============================================================

fn valid_sweet_form() -> SweetForm {
    SweetForm {
        name: "Fudge".to_owned(),
        category: "Chocolate".to_owned(),
        price: "2.50".to_owned(),
        quantity: "10".to_owned(),
        description: String::new(),
        image_url: String::new(),
    }
}

#[test]
fn sweet_form_builds_draft() {
    let draft = valid_sweet_form().validate().unwrap();
    assert_eq!(draft.name, "Fudge");
    assert!((draft.price - 2.5).abs() < f64::EPSILON);
    assert_eq!(draft.quantity, 10);
    assert_eq!(draft.description, None);
}

#[test]
fn sweet_form_rejects_out_of_range_price() {
    for price in ["0", "-1", "1000.01", "abc", ""] {
        let form = SweetForm { price: price.to_owned(), ..valid_sweet_form() };
        assert!(form.validate().unwrap_err().message_for("price").is_some(), "price {price:?}");
    }
}

#[test]
fn sweet_form_rejects_negative_or_fractional_quantity() {
    for quantity in ["-1", "1.5", ""] {
        let form = SweetForm { quantity: quantity.to_owned(), ..valid_sweet_form() };
        assert!(form.validate().unwrap_err().message_for("quantity").is_some(), "quantity {quantity:?}");
    }
    let zero = SweetForm { quantity: "0".to_owned(), ..valid_sweet_form() };
    assert_eq!(zero.validate().unwrap().quantity, 0);
}

#[test]
fn sweet_form_requires_name_and_category() {
    let form = SweetForm { name: " ".to_owned(), category: String::new(), ..valid_sweet_form() };
    let err = form.validate().unwrap_err();
    assert_eq!(err.message_for("name"), Some("Name is required"));
    assert_eq!(err.message_for("category"), Some("Category is required"));
}

#[test]
fn sweet_form_prefills_from_sweet() {
    let sweet = Sweet {
        id: 1,
        name: "Toffee".to_owned(),
        category: "Caramel".to_owned(),
        price: 1.25,
        quantity: 4,
        description: Some("Chewy".to_owned()),
        image_url: None,
        is_available: true,
        is_in_stock: true,
        created_at: String::new(),
        updated_at: None,
    };
    let form = SweetForm::from_sweet(&sweet);
    assert_eq!(form.price, "1.25");
    assert_eq!(form.description, "Chewy");
    assert_eq!(form.validate().unwrap().description.as_deref(), Some("Chewy"));
}

// =============================================================
// restock / search
// =============================================================

#[test]
fn restock_requires_positive_quantity() {
    assert_eq!(RestockForm { quantity: "5".to_owned() }.validate(), Ok(5));
    for raw in ["0", "-3", "x", ""] {
        assert!(RestockForm { quantity: raw.to_owned() }.validate().is_err(), "restock {raw:?}");
    }
}

#[test]
fn search_form_drops_empty_fields() {
    let form = SearchForm { name: "choc".to_owned(), ..SearchForm::default() };
    let query = form.validate().unwrap();
    assert_eq!(query.query_pairs(), vec![("name", "choc".to_owned())]);
}

#[test]
fn search_form_rejects_inverted_range() {
    let form = SearchForm { min_price: "5".to_owned(), max_price: "2".to_owned(), ..SearchForm::default() };
    assert!(form.validate().unwrap_err().message_for("max_price").is_some());
}

#[test]
fn search_form_rejects_negative_bound() {
    let form = SearchForm { min_price: "-1".to_owned(), ..SearchForm::default() };
    assert!(form.validate().unwrap_err().message_for("min_price").is_some());
}
