use super::*;

#[test]
fn set_field_and_field_value_address_the_same_slot() {
    let mut form = SweetForm::default();
    for field in ["name", "category", "price", "quantity", "description", "image_url"] {
        set_field(&mut form, field, format!("{field}-value"));
    }
    assert_eq!(form.name, "name-value");
    assert_eq!(form.image_url, "image_url-value");
    assert_eq!(field_value(&form, "price"), "price-value");
    assert_eq!(field_value(&form, "quantity"), "quantity-value");
}

#[test]
fn unknown_fields_are_ignored() {
    let mut form = SweetForm::default();
    set_field(&mut form, "colour", "red".into());
    assert_eq!(form, SweetForm::default());
    assert_eq!(field_value(&form, "colour"), "");
}

#[test]
fn editor_mode_titles_follow_the_action() {
    assert_eq!(EditorMode::Create.heading(), "Add New Sweet");
    assert_eq!(EditorMode::Edit(3).heading(), "Edit Sweet");
    assert_eq!(EditorMode::Create.success(), "Sweet created successfully");
    assert_eq!(EditorMode::Edit(3).success(), "Sweet updated successfully");
    assert_eq!(EditorMode::Edit(3).failure(), "Failed to update sweet");
}

fn sweet(quantity: i64) -> Sweet {
    Sweet {
        id: 4,
        name: "Toffee".into(),
        category: "Candy".into(),
        price: 1.25,
        quantity,
        description: None,
        image_url: None,
        is_available: true,
        is_in_stock: quantity > 0,
        created_at: "2024-05-01T10:00:00".into(),
        updated_at: None,
    }
}

#[test]
fn refreshed_form_replaces_untouched_prefill() {
    let prefill = SweetForm::from_sweet(&sweet(3));
    let fresh = refreshed_form(&prefill, &prefill, &sweet(9)).unwrap();
    assert_eq!(fresh.quantity, "9");
}

#[test]
fn refreshed_form_keeps_admin_edits() {
    let prefill = SweetForm::from_sweet(&sweet(3));
    let mut edited = prefill.clone();
    edited.name = "Butter Toffee".into();
    assert_eq!(refreshed_form(&edited, &prefill, &sweet(9)), None);
}
