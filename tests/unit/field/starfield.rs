use super::*;

#[test]
fn default_field_has_expected_counts() {
    let field = StarField::generate(&FieldCounts::default());
    assert_eq!(field.by_category(FieldCategory::Static).count(), 150);
    assert_eq!(field.by_category(FieldCategory::Twinkle).count(), 40);
    assert_eq!(field.by_category(FieldCategory::Shooting).count(), 6);
    assert_eq!(field.by_category(FieldCategory::Cloud).count(), 5);
    assert_eq!(field.by_category(FieldCategory::Crater).count(), 15);
    assert_eq!(field.elements.len(), 216);
}

#[test]
fn static_filter_yields_unique_ids_in_order() {
    let field = StarField::generate(&FieldCounts::default());
    let ids: Vec<&str> = field
        .by_category(FieldCategory::Static)
        .map(|e| e.id.as_str())
        .collect();
    let expected: Vec<String> = (0..150).map(|i| format!("static-{i}")).collect();
    assert_eq!(ids, expected);
}

#[test]
fn fingerprint_is_stable_and_sensitive() {
    let counts = FieldCounts::default();
    let a = StarField::generate(&counts);
    let b = StarField::generate(&counts);
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());

    let fewer = StarField::generate(&FieldCounts {
        static_stars: 149,
        ..counts
    });
    assert_ne!(a.fingerprint(), fewer.fingerprint());
}

#[test]
fn missing_field_renders_nothing() {
    assert_eq!(elements_or_empty(None, FieldCategory::Static).count(), 0);
    let field = StarField::generate(&FieldCounts::default());
    assert_eq!(
        elements_or_empty(Some(&field), FieldCategory::Twinkle).count(),
        40
    );
}

#[test]
fn empty_counts_give_empty_field() {
    let field = StarField::generate(&FieldCounts {
        static_stars: 0,
        twinkling_stars: 0,
        shooting_stars: 0,
        clouds: 0,
        craters: 0,
    });
    assert!(field.elements.is_empty());
    assert!(field.shooting_stars.is_empty());
}
