use dentalab::{ContactClassification, ContactClassifier, PhoneNormalizer};

fn classifier() -> ContactClassifier {
    ContactClassifier::new(Some("+382".to_string()))
}

#[test]
fn test_email_classification() {
    assert_eq!(
        classifier().classify("doe@example.com"),
        ContactClassification::Email("doe@example.com".to_string())
    );
    assert_eq!(
        classifier().classify("  doe@example.com  "),
        ContactClassification::Email("doe@example.com".to_string())
    );
}

#[test]
fn test_email_requires_dot_after_last_at() {
    // "a@b" has no dot in the domain part and no digits either.
    assert_eq!(
        classifier().classify("a@b"),
        ContactClassification::Text("a@b".to_string())
    );
    // The dot must come after the last '@'.
    assert_eq!(
        classifier().classify("first.last@localhost"),
        ContactClassification::Text("first.last@localhost".to_string())
    );
}

#[test]
fn test_email_check_runs_before_phone_check() {
    // All-digit local part would normalize as a phone, but '@' wins.
    assert_eq!(
        classifier().classify("067123456@mail.com"),
        ContactClassification::Email("067123456@mail.com".to_string())
    );
}

#[test]
fn test_phone_classification() {
    assert_eq!(
        classifier().classify("0038167123456"),
        ContactClassification::Phone("+38167123456".to_string())
    );
    assert_eq!(
        classifier().classify("067123456"),
        ContactClassification::Phone("+38267123456".to_string())
    );
    assert_eq!(
        classifier().classify("+382 67 123 456"),
        ContactClassification::Phone("+38267123456".to_string())
    );
}

#[test]
fn test_short_number_falls_through_to_text() {
    assert_eq!(
        classifier().classify("12345"),
        ContactClassification::Text("12345".to_string())
    );
}

#[test]
fn test_empty_input_is_empty_text() {
    assert_eq!(
        classifier().classify(""),
        ContactClassification::Text(String::new())
    );
    assert_eq!(
        classifier().classify("   "),
        ContactClassification::Text(String::new())
    );
}

#[test]
fn test_free_text_is_returned_unmodified() {
    assert_eq!(
        classifier().classify("call me after 5pm"),
        ContactClassification::Text("call me after 5pm".to_string())
    );
}

#[test]
fn test_normalizer_without_country_code() {
    let normalizer = PhoneNormalizer::new(None);
    assert_eq!(
        normalizer.normalize("067123456"),
        Some("067123456".to_string())
    );
    assert_eq!(
        normalizer.normalize("0038167123456"),
        Some("+38167123456".to_string())
    );
}

#[test]
fn test_classify_is_deterministic() {
    let c = classifier();
    for raw in ["doe@example.com", "067123456", "hello there", ""] {
        assert_eq!(c.classify(raw), c.classify(raw));
    }
}
