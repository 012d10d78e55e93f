use crate::{
    error::Error,
    model::{attributes::Attributes, record::Record, relationships::Related},
    test_fixtures::{AUTHOR, PERSON, RAW_PERSON, register_fixtures},
};
use serde_json::json;

fn person() -> Record {
    register_fixtures();
    Record::new(PERSON).unwrap()
}

// ---- attribute binding -------------------------------------------------

#[test]
fn supports_direct_assignment() {
    let mut person = person();
    assert_eq!(person.get("firstName"), None);

    assert!(person.set("firstName", json!("John")));
    assert_eq!(person.get("firstName"), Some(&json!("John")));
}

#[test]
fn supports_constructor_assignment() {
    register_fixtures();
    let person = Record::from_payload(PERSON, &json!({ "firstName": "Joe" })).unwrap();

    assert_eq!(person.get("firstName"), Some(&json!("Joe")));
    assert_eq!(person.attributes().get("firstName"), Some(&json!("Joe")));
}

#[test]
fn camelizes_underscored_keys() {
    register_fixtures();
    let person = Record::from_payload(PERSON, &json!({ "first_name": "Joe" })).unwrap();
    assert_eq!(person.get("firstName"), Some(&json!("Joe")));
}

#[test]
fn camelizes_kebab_case_keys() {
    register_fixtures();
    let person = Record::from_payload(PERSON, &json!({ "first-name": "Joe" })).unwrap();
    assert_eq!(person.get("firstName"), Some(&json!("Joe")));
}

#[test]
fn does_not_camelize_when_disabled() {
    register_fixtures();
    let person = Record::from_payload(RAW_PERSON, &json!({ "first_name": "Joe" })).unwrap();

    assert_eq!(person.get("firstName"), None);
    assert_eq!(person.get("first_name"), Some(&json!("Joe")));
}

#[test]
fn syncs_with_attributes() {
    let mut person = person();
    assert!(person.attributes().is_empty());

    assert!(person.set("firstName", json!("John")));
    assert_eq!(person.attributes().get("firstName"), Some(&json!("John")));

    person.attributes_mut().insert("firstName", json!("Jane"));
    assert_eq!(person.get("firstName"), Some(&json!("Jane")));
}

#[test]
fn replacing_the_store_is_visible_immediately() {
    let mut person = person();
    assert!(person.set("firstName", json!("John")));

    let mut replacement = Attributes::new();
    replacement.insert("lastName", json!("Doe"));
    replacement.insert("nickname", json!("JD")); // undeclared, dropped
    person.set_attributes(replacement);

    assert_eq!(person.get("firstName"), None);
    assert_eq!(person.get("lastName"), Some(&json!("Doe")));
    assert_eq!(person.get("nickname"), None);
    assert_eq!(person.attributes().len(), 1);
}

// ---- enumeration -------------------------------------------------------

#[test]
fn declared_attributes_are_present_before_any_write() {
    let person = person();

    assert!(person.has_attribute("firstName"));
    assert!(person.has_attribute("lastName"));

    let keys: Vec<_> = person.keys().collect();
    assert_eq!(keys, vec!["firstName", "lastName"]);
}

#[test]
fn subclass_records_enumerate_inherited_attributes() {
    register_fixtures();
    let author = Record::new(AUTHOR).unwrap();

    let keys: Vec<_> = author.keys().collect();
    assert_eq!(keys, vec!["firstName", "lastName", "penName"]);
    assert!(author.has_attribute("firstName"));
}

// ---- relationship defaults ---------------------------------------------

#[test]
fn defaults_has_many_before_any_read() {
    register_fixtures();
    let author = Record::new(AUTHOR).unwrap();

    assert_eq!(author.relationship("books"), Some(&Related::Many(vec![])));
}

#[test]
fn defaults_has_one_before_any_read() {
    register_fixtures();
    let author = Record::new(AUTHOR).unwrap();

    assert_eq!(author.relationship("publisher"), Some(&Related::One(None)));
}

#[test]
fn relationships_are_seeded_without_payload_involvement() {
    register_fixtures();
    let author = Record::from_payload(AUTHOR, &json!({ "firstName": "Joe" })).unwrap();

    assert_eq!(author.relationships().len(), 2);
    assert!(author.relationship("books").unwrap().is_empty());
}

// ---- silent drop -------------------------------------------------------

#[test]
fn silently_drops_unknown_payload_keys() {
    register_fixtures();
    let person = Record::from_payload(PERSON, &json!({ "foo": "bar" })).unwrap();

    assert_eq!(person.get("foo"), None);
    assert!(!person.has_attribute("foo"));
    assert!(person.attributes().is_empty());
}

#[test]
fn drops_keys_declared_on_unrelated_models() {
    register_fixtures();
    // "title" is a declared attribute of Book, not of Person.
    let person = Record::from_payload(PERSON, &json!({ "title": "bar" })).unwrap();

    assert_eq!(person.get("title"), None);
    assert!(person.attributes().is_empty());
}

#[test]
fn drops_keys_declared_only_on_subclasses() {
    register_fixtures();
    // "extraThing" is declared on SpecialPerson, a subclass of Person.
    let person = Record::from_payload(PERSON, &json!({ "extraThing": "bar" })).unwrap();

    assert_eq!(person.get("extraThing"), None);
    assert!(person.attributes().is_empty());
}

#[test]
fn mixed_payloads_keep_declared_keys_only() {
    register_fixtures();
    let person = Record::from_payload(
        PERSON,
        &json!({ "first_name": "Joe", "foo": "bar", "extraThing": "x" }),
    )
    .unwrap();

    assert_eq!(person.get("firstName"), Some(&json!("Joe")));
    assert_eq!(person.attributes().len(), 1);
}

#[test]
fn set_rejects_undeclared_names_without_writing() {
    let mut person = person();

    assert!(!person.set("foo", json!("bar")));
    assert!(person.attributes().is_empty());
}

// ---- failure modes -----------------------------------------------------

#[test]
fn non_object_payloads_are_caller_misuse() {
    register_fixtures();

    let err = Record::from_payload(PERSON, &json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, Error::PayloadNotObject { kind: "an array" }));

    let err = Record::from_payload(PERSON, &json!("nope")).unwrap_err();
    assert!(matches!(err, Error::PayloadNotObject { kind: "a string" }));
}

#[test]
fn unknown_model_path_fails_construction() {
    register_fixtures();
    assert!(Record::new("test_fixtures::Nobody").is_err());
}

// ---- key collisions ----------------------------------------------------

#[test]
fn colliding_raw_keys_resolve_by_payload_iteration_order() {
    register_fixtures();
    // Both keys normalize to "firstName"; the payload map iterates in key
    // order, so "first_name" is applied after "firstName" and wins.
    let person = Record::from_payload(
        PERSON,
        &json!({ "firstName": "Camel", "first_name": "Snake" }),
    )
    .unwrap();

    assert_eq!(person.get("firstName"), Some(&json!("Snake")));
    assert_eq!(person.attributes().len(), 1);
}
