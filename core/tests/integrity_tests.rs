use std::rc::Rc;

use propkit::{
    freeze_all, get_prototype_of, is_any_frozen, own_property_descriptors, Property, Record,
    RecordError, Value,
};

fn record(rec: Record) -> Value {
    Value::record(rec)
}

fn with_record<T>(value: &Value, f: impl FnOnce(&mut Record) -> T) -> T {
    let rec = value.as_record().expect("record value");
    f(&mut *rec.borrow_mut())
}

// ── is_any_frozen ──

#[test]
fn unrestricted_record_is_not_frozen() {
    let rec = record(Record::new().with_value("a", 1));
    assert!(!is_any_frozen(&rec));
}

#[test]
fn frozen_record_reports_true() {
    let rec = record(Record::new().with_value("a", 1));
    with_record(&rec, Record::freeze);
    assert!(is_any_frozen(&rec));
}

#[test]
fn sealed_but_writable_record_reports_true() {
    let rec = record(Record::new().with_value("a", 1));
    with_record(&rec, Record::seal);
    assert!(with_record(&rec, |r| r.is_sealed() && !r.is_frozen()));
    assert!(is_any_frozen(&rec));
}

#[test]
fn non_extensible_record_with_configurable_properties_reports_true() {
    let rec = record(Record::new().with_value("a", 1));
    with_record(&rec, Record::prevent_extensions);
    assert!(with_record(&rec, |r| !r.is_sealed() && !r.is_frozen()));
    assert!(is_any_frozen(&rec));
}

#[test]
fn locked_properties_alone_do_not_count() {
    let rec = record(Record::new().with_property(
        "a",
        Property::with_attributes(Value::Number(1.0), false, true, false),
    ));
    assert!(!is_any_frozen(&rec));
}

#[test]
fn empty_non_extensible_record_is_frozen_and_sealed() {
    let rec = record(Record::new());
    with_record(&rec, Record::prevent_extensions);
    assert!(with_record(&rec, |r| r.is_frozen() && r.is_sealed()));
}

#[test]
fn primitives_report_true() {
    assert!(is_any_frozen(&Value::Number(1.0)));
    assert!(is_any_frozen(&Value::from("text")));
    assert!(is_any_frozen(&Value::Null));
}

// ── freeze_all ──

#[test]
fn frozen_copy_is_a_new_record_with_same_contents() {
    let rec = record(Record::new().with_value("a", 1).with_value("b", "two"));
    let frozen = freeze_all(&rec).expect("freeze");

    assert_ne!(frozen, rec);
    let keys: Vec<String> = own_property_descriptors(&frozen)
        .expect("descriptors")
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert!(with_record(&frozen, |r| r.is_frozen()));
    assert_eq!(with_record(&frozen, |r| r.get("b")), Some(Value::from("two")));
}

#[test]
fn frozen_copy_rejects_every_mutation() {
    let rec = record(Record::new().with_value("a", 1));
    let frozen = freeze_all(&rec).expect("freeze");

    with_record(&frozen, |r| {
        assert!(!r.set("a", Value::Number(2.0)));
        assert_eq!(r.get("a"), Some(Value::Number(1.0)));
        assert!(!r.set("b", Value::Number(2.0)));
        assert!(!r.has_own_property("b"));
        assert!(!r.delete("a"));
        assert_eq!(
            r.try_set("a", Value::Number(2.0)),
            Err(RecordError::ReadOnly { key: "a".into() })
        );
        assert_eq!(
            r.try_set("b", Value::Number(2.0)),
            Err(RecordError::NotExtensible { key: "b".into() })
        );
        assert_eq!(
            r.try_delete("a"),
            Err(RecordError::NonConfigurable { key: "a".into() })
        );
    });
}

#[test]
fn source_stays_mutable_after_freeze_all() {
    let rec = record(Record::new().with_value("a", 1));
    let _frozen = freeze_all(&rec).expect("freeze");

    assert!(!is_any_frozen(&rec));
    with_record(&rec, |r| {
        assert!(r.set("a", Value::Number(2.0)));
        assert!(r.set("b", Value::Number(3.0)));
    });
}

#[test]
fn freeze_is_shallow() {
    let inner = record(Record::new().with_value("n", 1));
    let rec = record(Record::new().with_value("inner", inner.clone()));
    let frozen = freeze_all(&rec).expect("freeze");

    let shared = with_record(&frozen, |r| r.get("inner")).expect("inner");
    assert_eq!(shared, inner);
    assert!(!is_any_frozen(&shared));
    with_record(&shared, |r| assert!(r.set("n", Value::Number(5.0))));
    assert_eq!(with_record(&inner, |r| r.get("n")), Some(Value::Number(5.0)));
}

#[test]
fn frozen_copy_keeps_prototype_link() {
    let proto = record(Record::new().with_value("shared", true));
    let proto_ref = proto.as_record().expect("record").clone();
    let rec = record(Record::with_prototype(Some(proto_ref.clone())).with_value("a", 1));
    let frozen = freeze_all(&rec).expect("freeze");

    let Value::Record(link) = get_prototype_of(&frozen).expect("prototype") else {
        panic!("expected a prototype record");
    };
    assert!(Rc::ptr_eq(&link, &proto_ref));
    assert_eq!(with_record(&frozen, |r| r.get("shared")), Some(Value::Boolean(true)));
}

#[test]
fn frozen_copy_of_frozen_record_is_still_frozen() {
    let rec = record(Record::new().with_value("a", 1));
    with_record(&rec, Record::freeze);
    let copy = freeze_all(&rec).expect("freeze");
    assert!(with_record(&copy, |r| r.is_frozen()));
}

#[test]
fn freeze_all_rejects_primitives() {
    assert_eq!(
        freeze_all(&Value::Number(1.0)),
        Err(RecordError::NotARecord { type_name: "number" })
    );
    assert_eq!(freeze_all(&Value::Undefined), Err(RecordError::NullishConversion));
}
