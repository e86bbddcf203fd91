use std::cell::RefCell;
use std::rc::Rc;

use propkit::runtime::value::object::prototype::{prototype_chain, set_prototype_of};
use propkit::{Property, PropertyDescriptor, Record, RecordError, RecordRef, Value};

fn handle(rec: Record) -> RecordRef {
    Rc::new(RefCell::new(rec))
}

// ── define_own_property ──

#[test]
fn define_new_property_defaults_to_all_false() {
    let mut rec = Record::new();
    assert!(rec.define_own_property("a", PropertyDescriptor::default().value(Value::Number(1.0))));
    assert_eq!(
        rec.get_own_property("a"),
        Some(&Property::with_attributes(Value::Number(1.0), false, false, false))
    );
}

#[test]
fn redefine_keeps_unspecified_attributes() {
    let mut rec = Record::new().with_value("a", 1);
    assert!(rec.define_own_property("a", PropertyDescriptor::default().writable(false)));
    assert_eq!(
        rec.get_own_property("a"),
        Some(&Property::with_attributes(Value::Number(1.0), false, true, true))
    );
}

#[test]
fn non_configurable_property_cannot_be_reconfigured() {
    let mut rec = Record::new().with_property(
        "a",
        Property::with_attributes(Value::Number(1.0), true, true, false),
    );
    assert!(!rec.define_own_property("a", PropertyDescriptor::default().configurable(true)));
    assert!(!rec.define_own_property("a", PropertyDescriptor::default().enumerable(false)));
    // writable may still be dropped, after which it is permanent
    assert!(rec.define_own_property("a", PropertyDescriptor::default().writable(false)));
    assert!(!rec.define_own_property("a", PropertyDescriptor::default().writable(true)));
    assert_eq!(
        rec.try_define_own_property("a", PropertyDescriptor::default().value(Value::Number(2.0))),
        Err(RecordError::NonConfigurable { key: "a".into() })
    );
}

#[test]
fn non_extensible_record_rejects_new_definitions() {
    let mut rec = Record::new();
    rec.prevent_extensions();
    assert_eq!(
        rec.try_define_own_property("a", PropertyDescriptor::data(Value::Null)),
        Err(RecordError::NotExtensible { key: "a".into() })
    );
}

// ── set / delete ──

#[test]
fn set_updates_and_appends() {
    let mut rec = Record::new().with_value("a", 1);
    assert!(rec.set("a", Value::Number(2.0)));
    assert!(rec.set("b", Value::Number(3.0)));
    assert_eq!(rec.own_keys(), vec!["a", "b"]);
    assert_eq!(rec.get("a"), Some(Value::Number(2.0)));
}

#[test]
fn inherited_read_only_property_blocks_assignment() {
    let proto = handle(Record::new().with_property(
        "locked",
        Property::with_attributes(Value::Number(1.0), false, true, true),
    ));
    let mut rec = Record::with_prototype(Some(proto));
    assert_eq!(
        rec.try_set("locked", Value::Number(2.0)),
        Err(RecordError::ReadOnly { key: "locked".into() })
    );
    assert!(!rec.has_own_property("locked"));
    assert_eq!(rec.get("locked"), Some(Value::Number(1.0)));
}

#[test]
fn inherited_writable_property_is_shadowed() {
    let proto = handle(Record::new().with_value("x", 1));
    let mut rec = Record::with_prototype(Some(proto.clone()));
    assert!(rec.set("x", Value::Number(2.0)));
    assert_eq!(rec.get("x"), Some(Value::Number(2.0)));
    assert_eq!(proto.borrow().get("x"), Some(Value::Number(1.0)));
}

#[test]
fn delete_preserves_order_of_remaining_keys() {
    let mut rec = Record::new()
        .with_value("a", 1)
        .with_value("b", 2)
        .with_value("c", 3);
    assert!(rec.delete("b"));
    assert!(rec.delete("missing"));
    assert_eq!(rec.own_keys(), vec!["a", "c"]);
}

#[test]
fn sealed_record_allows_value_changes_only() {
    let mut rec = Record::new().with_value("a", 1);
    rec.seal();
    assert!(rec.set("a", Value::Number(5.0)));
    assert!(!rec.set("b", Value::Number(1.0)));
    assert!(!rec.delete("a"));
    assert!(rec.is_sealed());
    assert!(!rec.is_frozen());
}

// ── prototype links ──

#[test]
fn prototype_cycles_are_rejected() {
    let a = handle(Record::new());
    let b = handle(Record::with_prototype(Some(a.clone())));
    assert!(!set_prototype_of(&a, Some(b.clone())));
    assert!(!set_prototype_of(&a, Some(a.clone())));
    assert!(a.borrow().prototype().is_none());
    assert_eq!(prototype_chain(&b).len(), 1);
}

#[test]
fn non_extensible_record_keeps_its_prototype() {
    let a = handle(Record::new());
    let proto = handle(Record::new());
    a.borrow_mut().prevent_extensions();
    assert!(!set_prototype_of(&a, Some(proto)));
    assert!(set_prototype_of(&a, None));
}

#[test]
fn public_set_prototype_of_validates_arguments() {
    let target = Value::record(Record::new());
    let proto = Value::record(Record::new().with_value("p", 1));
    propkit::set_prototype_of(&target, &proto).expect("relink");
    assert_eq!(
        target.as_record().expect("record").borrow().get("p"),
        Some(Value::Number(1.0))
    );
    assert_eq!(
        propkit::set_prototype_of(&target, &Value::Number(1.0)),
        Err(RecordError::NotARecord { type_name: "number" })
    );
    assert_eq!(
        propkit::set_prototype_of(&proto, &target),
        Err(RecordError::PrototypeCycle)
    );
}

#[test]
fn display_lists_enumerable_properties() {
    let rec = Value::record(
        Record::new()
            .with_value("a", 1)
            .with_property("h", Property::with_attributes(Value::Null, true, false, true))
            .with_value("s", "x"),
    );
    assert_eq!(rec.to_string(), r#"{ a: 1, s: "x" }"#);
    assert_eq!(Value::record(Record::new()).to_string(), "{}");
}

#[test]
fn display_formats_large_and_special_numbers() {
    assert_eq!(Value::Number(1e20).to_string(), "100000000000000000000");
    assert_eq!(Value::Number(-9.5e18).to_string(), "-9500000000000000000");
    assert_eq!(Value::Number(-0.0).to_string(), "0");
    assert_eq!(Value::Number(1e21).to_string(), "1000000000000000000000");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
}
