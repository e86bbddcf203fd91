use propkit::{RecordDocument, Value};

use crate::fixture::{Fixture, Step};

#[derive(Debug, Clone)]
pub enum TestResult {
    Passed,
    Failed(String),
    Skipped(String),
}

pub fn run_fixture(fixture: &Fixture) -> TestResult {
    if let Some(reason) = &fixture.skip {
        return TestResult::Skipped(reason.clone());
    }

    let document = match fixture.document() {
        Ok(doc) => doc,
        Err(reason) => return TestResult::Failed(reason),
    };
    let record = Value::Record(document.into_record());
    let baseline = match RecordDocument::describe_value(&record) {
        Ok(doc) => doc,
        Err(err) => return TestResult::Failed(format!("cannot describe input: {err}")),
    };

    for (idx, step) in fixture.steps.iter().enumerate() {
        let position = idx + 1;
        if let Err(reason) = run_step(&record, step) {
            return TestResult::Failed(format!("step {position} ({}): {reason}", step.name()));
        }
        match RecordDocument::describe_value(&record) {
            Ok(after) if after == baseline => {}
            Ok(_) => {
                return TestResult::Failed(format!(
                    "step {position} ({}) mutated the source record",
                    step.name()
                ));
            }
            Err(err) => return TestResult::Failed(format!("cannot describe input: {err}")),
        }
    }

    TestResult::Passed
}

fn run_step(record: &Value, step: &Step) -> Result<(), String> {
    match step {
        Step::Keys { attribute, expect } => {
            let keys =
                propkit::keys_by_descriptor_name(record, attribute).map_err(|e| e.to_string())?;
            compare(expect, &keys)
        }
        Step::Probe { expect } => compare(expect, &propkit::is_any_frozen(record)),
        Step::Lock { key, expect } => {
            let locked = propkit::assign_locked_value(record, key).map_err(|e| e.to_string())?;
            compare_record(expect, record, &locked)
        }
        Step::Freeze { expect } => {
            let frozen = propkit::freeze_all(record).map_err(|e| e.to_string())?;
            compare_record(expect, record, &frozen)
        }
    }
}

fn compare_record(expect: &RecordDocument, source: &Value, derived: &Value) -> Result<(), String> {
    if derived == source {
        return Err("operation returned the source record instead of a copy".into());
    }
    let actual = RecordDocument::describe_value(derived).map_err(|e| e.to_string())?;
    compare(expect, &actual)
}

fn compare<T: PartialEq + serde::Serialize>(expect: &T, actual: &T) -> Result<(), String> {
    if expect == actual {
        return Ok(());
    }
    Err(format!("expected {} but got {}", to_json(expect), to_json(actual)))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::parse_fixture;

    fn run(source: &str) -> TestResult {
        run_fixture(&parse_fixture(source).expect("fixture"))
    }

    #[test]
    fn passing_fixture() {
        let result = run(r#"
plain: {a: 1}
steps:
  - op: freeze
    expect:
      extensible: false
      properties:
        a: {value: 1, writable: false, configurable: false}
"#);
        assert!(matches!(result, TestResult::Passed), "{result:?}");
    }

    #[test]
    fn wrong_expectation_fails_with_both_sides() {
        let result = run(r#"
plain: {a: 1}
steps:
  - op: keys
    attribute: writable
    expect: [b]
"#);
        let TestResult::Failed(reason) = result else {
            panic!("expected failure");
        };
        assert!(reason.contains("step 1 (keys)"));
        assert!(reason.contains(r#"["b"]"#));
        assert!(reason.contains(r#"["a"]"#));
    }

    #[test]
    fn skipped_fixture() {
        let result = run("skip: not yet\nplain: {}\nsteps: []\n");
        assert!(matches!(result, TestResult::Skipped(reason) if reason == "not yet"));
    }
}
