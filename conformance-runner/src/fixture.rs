use propkit::RecordDocument;
use serde::Deserialize;

/// One YAML conformance case: an input record and the operations to run on it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    #[serde(default)]
    pub description: String,
    /// Input as a full record document.
    #[serde(default)]
    pub record: Option<RecordDocument>,
    /// Input as a bare JSON object with unrestricted properties.
    #[serde(default)]
    pub plain: Option<serde_json::Value>,
    #[serde(default)]
    pub skip: Option<String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Keys {
        attribute: String,
        expect: Vec<String>,
    },
    Probe {
        expect: bool,
    },
    Lock {
        key: String,
        expect: RecordDocument,
    },
    Freeze {
        expect: RecordDocument,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Keys { .. } => "keys",
            Step::Probe { .. } => "probe",
            Step::Lock { .. } => "lock",
            Step::Freeze { .. } => "freeze",
        }
    }
}

impl Fixture {
    /// The input document, whichever way the fixture spelled it.
    pub fn document(&self) -> Result<RecordDocument, String> {
        match (&self.record, &self.plain) {
            (Some(doc), None) => Ok(doc.clone()),
            (None, Some(json)) => {
                RecordDocument::from_plain_json(json.clone()).map_err(|e| e.to_string())
            }
            (Some(_), Some(_)) => Err("fixture sets both `record` and `plain`".into()),
            (None, None) => Err("fixture has neither `record` nor `plain`".into()),
        }
    }
}

pub fn parse_fixture(source: &str) -> Result<Fixture, String> {
    serde_yaml::from_str(source).map_err(|e| format!("invalid fixture: {e}"))
}
