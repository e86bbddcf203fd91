use propkit::{PropkitError, RecordDocument, Value};

use crate::Command;

/// Execute one subcommand against the loaded record and render its output.
pub(crate) fn run(command: &Command, source: &str, plain: bool) -> Result<String, PropkitError> {
    let record = propkit::load(source, plain)?;
    log::debug!("loaded record of type {}", record.type_name());

    let output = match command {
        Command::Keys { attribute, .. } => {
            let keys = propkit::keys_by_descriptor_name(&record, attribute)?;
            render(&keys)?
        }
        Command::Probe { .. } => propkit::is_any_frozen(&record).to_string(),
        Command::Lock { key, .. } => {
            let locked = propkit::assign_locked_value(&record, key)?;
            render_record(&locked)?
        }
        Command::Freeze { .. } => {
            let frozen = propkit::freeze_all(&record)?;
            render_record(&frozen)?
        }
        Command::Describe { .. } => render_record(&record)?,
    };
    Ok(output)
}

fn render_record(value: &Value) -> Result<String, PropkitError> {
    let document = RecordDocument::describe_value(value)?;
    render(&document)
}

fn render<T: serde::Serialize>(value: &T) -> Result<String, PropkitError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| PropkitError::Document(propkit::DocumentError::Parse(e)))
}
