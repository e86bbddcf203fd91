use std::any::Any;

/// Turn a caught panic payload into a failure reason.
pub fn format_panic(payload: Box<dyn Any + Send>) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned());
    match detail {
        Some(msg) => format!("fixture panicked: {msg}"),
        None => "fixture panicked".to_string(),
    }
}
