use super::coercion::format_number;
use super::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Record(rec) => {
                // Only the top level is expanded so cyclic records still print.
                let rec = match rec.try_borrow() {
                    Ok(rec) => rec,
                    Err(_) => return write!(f, "{{ <borrowed> }}"),
                };
                let pairs: Vec<String> = rec
                    .own_keys()
                    .into_iter()
                    .filter_map(|k| {
                        let prop = rec.get_own_property(&k)?;
                        prop.enumerable.then(|| match &prop.value {
                            Value::Record(_) => format!("{k}: [Record]"),
                            other => format!("{k}: {other}"),
                        })
                    })
                    .collect();
                if pairs.is_empty() {
                    write!(f, "{{}}")
                } else {
                    write!(f, "{{ {} }}", pairs.join(", "))
                }
            }
        }
    }
}
