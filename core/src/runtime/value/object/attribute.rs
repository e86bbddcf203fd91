use std::fmt;

/// The boolean flags carried by every property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Writable,
    Enumerable,
    Configurable,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [
        Attribute::Writable,
        Attribute::Enumerable,
        Attribute::Configurable,
    ];

    /// Look up an attribute by its lowercase name. Any other name is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "writable" => Some(Attribute::Writable),
            "enumerable" => Some(Attribute::Enumerable),
            "configurable" => Some(Attribute::Configurable),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Writable => "writable",
            Attribute::Enumerable => "enumerable",
            Attribute::Configurable => "configurable",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
