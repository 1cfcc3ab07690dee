//! Results returned by every request: values, outcome status, and alert.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single produced value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An integer from the integer or sequence generators.
    Integer(i64),
    /// A string from the string generator, or an unparsed document.
    Text(String),
}

impl Value {
    /// The integer, if this is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Outcome of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Values were produced.
    Success,
    /// The remote quota was exhausted; values came from the local generator.
    QuotaFallback,
    /// The service answered with a non-200 status.
    RemoteError(u16),
    /// The service could not be reached.
    Unreachable,
    /// The service answered 200 with a body that could not be parsed.
    Malformed,
}

impl Status {
    /// HTTP-like outcome code.
    pub fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::QuotaFallback => 601,
            Self::RemoteError(code) => code,
            Self::Unreachable => 602,
            Self::Malformed => 603,
        }
    }

    /// Whether values were produced.
    pub fn has_values(self) -> bool {
        matches!(self, Self::Success | Self::QuotaFallback)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::QuotaFallback => write!(f, "quota exhausted, pseudo-random fallback"),
            Self::RemoteError(code) => write!(f, "remote error {code}"),
            Self::Unreachable => write!(f, "remote unreachable"),
            Self::Malformed => write!(f, "malformed response"),
        }
    }
}

/// Where the values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The remote true-random service.
    Remote,
    /// The local pseudo-random generator.
    Local,
}

/// The produced values plus how the request went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomResult {
    /// Values in the order produced.
    pub values: Vec<Value>,
    /// Outcome of the request.
    pub status: Status,
    /// Human-readable diagnostic, set on fallback and failure.
    pub alert: Option<String>,
    /// Which generator produced the values.
    pub origin: Origin,
}

impl RandomResult {
    /// A successful result.
    pub fn success(values: Vec<Value>, origin: Origin) -> Self {
        Self {
            values,
            status: Status::Success,
            alert: None,
            origin,
        }
    }

    /// A failed remote request: no values, a diagnostic.
    pub fn failure(status: Status, alert: impl Into<String>) -> Self {
        Self {
            values: Vec::new(),
            status,
            alert: Some(alert.into()),
            origin: Origin::Remote,
        }
    }

    /// All values as integers, or `None` if any is not an integer.
    pub fn integers(&self) -> Option<Vec<i64>> {
        self.values.iter().map(Value::as_integer).collect()
    }

    /// The first value, if any.
    pub fn first(&self) -> Option<&Value> {
        self.values.first()
    }

    /// Whether the request produced no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(Status::Success.code(), 200);
        assert_eq!(Status::QuotaFallback.code(), 601);
        assert_eq!(Status::RemoteError(503).code(), 503);
        assert_eq!(Status::Unreachable.code(), 602);
        assert_eq!(Status::Malformed.code(), 603);
    }

    #[test]
    fn has_values() {
        assert!(Status::Success.has_values());
        assert!(Status::QuotaFallback.has_values());
        assert!(!Status::RemoteError(500).has_values());
        assert!(!Status::Unreachable.has_values());
    }

    #[test]
    fn integers_requires_all_integer_values() {
        let ints = RandomResult::success(vec![Value::Integer(3), Value::Integer(5)], Origin::Local);
        assert_eq!(ints.integers(), Some(vec![3, 5]));

        let mixed = RandomResult::success(
            vec![Value::Integer(3), Value::Text("x".into())],
            Origin::Local,
        );
        assert_eq!(mixed.integers(), None);
    }

    #[test]
    fn failure_is_empty_with_alert() {
        let r = RandomResult::failure(Status::RemoteError(503), "Error: busy");
        assert!(r.is_empty());
        assert_eq!(r.first(), None);
        assert_eq!(r.alert.as_deref(), Some("Error: busy"));
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Integer(-4).to_string(), "-4");
        assert_eq!(Value::Text("aB3".into()).to_string(), "aB3");
    }

    #[test]
    fn serializes_values_untagged() {
        let r = RandomResult::success(
            vec![Value::Integer(1), Value::Text("ab".into())],
            Origin::Remote,
        );
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains(r#""values":[1,"ab"]"#));
        assert!(json.contains(r#""status":"success""#));
        assert!(json.contains(r#""origin":"remote""#));
    }
}
