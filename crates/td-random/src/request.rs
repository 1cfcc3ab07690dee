//! Randomness requests: kind, parameters, defaults, and validation.
//!
//! Field names and defaults follow the random.org plain-text API so a
//! request maps onto a URL without renaming. The same request drives the
//! local generator when the remote service is unavailable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RequestError, RequestResult};

/// Largest `num` the service accepts.
pub const MAX_COUNT: u32 = 10_000;
/// Largest magnitude accepted for `min` and `max`.
pub const MAX_BOUND: i64 = 1_000_000_000;
/// Largest number of columns.
pub const MAX_COLUMNS: u32 = 1_000_000_000;
/// Longest string the service generates.
pub const MAX_STRING_LEN: u32 = 20;
/// Most values a sequence may permute.
pub const MAX_SEQUENCE_LEN: i64 = 10_000;

/// The three generators offered by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Independent integers in `[min, max]`.
    Integers,
    /// A random permutation of every integer in `[min, max]`.
    Sequences,
    /// Fixed-length strings over an alphanumeric alphabet.
    Strings,
}

impl RequestKind {
    /// Path segment of the endpoint serving this kind.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Integers => "integers",
            Self::Sequences => "sequences",
            Self::Strings => "strings",
        }
    }
}

impl FromStr for RequestKind {
    type Err = RequestError;

    /// Accepts the short, singular, and plural spellings in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "int" | "integer" | "integers" => Ok(Self::Integers),
            "seq" | "sequence" | "sequences" => Ok(Self::Sequences),
            "str" | "string" | "strings" => Ok(Self::Strings),
            _ => Err(RequestError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Base the service prints integers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Base {
    /// Base 2.
    Binary,
    /// Base 8.
    Octal,
    /// Base 10.
    #[default]
    Decimal,
    /// Base 16.
    Hexadecimal,
}

impl Base {
    /// The numeric radix.
    pub fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = RequestError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Self::Binary),
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hexadecimal),
            other => Err(RequestError::UnsupportedBase(other)),
        }
    }
}

/// Response document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `text/plain`, one value per token.
    #[default]
    Plain,
    /// `text/html`, meant for browsers.
    Html,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// How the service seeds the randomization for a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Randomization {
    /// A fresh randomization from the true-random bitstream.
    #[default]
    New,
    /// A deterministic randomization keyed by an identifier.
    Id(String),
    /// A randomization from one of the daily pregenerated files.
    /// Holds `today`, `yesterday`, or an ISO date (`YYYY-MM-DD`).
    Date(String),
}

impl FromStr for Randomization {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "new" {
            return Ok(Self::New);
        }
        if let Some(id) = s.strip_prefix("id.") {
            if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || "-_".contains(c))
            {
                return Err(RequestError::InvalidRandomization(s.to_string()));
            }
            return Ok(Self::Id(id.to_string()));
        }
        if let Some(date) = s
            .strip_prefix("date.")
            .filter(|d| *d == "today" || *d == "yesterday" || is_iso_date(d))
        {
            return Ok(Self::Date(date.to_string()));
        }
        Err(RequestError::InvalidRandomization(s.to_string()))
    }
}

impl fmt::Display for Randomization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Id(id) => write!(f, "id.{id}"),
            Self::Date(date) => write!(f, "date.{date}"),
        }
    }
}

/// Shape check for `YYYY-MM-DD`; the service rejects dates it has no file for.
fn is_iso_date(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    matches!(parts.as_slice(), [y, m, d]
        if y.len() == 4 && m.len() == 2 && d.len() == 2
            && [y, m, d].iter().all(|p| p.chars().all(|c| c.is_ascii_digit())))
}

/// Parameters of a single randomness request.
///
/// Not every field applies to every kind: sequences ignore `num`, `len`,
/// the alphabet flags and `base`; strings ignore the bounds, `col` and
/// `base`; integers ignore the string fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomRequest {
    /// Which generator to use.
    pub kind: RequestKind,
    /// How many values (integers) or strings to produce.
    pub num: u32,
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Columns the service lays the values out in.
    pub col: u32,
    /// Length of each string.
    pub len: u32,
    /// Allow `0-9` in strings.
    pub digits: bool,
    /// Allow `A-Z` in strings.
    pub upperalpha: bool,
    /// Allow `a-z` in strings.
    pub loweralpha: bool,
    /// Ask the service for distinct strings. The local generator ignores
    /// this and always samples with replacement.
    pub unique: bool,
    /// Base the service prints integers in.
    pub base: Base,
    /// Response document format.
    pub format: Format,
    /// Randomization seed selector.
    pub rnd: Randomization,
}

impl RandomRequest {
    /// A request of the given kind with the service's defaults.
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            num: 1,
            min: 1,
            max: 2,
            col: 1,
            len: 10,
            digits: true,
            upperalpha: true,
            loweralpha: true,
            unique: true,
            base: Base::Decimal,
            format: Format::Plain,
            rnd: Randomization::New,
        }
    }

    /// `num` integers in `[min, max]`.
    pub fn integers(num: u32, min: i64, max: i64) -> Self {
        Self::new(RequestKind::Integers)
            .with_count(num)
            .with_range(min, max)
    }

    /// A permutation of `[min, max]`.
    pub fn sequence(min: i64, max: i64) -> Self {
        Self::new(RequestKind::Sequences).with_range(min, max)
    }

    /// `num` strings of length `len`.
    pub fn strings(num: u32, len: u32) -> Self {
        Self::new(RequestKind::Strings)
            .with_count(num)
            .with_length(len)
    }

    /// Set the number of values.
    pub fn with_count(mut self, num: u32) -> Self {
        self.num = num;
        self
    }

    /// Set the inclusive bounds.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the column count.
    pub fn with_columns(mut self, col: u32) -> Self {
        self.col = col;
        self
    }

    /// Set the string length.
    pub fn with_length(mut self, len: u32) -> Self {
        self.len = len;
        self
    }

    /// Choose which character classes strings may contain.
    pub fn with_alphabet(mut self, digits: bool, upperalpha: bool, loweralpha: bool) -> Self {
        self.digits = digits;
        self.upperalpha = upperalpha;
        self.loweralpha = loweralpha;
        self
    }

    /// Set the uniqueness flag.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Set the output base.
    pub fn with_base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }

    /// Set the response format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set the randomization.
    pub fn with_randomization(mut self, rnd: Randomization) -> Self {
        self.rnd = rnd;
        self
    }

    /// Characters a string may contain: digits, then uppercase, then lowercase.
    pub fn alphabet(&self) -> String {
        let mut alphabet = String::new();
        if self.digits {
            alphabet.push_str("0123456789");
        }
        if self.upperalpha {
            alphabet.push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        }
        if self.loweralpha {
            alphabet.push_str("abcdefghijklmnopqrstuvwxyz");
        }
        alphabet
    }

    /// Check the fields that apply to this kind against the service limits.
    pub fn validate(&self) -> RequestResult<()> {
        match self.kind {
            RequestKind::Integers => {
                check_range("num", i64::from(self.num), 1, i64::from(MAX_COUNT))?;
                self.validate_bounds()?;
                check_range("col", i64::from(self.col), 1, i64::from(MAX_COLUMNS))?;
            }
            RequestKind::Sequences => {
                self.validate_bounds()?;
                check_range("col", i64::from(self.col), 1, i64::from(MAX_COLUMNS))?;
                let span = self.max - self.min + 1;
                if span > MAX_SEQUENCE_LEN {
                    return Err(RequestError::SequenceTooLong(span));
                }
            }
            RequestKind::Strings => {
                check_range("num", i64::from(self.num), 1, i64::from(MAX_COUNT))?;
                check_range("len", i64::from(self.len), 1, i64::from(MAX_STRING_LEN))?;
                if !(self.digits || self.upperalpha || self.loweralpha) {
                    return Err(RequestError::EmptyAlphabet);
                }
            }
        }
        Ok(())
    }

    fn validate_bounds(&self) -> RequestResult<()> {
        check_range("min", self.min, -MAX_BOUND, MAX_BOUND)?;
        check_range("max", self.max, -MAX_BOUND, MAX_BOUND)?;
        if self.min > self.max {
            return Err(RequestError::InvertedBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> RequestResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RequestError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}
