use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// End-of-life marker of a release cycle
///
/// The catalog encodes this as either a boolean or an ISO date:
/// `false` means supported with no announced end, `true` means unsupported
/// with no explicit date. Any other value is kept verbatim so that one
/// unreadable row does not invalidate the rest of the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Eol {
    Flag(bool),
    Date(NaiveDate),
    Other(String),
}

impl Eol {
    /// The concrete end-of-life date, if the catalog gave one
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Eol::Date(date) => Some(*date),
            Eol::Flag(_) | Eol::Other(_) => None,
        }
    }

    /// Whether the cycle is still supported on `today`
    ///
    /// A date equal to `today` counts as ended; an unreadable marker never
    /// counts as supported.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        match self {
            Eol::Flag(ended) => !ended,
            Eol::Date(date) => *date > today,
            Eol::Other(_) => false,
        }
    }
}

/// One row of a product's catalog data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseCycle {
    #[serde(deserialize_with = "string_or_number")]
    pub cycle: String,
    #[serde(default)]
    pub eol: Option<Eol>,
    #[serde(
        rename = "latest",
        default,
        deserialize_with = "optional_string_or_number"
    )]
    pub latest_version: Option<String>,
}

impl ReleaseCycle {
    /// Creates a cycle with no EOL information and no latest version
    pub fn new(cycle: impl Into<String>) -> Self {
        Self {
            cycle: cycle.into(),
            eol: None,
            latest_version: None,
        }
    }

    pub fn with_eol(mut self, eol: Eol) -> Self {
        self.eol = Some(eol);
        self
    }

    pub fn with_latest(mut self, latest: impl Into<String>) -> Self {
        self.latest_version = Some(latest.into());
        self
    }

    /// The concrete end-of-life date, if any
    pub fn eol_date(&self) -> Option<NaiveDate> {
        self.eol.as_ref().and_then(Eol::date)
    }

    /// Whether this cycle is still supported on `today`; cycles without EOL
    /// information are not considered active
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.eol.as_ref().is_some_and(|eol| eol.is_active_on(today))
    }
}

/// The catalog emits some cycle names as bare numbers (`"cycle": 21`)
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Num(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Num(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}
