/// A single row of the app dataset.
///
/// Text columns use `CompactString` because the overwhelming majority of
/// app names and category labels fit inline (24 bytes), which keeps the
/// record vector dense and avoids one heap allocation per field.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pricing model of an app. Ordered `Free < Paid`, which matches the
/// lexicographic order of the literals used in the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AppType {
    Free,
    Paid,
}

impl AppType {
    /// Both variants in display order.
    pub const ALL: [AppType; 2] = [AppType::Free, AppType::Paid];

    /// The literal used in the dataset and in exported files.
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is neither `"Free"` nor `"Paid"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown app type {0:?} (expected \"Free\" or \"Paid\")")]
pub struct ParseAppTypeError(pub String);

impl FromStr for AppType {
    type Err = ParseAppTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Free" => Ok(Self::Free),
            "Paid" => Ok(Self::Paid),
            other => Err(ParseAppTypeError(other.to_string())),
        }
    }
}

/// One app from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRecord {
    /// Application name.
    pub app: CompactString,

    /// Store category label (e.g. `GAME`, `TOOLS`).
    pub category: CompactString,

    /// Average user rating in `[0.0, 5.0]`. `None` when the source value was
    /// empty, not a number, or out of range.
    pub rating: Option<f64>,

    /// Install count. `None` when the source value was empty or not
    /// integer-like.
    pub installs: Option<u64>,

    /// Price in USD. `0.0` for free apps.
    pub price: f64,

    pub app_type: AppType,
}

impl AppRecord {
    /// Convenience constructor used by tests and fixtures.
    pub fn new(
        app: &str,
        category: &str,
        rating: Option<f64>,
        installs: Option<u64>,
        price: f64,
        app_type: AppType,
    ) -> Self {
        Self {
            app: CompactString::new(app),
            category: CompactString::new(category),
            rating,
            installs,
            price,
            app_type,
        }
    }
}
