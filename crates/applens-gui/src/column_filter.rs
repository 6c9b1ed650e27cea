/// Per-column queries typed under the pivot table header.
///
/// Text columns match when the cell contains the query, ignoring case; a
/// leading `=` asks for the whole cell instead. Numeric columns take a
/// comparison such as `>= 4`, `< 1000` or `!= 0`, and a bare number means
/// `=`. Thousands separators in numbers are accepted.
use std::cmp::Ordering;

/// Comparison operator of a numeric query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl CompareOp {
    /// Two-character symbols first so `>=` is never read as `>`.
    const SYMBOLS: [(&'static str, CompareOp); 7] = [
        (">=", CompareOp::Gte),
        ("<=", CompareOp::Lte),
        ("!=", CompareOp::Ne),
        ("==", CompareOp::Eq),
        (">", CompareOp::Gt),
        ("<", CompareOp::Lt),
        ("=", CompareOp::Eq),
    ];

    fn holds(self, ord: Ordering) -> bool {
        match self {
            Self::Eq => ord == Ordering::Equal,
            Self::Ne => ord != Ordering::Equal,
            Self::Gt => ord == Ordering::Greater,
            Self::Lt => ord == Ordering::Less,
            Self::Gte => ord != Ordering::Less,
            Self::Lte => ord != Ordering::Greater,
        }
    }
}

/// A parsed column query. Text variants hold the lower-cased needle.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnQuery {
    Any,
    Contains(String),
    Equals(String),
    Compare(CompareOp, f64),
}

impl ColumnQuery {
    pub fn parse_text(query: &str) -> Self {
        let q = query.trim();
        if q.is_empty() {
            return Self::Any;
        }
        match q.strip_prefix('=') {
            Some(rest) => Self::Equals(rest.trim().to_lowercase()),
            None => Self::Contains(q.to_lowercase()),
        }
    }

    /// `None` if `query` is not a comparison against a finite number.
    pub fn parse_numeric(query: &str) -> Option<Self> {
        let q = query.trim();
        if q.is_empty() {
            return Some(Self::Any);
        }
        let (op, rest) = CompareOp::SYMBOLS
            .iter()
            .find_map(|&(sym, op)| q.strip_prefix(sym).map(|rest| (op, rest)))
            .unwrap_or((CompareOp::Eq, q));
        let value: f64 = rest
            .trim()
            .replace(',', "")
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())?;
        Some(Self::Compare(op, value))
    }

    pub fn matches_text(&self, cell: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Contains(needle) => cell.to_lowercase().contains(needle.as_str()),
            Self::Equals(needle) => cell.to_lowercase() == *needle,
            Self::Compare(..) => false,
        }
    }

    /// An absent cell only passes the empty query.
    pub fn matches_number(&self, cell: Option<f64>) -> bool {
        match (self, cell) {
            (Self::Any, _) => true,
            (Self::Compare(op, value), Some(x)) => op.holds(x.total_cmp(value)),
            _ => false,
        }
    }
}
