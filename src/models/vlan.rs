//! Allowed-VLAN set for a trunk port.

use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;

/// Deduplicated set of VLAN tokens, each either a single ID (`"20"`) or a
/// range (`"10 to 15"`).
///
/// Tokens are ordered by their string form, so `"100"` sorts before `"20"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedVlans {
    tokens: BTreeSet<String>,
}

impl AllowedVlans {
    pub fn new() -> AllowedVlans {
        AllowedVlans {
            tokens: BTreeSet::new(),
        }
    }

    pub fn insert<S: Into<String>>(&mut self, token: S) -> bool {
        self.tokens.insert(token.into())
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: AllowedVlans) {
        self.tokens.extend(other.tokens);
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedVlans {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        AllowedVlans {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Comma joined, e.g. `10 to 15, 20`. Empty set renders as `""`.
impl fmt::Display for AllowedVlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(", "))
    }
}
