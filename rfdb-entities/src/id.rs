use std::{fmt, num::ParseIntError, str::FromStr};

/// Row identifier assigned by the store.
///
/// Valid identifiers are strictly positive. The value `0` is reserved
/// by the legacy schema as the "no parent" marker of top-level comments
/// and never identifies a stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(i64);

impl Id {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn is_valid(self) -> bool {
        self.0 > 0
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Id {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<Id> for i64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
