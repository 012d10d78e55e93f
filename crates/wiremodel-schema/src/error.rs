use serde::Serialize;
use std::fmt;

///
/// ErrorTree
///
/// Route-aware aggregate used by schema validation. Each entry carries the
/// node route it was raised at, so a single validation pass can report
/// every fault in one result.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    entries: Vec<ErrorEntry>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorEntry {
    pub route: String,
    pub message: String,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter()
    }

    /// Add an error at the current (empty) route.
    pub fn add(&mut self, message: impl fmt::Display) {
        self.add_at(String::new(), message);
    }

    /// Add an error at an explicit route.
    pub fn add_at(&mut self, route: impl Into<String>, message: impl fmt::Display) {
        self.entries.push(ErrorEntry {
            route: route.into(),
            message: message.to_string(),
        });
    }

    /// Absorb another tree, prefixing its routes with `route`.
    pub fn merge_at(&mut self, route: &str, other: Self) {
        for entry in other.entries {
            let route = if route.is_empty() {
                entry.route
            } else if entry.route.is_empty() {
                route.to_string()
            } else {
                format!("{route}.{}", entry.route)
            };
            self.entries.push(ErrorEntry {
                route,
                message: entry.message,
            });
        }
    }

    /// Absorb another tree verbatim.
    pub fn merge(&mut self, other: Self) {
        self.merge_at("", other);
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if entry.route.is_empty() {
                write!(f, "{}", entry.message)?;
            } else {
                write!(f, "{}: {}", entry.route, entry.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

///
/// err!
/// Push a formatted error onto an `ErrorTree`.
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
