use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Validation errors aggregated by route. The root holds schema-wide errors,
/// children hold errors for a message type (and, one level down, a field).
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Record an error at this level.
    pub fn add(&mut self, err: impl fmt::Display) {
        self.messages.push(err.to_string());
    }

    /// Record an error under a child route.
    pub fn add_for(&mut self, route: impl Into<String>, err: impl fmt::Display) {
        self.children.entry(route.into()).or_default().add(err);
    }

    /// Merge another tree under a child route, dropping it if empty.
    pub fn merge_for(&mut self, route: impl Into<String>, tree: Self) {
        if tree.is_empty() {
            return;
        }

        let child = self.children.entry(route.into()).or_default();
        child.messages.extend(tree.messages);
        for (route, sub) in tree.children {
            child.merge_for(route, sub);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Number of error messages across every route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten to `(route, message)` pairs; routes are dot-joined.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.to_string(), message.clone()));
        }

        for (route, child) in &self.children {
            let route = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(&route, out);
        }
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .flatten()
            .into_iter()
            .map(|(route, message)| {
                if route.is_empty() {
                    message
                } else {
                    format!("{route}: {message}")
                }
            })
            .collect::<Vec<_>>();

        write!(f, "{}", lines.join("; "))
    }
}

impl std::error::Error for ErrorTree {}

/// Push a formatted message onto an `ErrorTree`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///
