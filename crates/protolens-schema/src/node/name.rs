use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

///
/// QualifiedName
///
/// Dot-segmented message or enum name. `Company.Job` is declared lexically
/// inside `Company`.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Last segment (the name as written at its declaration site).
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Enclosing declaration, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.rsplit_once('.').map(|(parent, _)| Self::new(parent))
    }

    /// True iff `outer`'s segments are a proper prefix of this name's segments.
    #[must_use]
    pub fn is_nested_in(&self, outer: &Self) -> bool {
        let (inner, outer) = (self.0.as_str(), outer.0.as_str());

        inner.len() > outer.len()
            && inner.starts_with(outer)
            && inner.as_bytes()[outer.len()] == b'.'
    }

    /// Generated module identity: segments joined by `_`, lowercased.
    #[must_use]
    pub fn module_identity(&self) -> String {
        self.segments()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase()
    }
}

impl Borrow<str> for QualifiedName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for QualifiedName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for QualifiedName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn name(s: &str) -> QualifiedName {
        QualifiedName::from(s)
    }

    #[test]
    fn nesting_requires_a_segment_boundary() {
        assert!(name("Company.Job").is_nested_in(&name("Company")));
        assert!(name("Company.Job.Title").is_nested_in(&name("Company")));
        assert!(!name("CompanyJob").is_nested_in(&name("Company")));
        assert!(!name("Company").is_nested_in(&name("Company")));
        assert!(!name("Company").is_nested_in(&name("Company.Job")));
        assert!(!name("Person.Address").is_nested_in(&name("Company")));
    }

    #[test]
    fn module_identity_keeps_the_full_lexical_path() {
        assert_eq!(name("Company.Job").module_identity(), "company_job");
        assert_eq!(name("Person.Job").module_identity(), "person_job");
        assert_eq!(name("Person").module_identity(), "person");
    }

    #[test]
    fn leaf_and_parent() {
        let job = name("Company.Job");
        assert_eq!(job.leaf(), "Job");
        assert_eq!(job.parent(), Some(name("Company")));
        assert_eq!(name("Company").parent(), None);
    }

    fn arb_name() -> impl Strategy<Value = QualifiedName> {
        proptest::collection::vec("[A-Z][a-z]{0,3}", 1..4)
            .prop_map(|segments| QualifiedName::new(segments.join(".")))
    }

    proptest! {
        #[test]
        fn parent_contains_child(n in arb_name()) {
            if let Some(parent) = n.parent() {
                prop_assert!(n.is_nested_in(&parent));
            }
            prop_assert!(!n.is_nested_in(&n));
        }
    }
}
