//! Classification of HTTP outcomes.

use std::collections::BTreeSet;

/// Outcome of classifying an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The body should be decoded into a response.
    Accept,
    /// The exchange becomes an [`crate::Error::Api`].
    Reject,
}

/// The set of HTTP statuses whose bodies are decoded as responses.
///
/// Defaults to `{200}`. [`AcceptedStatuses::permissive`] adds `302` for
/// deployments behind a proxy that answers with the payload on a redirect
/// status; it must be opted into explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedStatuses(BTreeSet<u16>);

impl AcceptedStatuses {
    /// Accept only `200 OK`.
    #[must_use]
    pub fn strict() -> Self {
        Self(BTreeSet::from([200]))
    }

    /// Accept `200 OK` and `302 Found`.
    #[must_use]
    pub fn permissive() -> Self {
        Self(BTreeSet::from([200, 302]))
    }

    /// Whether `status` is accepted.
    #[must_use]
    pub fn contains(&self, status: u16) -> bool {
        self.0.contains(&status)
    }

    /// Classify an HTTP status code.
    #[must_use]
    pub fn classify(&self, status: u16) -> Classification {
        if self.contains(status) {
            Classification::Accept
        } else {
            Classification::Reject
        }
    }

    /// Iterate over the accepted codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().copied()
    }
}

impl Default for AcceptedStatuses {
    fn default() -> Self {
        Self::strict()
    }
}

impl FromIterator<u16> for AcceptedStatuses {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_is_default() {
        let statuses = AcceptedStatuses::default();
        assert_eq!(statuses, AcceptedStatuses::strict());
        assert_eq!(statuses.classify(200), Classification::Accept);
        assert_eq!(statuses.classify(302), Classification::Reject);
        assert_eq!(statuses.classify(404), Classification::Reject);
    }

    #[test]
    fn permissive_accepts_found() {
        let statuses = AcceptedStatuses::permissive();
        assert_eq!(statuses.classify(200), Classification::Accept);
        assert_eq!(statuses.classify(302), Classification::Accept);
        assert_eq!(statuses.classify(301), Classification::Reject);
        assert_eq!(statuses.iter().collect::<Vec<_>>(), vec![200, 302]);
    }

    #[test]
    fn custom_set() {
        let statuses: AcceptedStatuses = [200, 203].into_iter().collect();
        assert!(statuses.contains(203));
        assert!(!statuses.contains(204));
    }
}
