//! Error-accumulating results.
//!
//! Option groups that do not depend on each other are checked side by side and
//! every failure is reported in one pass. Groups that need an earlier result
//! chain on it instead and stop when it failed.
//!
//! Two primitives cover both cases:
//! - [`zip`] / [`zip4`] / [`traverse`] accumulate errors from independent results
//! - `Result::and_then` chains a dependent step on a successful prerequisite

use serde::Serialize;
use std::fmt;

/// A non-empty, ordered list of human-readable error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<String>);

impl ErrorList {
    /// Create a list holding a single message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    /// Build a list from messages, or `None` when there are none.
    pub fn from_messages(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self(messages))
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append the messages of `other`.
    ///
    /// Messages already present before the merge are skipped, so a failure that
    /// reaches the aggregator through several dependent branches is reported
    /// once. Repeats inside `other` itself are kept.
    pub fn merge(&mut self, other: ErrorList) {
        let existing = self.0.len();
        for message in other.0 {
            if !self.0[..existing].contains(&message) {
                self.0.push(message);
            }
        }
    }

    /// Collapse every message into one, under a heading line, each indented.
    pub fn with_heading(self, heading: &str) -> Self {
        let listing: Vec<String> = self.0.iter().map(|m| format!("  {}", m)).collect();
        Self::new(format!("{}\n{}", heading, listing.join("\n")))
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

/// Either a value or every error that prevented it.
pub type Validated<T> = std::result::Result<T, ErrorList>;

/// Shorthand for a failed [`Validated`] with one message.
pub fn invalid<T>(message: impl Into<String>) -> Validated<T> {
    Err(ErrorList::new(message))
}

/// Combine two independent results, keeping the errors of both.
pub fn zip<A, B>(a: Validated<A>, b: Validated<B>) -> Validated<(A, B)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(mut e1), Err(e2)) => {
            e1.merge(e2);
            Err(e1)
        }
    }
}

/// Combine four independent results, keeping every error in argument order.
pub fn zip4<A, B, C, D>(
    a: Validated<A>,
    b: Validated<B>,
    c: Validated<C>,
    d: Validated<D>,
) -> Validated<(A, B, C, D)> {
    zip(zip(a, b), zip(c, d)).map(|((a, b), (c, d))| (a, b, c, d))
}

/// Apply `f` to every item, collecting all values or all errors.
///
/// Unlike `collect::<Result<Vec<_>, _>>()` this does not stop at the first
/// failure.
pub fn traverse<I, T, F>(items: I, mut f: F) -> Validated<Vec<T>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> std::result::Result<T, String>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for item in items {
        match f(item) {
            Ok(value) => values.push(value),
            Err(message) => errors.push(message),
        }
    }

    match ErrorList::from_messages(errors) {
        Some(errors) => Err(errors),
        None => Ok(values),
    }
}
