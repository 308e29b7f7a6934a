use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const TRUE_NEGATIVE: &str = "True Negative";
pub const TRUE_POSITIVE: &str = "True Positive";
pub const PREDICTED_NEGATIVE: &str = "Predicted Negative";
pub const PREDICTED_POSITIVE: &str = "Predicted Positive";

/// Maps a class index to its display name.
///
/// Lookups for an index without an entry fall back to the index itself,
/// so a partial mapping only relabels the classes it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap(IndexMap<usize, Box<str>>);

impl LabelMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Labels for the true-class rows: "True Negative", "True Positive".
    pub fn default_rows() -> Self {
        Self::from([(0, TRUE_NEGATIVE), (1, TRUE_POSITIVE)])
    }

    /// Labels for the predicted-class columns: "Predicted Negative", "Predicted Positive".
    pub fn default_columns() -> Self {
        Self::from([(0, PREDICTED_NEGATIVE), (1, PREDICTED_POSITIVE)])
    }

    /// Sets the name of a class, returning the previous one if any.
    pub fn insert(&mut self, class: usize, name: &str) -> Option<Box<str>> {
        self.0.insert(class, name.into())
    }

    /// The display name of a class.
    pub fn resolve(&self, class: usize) -> Cow<'_, str> {
        match self.0.get(&class) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(class.to_string()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a, const N: usize> From<[(usize, &'a str); N]> for LabelMap {
    fn from(entries: [(usize, &'a str); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> FromIterator<(usize, &'a str)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (usize, &'a str)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
