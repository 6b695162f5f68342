// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::ops::Deref;

use crate::Layout;

/// An ordered, priority-ranked list of [`Layout`]s.
///
/// Parsing tries the layouts from first to last. Formatting always uses the first entry,
/// the *primary* layout.
///
/// An empty list is a valid value. It is distinct from having no list at all: a
/// [`Timestamp`][crate::Timestamp] with an empty own list does not fall back to the
/// defaults, it fails with a "no layout defined" error instead.
///
/// # Examples
///
/// ```
/// use stampede::{Layout, Layouts};
///
/// let mut layouts = Layouts::from_iter(["%Y-%m-%d"]);
/// layouts.push(Layout::DATE_TIME);
///
/// assert_eq!(layouts.primary(), Some(&Layout::DATE_ONLY));
/// assert_eq!(layouts.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Layouts(Vec<Layout>);

impl Layouts {
    /// Creates an empty list of layouts.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates the well-known default list of layouts.
    ///
    /// The list starts with the round-trippable [`Layout::RFC3339`], followed by
    /// [`Layout::RFC3339_NANO`], [`Layout::ANSIC`], [`Layout::RUBY_DATE`],
    /// [`Layout::RFC822Z`], [`Layout::RFC1123Z`], [`Layout::DATE_TIME`] and
    /// [`Layout::DATE_ONLY`]. The year-less [`Layout::KITCHEN`], [`Layout::STAMP`],
    /// [`Layout::STAMP_MILLI`], [`Layout::STAMP_MICRO`] and [`Layout::STAMP_NANO`] come last.
    ///
    /// Formats that identify the zone by an abbreviation such as `MST` are not part of
    /// the list, because abbreviations are ambiguous and cannot be parsed.
    #[must_use]
    pub fn standard() -> Self {
        Self(vec![
            Layout::RFC3339,
            Layout::RFC3339_NANO,
            Layout::ANSIC,
            Layout::RUBY_DATE,
            Layout::RFC822Z,
            Layout::RFC1123Z,
            Layout::DATE_TIME,
            Layout::DATE_ONLY,
            Layout::KITCHEN,
            Layout::STAMP,
            Layout::STAMP_MILLI,
            Layout::STAMP_MICRO,
            Layout::STAMP_NANO,
        ])
    }

    /// Returns the primary layout, which is used for formatting.
    #[must_use]
    pub fn primary(&self) -> Option<&Layout> {
        self.0.first()
    }

    /// Appends a layout with the lowest priority.
    pub fn push(&mut self, layout: impl Into<Layout>) {
        self.0.push(layout.into());
    }

    /// Inserts a layout at `index`, shifting all layouts after it.
    ///
    /// Inserting at index `0` makes the layout the new primary layout.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, layout: impl Into<Layout>) {
        self.0.insert(index, layout.into());
    }

    /// Removes all layouts.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the layouts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Layout] {
        &self.0
    }
}

impl Deref for Layouts {
    type Target = [Layout];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<L: Into<Layout>> FromIterator<L> for Layouts {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<L: Into<Layout>> Extend<L> for Layouts {
    fn extend<I: IntoIterator<Item = L>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Vec<Layout>> for Layouts {
    fn from(value: Vec<Layout>) -> Self {
        Self(value)
    }
}

impl IntoIterator for Layouts {
    type Item = Layout;
    type IntoIter = std::vec::IntoIter<Layout>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Layouts {
    type Item = &'a Layout;
    type IntoIter = std::slice::Iter<'a, Layout>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(any(feature = "serde", test))]
impl serde_core::Serialize for Layouts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.collect_seq(self)
    }
}

#[cfg(any(feature = "serde", test))]
impl<'de> serde_core::Deserialize<'de> for Layouts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde_core::Deserializer<'de>,
    {
        <Vec<Layout> as serde_core::Deserialize>::deserialize(deserializer).map(Self)
    }
}
