// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{Layouts, Result, Timestamp};

/// Holds the default layouts and exposes the parse, marshal and unmarshal entry points.
///
/// A codec is meant to be created once by the application's composition root, configured,
/// and then passed by reference to the code that parses or serializes timestamps. Changing
/// the defaults requires exclusive access, so configuration always happens before use.
///
/// Timestamps with private layouts ignore the defaults entirely. See [`Timestamp`] for
/// details.
///
/// # Examples
///
/// ```
/// use stampede::{Codec, Layout};
///
/// let mut codec = Codec::default();
/// codec.defaults_mut().insert(0, "%d.%m.%Y %H:%M");
///
/// let stamp = codec.parse(None, "2006-01-02T15:04:05+00:00")?;
/// assert_eq!(codec.marshal(&stamp)?, r#""02.01.2006 15:04""#);
///
/// # Ok::<(), stampede::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    defaults: Layouts,
}

impl Codec {
    /// Creates a codec with the given default layouts.
    #[must_use]
    pub const fn new(defaults: Layouts) -> Self {
        Self { defaults }
    }

    /// Returns the default layouts.
    #[must_use]
    pub const fn defaults(&self) -> &Layouts {
        &self.defaults
    }

    /// Returns the default layouts for modification.
    pub fn defaults_mut(&mut self) -> &mut Layouts {
        &mut self.defaults
    }

    /// Replaces the default layouts.
    pub fn set_defaults(&mut self, defaults: Layouts) {
        self.defaults = defaults;
    }

    /// Parses `text` into a timestamp.
    ///
    /// See [`Timestamp::parse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the governing list of layouts is empty or if none of its layouts
    /// matches `text`.
    pub fn parse(&self, layouts: Option<Layouts>, text: &str) -> Result<Timestamp> {
        Timestamp::parse(layouts, &self.defaults, text)
    }

    /// Produces the serialized payload of `timestamp`.
    ///
    /// See [`Timestamp::marshal`].
    ///
    /// # Errors
    ///
    /// Returns an error if the governing list of layouts is empty or if its primary layout
    /// cannot render the instant.
    pub fn marshal(&self, timestamp: &Timestamp) -> Result<String> {
        timestamp.marshal(&self.defaults)
    }

    /// Consumes a serialized payload and overwrites the instant of `timestamp` in place.
    ///
    /// See [`Timestamp::unmarshal`].
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` is not a quoted UTF-8 string, if the governing list of
    /// layouts is empty, or if none of its layouts matches the text.
    pub fn unmarshal(&self, timestamp: &mut Timestamp, payload: &[u8]) -> Result<()> {
        timestamp.unmarshal(&self.defaults, payload)
    }
}

impl Default for Codec {
    /// Creates a codec with [`Layouts::standard`] as defaults.
    fn default() -> Self {
        Self::new(Layouts::standard())
    }
}

impl From<Layouts> for Codec {
    fn from(value: Layouts) -> Self {
        Self::new(value)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;

    static_assertions::assert_impl_all!(Codec: Clone, Default, Send, Sync, From<Layouts>);

    const UTC_LITERAL: Layout = Layout::new("%Y-%m-%dT%H:%M:%SZ");

    #[test]
    fn default_uses_standard_layouts() {
        assert_eq!(Codec::default().defaults(), &Layouts::standard());
    }

    #[test]
    fn defaults_are_configurable() {
        let mut codec = Codec::new(Layouts::empty());
        assert!(codec.parse(None, "2023-01-01T00:00:00Z").unwrap_err().is_no_layout_defined());

        codec.defaults_mut().push(UTC_LITERAL);
        let stamp = codec.parse(None, "2023-01-01T00:00:00Z").unwrap();
        assert_eq!(codec.marshal(&stamp).unwrap(), r#""2023-01-01T00:00:00Z""#);

        codec.set_defaults(Layouts::from_iter([Layout::DATE_ONLY]));
        assert_eq!(codec.marshal(&stamp).unwrap(), r#""2023-01-01""#);
    }

    #[test]
    fn own_layouts_override_defaults() {
        let codec = Codec::from(Layouts::from_iter(["%d/%m/%Y"]));
        let mut stamp = codec.parse(Some(Layouts::from_iter([Layout::DATE_ONLY])), "2023-04-05").unwrap();

        assert_eq!(codec.marshal(&stamp).unwrap(), r#""2023-04-05""#);

        codec.unmarshal(&mut stamp, br#""2024-06-07""#).unwrap();
        assert_eq!(codec.marshal(&stamp).unwrap(), r#""2024-06-07""#);

        // the defaults would accept this payload, the own layouts do not
        codec.unmarshal(&mut stamp, br#""08/09/2025""#).unwrap_err();
        assert_eq!(codec.marshal(&stamp).unwrap(), r#""2024-06-07""#);
    }
}
