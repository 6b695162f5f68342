// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::{Error, Layouts, Result, parse_with_fallback, resolve_layouts};

const QUOTE: char = '"';

/// An instant together with an optional private list of layouts.
///
/// The private layouts decide how the timestamp is formatted and how a serialized payload
/// is parsed back into it. Without private layouts, the defaults supplied by the caller
/// (usually by a [`Codec`][crate::Codec]) apply. Private layouts strictly override the
/// defaults, even when the private list is empty.
///
/// `Timestamp` is a plain value. Formatting never changes it and the layouts change only
/// through [`Timestamp::set_layouts`] and [`Timestamp::clear_layouts`]. Use
/// `Option<Timestamp>` where a timestamp may be absent.
///
/// # Creation
///
/// - [`Timestamp::new`] wraps an existing instant without private layouts.
/// - [`Timestamp::with_layouts`] wraps an existing instant with private layouts.
/// - [`Timestamp::parse`] parses text, see below.
/// - [`Timestamp::default`] holds the Unix epoch in UTC and has no private layouts.
///
/// # Parsing and formatting
///
/// ```
/// use stampede::{Layouts, Timestamp};
///
/// let defaults = Layouts::standard();
/// let own = Layouts::from_iter(["%Y-%m-%d %H:%M"]);
///
/// let stamp = Timestamp::parse(Some(own), &defaults, "2015-12-31 23:59")?;
///
/// // The first of the private layouts is used for formatting.
/// assert_eq!(stamp.format(&defaults)?, "2015-12-31 23:59");
/// assert_eq!(stamp.marshal(&defaults)?, r#""2015-12-31 23:59""#);
///
/// # Ok::<(), stampede::Error>(())
/// ```
///
/// # Unmarshaling in place
///
/// [`Timestamp::unmarshal`] overwrites the instant and keeps the layouts. When parsing
/// fails, the previous instant is kept and the error is returned.
///
/// ```
/// use stampede::{Layouts, Timestamp};
///
/// let defaults = Layouts::standard();
///
/// let mut stamp = Timestamp::default();
/// stamp.set_layouts(Layouts::from_iter(["%d %B %Y %H hours %M minutes %S seconds"]));
///
/// stamp.unmarshal(&defaults, br#""06 January 2018 11 hours 44 minutes 55 seconds""#)?;
/// assert_eq!(stamp.instant().to_string(), "2018-01-06T11:44:55+00:00[UTC]");
///
/// # Ok::<(), stampede::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    instant: Zoned,
    layouts: Option<Layouts>,
}

impl Timestamp {
    /// Creates a timestamp without private layouts.
    #[must_use]
    pub const fn new(instant: Zoned) -> Self {
        Self { instant, layouts: None }
    }

    /// Creates a timestamp with private layouts.
    #[must_use]
    pub const fn with_layouts(instant: Zoned, layouts: Layouts) -> Self {
        Self {
            instant,
            layouts: Some(layouts),
        }
    }

    /// Parses `text` into a timestamp.
    ///
    /// When `layouts` is `None`, the `defaults` are used for parsing and the resulting
    /// timestamp has no private layouts. Otherwise, `layouts` become the private layouts
    /// of the timestamp and are the only layouts tried, even when they are empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the governing list of layouts is empty or if none of its layouts
    /// matches `text`. See [`parse_with_fallback`] for details.
    pub fn parse(layouts: Option<Layouts>, defaults: &Layouts, text: &str) -> Result<Self> {
        let instant = parse_with_fallback(resolve_layouts(layouts.as_ref(), defaults)?, text)?;

        Ok(Self { instant, layouts })
    }

    /// Returns the instant.
    #[must_use]
    pub const fn instant(&self) -> &Zoned {
        &self.instant
    }

    /// Replaces the instant.
    pub fn set_instant(&mut self, instant: Zoned) {
        self.instant = instant;
    }

    /// Consumes the timestamp and returns the instant.
    #[must_use]
    pub fn into_instant(self) -> Zoned {
        self.instant
    }

    /// Returns the private layouts, or `None` if the timestamp defers to the defaults.
    #[must_use]
    pub const fn layouts(&self) -> Option<&Layouts> {
        self.layouts.as_ref()
    }

    /// Sets the private layouts. They override the defaults from now on.
    pub fn set_layouts(&mut self, layouts: Layouts) {
        self.layouts = Some(layouts);
    }

    /// Removes the private layouts so that the timestamp defers to the defaults again.
    pub fn clear_layouts(&mut self) {
        self.layouts = None;
    }

    /// Returns the layouts that govern this timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the governing list of layouts is empty.
    pub fn resolve_layouts<'a>(&'a self, defaults: &'a Layouts) -> Result<&'a Layouts> {
        resolve_layouts(self.layouts.as_ref(), defaults)
    }

    /// Formats the instant with the primary layout of the governing list.
    ///
    /// # Errors
    ///
    /// Returns an error if the governing list of layouts is empty or if the primary layout
    /// cannot render the instant.
    pub fn format(&self, defaults: &Layouts) -> Result<String> {
        let primary = self
            .layouts
            .as_ref()
            .unwrap_or(defaults)
            .primary()
            .ok_or_else(Error::no_layout_defined)?;

        primary.format(&self.instant).map_err(|error| Error::format(primary.clone(), error))
    }

    /// Produces the serialized payload of this timestamp, a quoted string formatted with
    /// the primary layout of the governing list.
    ///
    /// No payload is produced when formatting fails.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Timestamp::format`].
    pub fn marshal(&self, defaults: &Layouts) -> Result<String> {
        let formatted = self.format(defaults)?;

        Ok(format!("{QUOTE}{formatted}{QUOTE}"))
    }

    /// Consumes a serialized payload and overwrites the instant in place.
    ///
    /// The surrounding quotes are stripped and the remaining text is parsed with the
    /// governing list of layouts. The private layouts are never modified. When an error is
    /// returned, the instant keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` is not a quoted UTF-8 string, if the governing list of
    /// layouts is empty, or if none of its layouts matches the text.
    pub fn unmarshal(&mut self, defaults: &Layouts, payload: &[u8]) -> Result<()> {
        let text = unquote(payload)?;
        let instant = parse_with_fallback(self.resolve_layouts(defaults)?, text)?;

        self.instant = instant;
        Ok(())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::new(jiff::Timestamp::UNIX_EPOCH.to_zoned(TimeZone::UTC))
    }
}

impl From<Zoned> for Timestamp {
    fn from(value: Zoned) -> Self {
        Self::new(value)
    }
}

impl From<Timestamp> for Zoned {
    fn from(value: Timestamp) -> Self {
        value.into_instant()
    }
}

fn unquote(payload: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(payload).map_err(|error| Error::malformed_payload(format!("payload is not valid UTF-8: {error}")))?;

    text.strip_prefix(QUOTE)
        .and_then(|text| text.strip_suffix(QUOTE))
        .ok_or_else(|| Error::malformed_payload("payload is not a quoted string"))
}
