// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use jiff::Zoned;
use jiff::fmt::strtime::{self, BrokenDownTime};
use jiff::tz::TimeZone;

/// A pattern describing how an instant is rendered as text and parsed back.
///
/// Layouts use the `strftime`/`strptime` conversion specifiers implemented by
/// [`jiff::fmt::strtime`]. For example, `%Y-%m-%d %H:%M:%S` matches `2024-08-06 21:30:00`.
/// The pattern is opaque to this crate and is passed as is to the parser and formatter.
///
/// # Time zones
///
/// When a layout carries a UTC offset (`%z` or `%:z`) or a time zone name (`%Q`), the parsed
/// instant keeps that zone and formatting it again reproduces it. A layout without any zone
/// is interpreted in UTC. Unix timestamps (`%s`) are exact instants and are placed in UTC
/// unless the layout also names a zone.
///
/// # Partial dates
///
/// Fields missing from the parsed date default to year 0, January 1. A clock-only layout
/// such as [`Layout::KITCHEN`] therefore yields a time on `0000-01-01`.
///
/// # Well-known layouts
///
/// The associated constants mirror widely used formats. [`Layouts::standard`][crate::Layouts::standard]
/// combines them into a default priority list.
///
/// # Examples
///
/// ```
/// use stampede::Layout;
///
/// const KITCHEN_LOG: Layout = Layout::new("%d/%m/%Y %H:%M");
/// assert_eq!(KITCHEN_LOG.as_str(), "%d/%m/%Y %H:%M");
///
/// let dynamic = Layout::from(String::from("%Y"));
/// assert_eq!(dynamic.to_string(), "%Y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Layout(Cow<'static, str>);

impl Layout {
    /// RFC 3339 with a numeric offset, for example `2006-01-02T15:04:05+07:00`.
    pub const RFC3339: Self = Self::new("%Y-%m-%dT%H:%M:%S%:z");

    /// RFC 3339 with optional fractional seconds, for example `2006-01-02T15:04:05.999+07:00`.
    pub const RFC3339_NANO: Self = Self::new("%Y-%m-%dT%H:%M:%S%.f%:z");

    /// The C `asctime` layout, for example `Mon Jan  2 15:04:05 2006`.
    pub const ANSIC: Self = Self::new("%a %b %e %H:%M:%S %Y");

    /// The layout used by Ruby's `Time#to_s`, for example `Mon Jan 02 15:04:05 -0700 2006`.
    pub const RUBY_DATE: Self = Self::new("%a %b %d %H:%M:%S %z %Y");

    /// RFC 822 with a numeric zone, for example `02 Jan 06 15:04 -0700`.
    pub const RFC822Z: Self = Self::new("%d %b %y %H:%M %z");

    /// RFC 1123 with a numeric zone, for example `Mon, 02 Jan 2006 15:04:05 -0700`.
    pub const RFC1123Z: Self = Self::new("%a, %d %b %Y %H:%M:%S %z");

    /// A plain date and time, for example `2006-01-02 15:04:05`.
    pub const DATE_TIME: Self = Self::new("%Y-%m-%d %H:%M:%S");

    /// A plain date, for example `2006-01-02`.
    pub const DATE_ONLY: Self = Self::new("%Y-%m-%d");

    /// A wall clock time, for example `3:04PM`. Formatting pads the hour to two digits.
    pub const KITCHEN: Self = Self::new("%I:%M%p");

    /// A syslog style stamp without year, for example `Jan  2 15:04:05`.
    pub const STAMP: Self = Self::new("%b %e %H:%M:%S");

    /// [`Layout::STAMP`] with milliseconds, for example `Jan  2 15:04:05.000`.
    pub const STAMP_MILLI: Self = Self::new("%b %e %H:%M:%S%.3f");

    /// [`Layout::STAMP`] with microseconds, for example `Jan  2 15:04:05.000000`.
    pub const STAMP_MICRO: Self = Self::new("%b %e %H:%M:%S%.6f");

    /// [`Layout::STAMP`] with nanoseconds, for example `Jan  2 15:04:05.000000000`.
    pub const STAMP_NANO: Self = Self::new("%b %e %H:%M:%S%.9f");

    /// Creates a layout from a static pattern.
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self(Cow::Borrowed(pattern))
    }

    /// Returns the pattern of this layout.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn parse(&self, text: &str) -> Result<Zoned, jiff::Error> {
        let mut parsed = strtime::parse(self.as_str(), text)?;
        let has_zone = parsed.offset().is_some() || parsed.iana_time_zone().is_some();

        if parsed.timestamp().is_some() {
            return if has_zone {
                parsed.to_zoned()
            } else {
                Ok(parsed.to_timestamp()?.to_zoned(TimeZone::UTC))
            };
        }

        fill_missing_date(&mut parsed)?;

        if has_zone {
            parsed.to_zoned()
        } else {
            parsed.to_datetime()?.to_zoned(TimeZone::UTC)
        }
    }

    pub(crate) fn format(&self, instant: &Zoned) -> Result<String, jiff::Error> {
        strtime::format(self.as_str(), instant)
    }
}

/// Completes a date without year, month or day with year 0, January 1.
///
/// Week based and ordinal dates are left alone.
fn fill_missing_date(parsed: &mut BrokenDownTime) -> Result<(), jiff::Error> {
    if parsed.iso_week_year().is_some() {
        return Ok(());
    }

    if parsed.year().is_none() {
        parsed.set_year(Some(0))?;
    }

    let has_day_in_year =
        parsed.day_of_year().is_some() || parsed.sunday_based_week().is_some() || parsed.monday_based_week().is_some();

    if !has_day_in_year {
        if parsed.month().is_none() {
            parsed.set_month(Some(1))?;
        }

        if parsed.day().is_none() {
            parsed.set_day(Some(1))?;
        }
    }

    Ok(())
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Layout {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Layout {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Layout {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

#[cfg(any(feature = "serde", test))]
impl serde_core::Serialize for Layout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(any(feature = "serde", test))]
impl<'de> serde_core::Deserialize<'de> for Layout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde_core::Deserializer<'de>,
    {
        <String as serde_core::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::fmt::Debug;
    use std::hash::Hash;

    use jiff::civil::date;
    use jiff::tz;

    use super::*;

    static_assertions::assert_impl_all!(Layout: Debug, Clone, PartialEq, Eq, Hash, Display, Send, Sync, From<String>, From<&'static str>);

    #[test]
    fn parse_without_offset_is_utc() {
        let instant = Layout::DATE_TIME.parse("2015-12-31 23:59:10").unwrap();

        assert_eq!(instant.offset(), tz::Offset::UTC);
        assert_eq!(instant.datetime(), date(2015, 12, 31).at(23, 59, 10, 0));
    }

    #[test]
    fn parse_keeps_offset() {
        let instant = Layout::RUBY_DATE.parse("Mon Jan 02 15:04:05 -0700 2006").unwrap();

        assert_eq!(instant.offset(), tz::offset(-7));
        assert_eq!(instant.datetime(), date(2006, 1, 2).at(15, 4, 5, 0));
    }

    #[test]
    fn parse_keeps_zone_name() {
        let layout = Layout::new("%Y-%m-%d %H:%M %Q");
        let instant = layout.parse("2024-01-01 10:00 America/New_York").unwrap();

        assert_eq!(instant.time_zone().iana_name(), Some("America/New_York"));
        assert_eq!(instant.offset(), tz::offset(-5));
        assert_eq!(instant.timestamp().to_string(), "2024-01-01T15:00:00Z");

        layout.parse("2024-01-01 10:00 Mars/Olympus_Mons").unwrap_err();
    }

    #[test]
    fn parse_unix_seconds_is_utc() {
        let instant = Layout::new("%s").parse("1700000000").unwrap();

        assert_eq!(instant.timestamp(), jiff::Timestamp::from_second(1_700_000_000).unwrap());
        assert_eq!(instant.offset(), tz::Offset::UTC);
    }

    #[test]
    fn parse_unix_seconds_with_offset() {
        let instant = Layout::new("%s %z").parse("1700000000 +0100").unwrap();

        assert_eq!(instant.timestamp(), jiff::Timestamp::from_second(1_700_000_000).unwrap());
        assert_eq!(instant.offset(), tz::offset(1));
    }

    #[test]
    fn parse_kitchen_fills_date() {
        let instant = Layout::KITCHEN.parse("3:04PM").unwrap();

        assert_eq!(instant.datetime(), date(0, 1, 1).at(15, 4, 0, 0));
        assert_eq!(instant.offset(), tz::Offset::UTC);
    }

    #[test]
    fn parse_stamps_fill_year() {
        let instant = Layout::STAMP.parse("Jan  2 15:04:05").unwrap();
        assert_eq!(instant.datetime(), date(0, 1, 2).at(15, 4, 5, 0));

        let instant = Layout::STAMP_MILLI.parse("Feb 28 15:04:05.123").unwrap();
        assert_eq!(instant.datetime(), date(0, 2, 28).at(15, 4, 5, 123_000_000));

        let instant = Layout::STAMP_NANO.parse("Dec 31 23:59:59.999999999").unwrap();
        assert_eq!(instant.subsec_nanosecond(), 999_999_999);
    }

    #[test]
    fn parse_time_with_offset_fills_date() {
        let instant = Layout::new("%H:%M %z").parse("10:30 +0200").unwrap();

        assert_eq!(instant.datetime(), date(0, 1, 1).at(10, 30, 0, 0));
        assert_eq!(instant.offset(), tz::offset(2));
    }

    #[test]
    fn parse_day_of_year_is_kept() {
        let instant = Layout::new("%Y-%j").parse("2024-060").unwrap();

        assert_eq!(instant.date(), date(2024, 2, 29));
    }

    #[test]
    fn parse_date_only_is_midnight() {
        let instant = Layout::DATE_ONLY.parse("2023-06-15").unwrap();

        assert_eq!(instant.datetime(), date(2023, 6, 15).at(0, 0, 0, 0));
    }

    #[test]
    fn parse_mismatch() {
        Layout::DATE_ONLY.parse("15.06.2023").unwrap_err();
    }

    #[test]
    fn parse_rejects_wrong_weekday() {
        Layout::RUBY_DATE.parse("Tue Jan 02 15:04:05 -0700 2006").unwrap_err();
    }

    #[test]
    fn format_reproduces_offset() {
        let instant = Layout::RUBY_DATE.parse("Mon Jan 02 15:04:05 -0700 2006").unwrap();

        assert_eq!(Layout::RUBY_DATE.format(&instant).unwrap(), "Mon Jan 02 15:04:05 -0700 2006");
        assert_eq!(Layout::RFC3339.format(&instant).unwrap(), "2006-01-02T15:04:05-07:00");
    }

    #[test]
    fn format_literal_zone() {
        let layout = Layout::new("%Y-%m-%dT%H:%M:%SZ");
        let instant = layout.parse("2023-01-01T00:00:00Z").unwrap();

        assert_eq!(layout.format(&instant).unwrap(), "2023-01-01T00:00:00Z");
    }

    #[test]
    fn owned_and_borrowed_are_equal() {
        assert_eq!(Layout::from(String::from("%Y")), Layout::new("%Y"));
    }

    #[test]
    fn serialize_deserialize() {
        let json = serde_json::to_string(&Layout::DATE_ONLY).unwrap();
        assert_eq!(json, r#""%Y-%m-%d""#);

        let layout: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, Layout::DATE_ONLY);
    }
}
