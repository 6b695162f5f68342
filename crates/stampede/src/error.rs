// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt;

use crate::Layout;

/// The result type for fallible operations that use the [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while resolving layouts, parsing or formatting timestamps.
///
/// The following errors exist:
///
/// * No layout could be resolved, because the governing list of layouts is empty.
/// * Every layout was tried and none of them matched the input.
/// * The primary layout could not render the instant.
/// * A serialized payload is not a quoted string.
///
/// # Introspection
///
/// The kind of error is exposed through the `is_*` predicates. When all layouts failed,
/// [`Error::layout`] returns the last layout that was attempted and
/// [`std::error::Error::source`] returns the error that layout produced. Errors of
/// earlier attempts are not retained.
///
/// # Examples
///
/// ```
/// use stampede::{Layout, parse_with_fallback};
///
/// let err = parse_with_fallback(&[Layout::new("%a %b %e")], "not-a-date").unwrap_err();
///
/// assert!(err.is_all_layouts_failed());
/// assert_eq!(err.layout().map(Layout::as_str), Some("%a %b %e"));
/// ```
#[derive(Debug)]
pub struct Error(ErrorKind);

#[derive(Debug)]
enum ErrorKind {
    NoLayoutDefined,
    AllLayoutsFailed {
        text: String,
        layout: Layout,
        source: jiff::Error,
    },
    Format {
        layout: Layout,
        source: jiff::Error,
    },
    MalformedPayload(Cow<'static, str>),
}

impl Error {
    const fn from_kind(kind: ErrorKind) -> Self {
        Self(kind)
    }

    pub(crate) const fn no_layout_defined() -> Self {
        Self::from_kind(ErrorKind::NoLayoutDefined)
    }

    pub(crate) fn all_layouts_failed(text: &str, layout: Layout, source: jiff::Error) -> Self {
        Self::from_kind(ErrorKind::AllLayoutsFailed {
            text: text.to_owned(),
            layout,
            source,
        })
    }

    pub(crate) const fn format(layout: Layout, source: jiff::Error) -> Self {
        Self::from_kind(ErrorKind::Format { layout, source })
    }

    pub(crate) fn malformed_payload(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_kind(ErrorKind::MalformedPayload(message.into()))
    }

    /// Returns `true` if the governing list of layouts was empty.
    #[must_use]
    pub const fn is_no_layout_defined(&self) -> bool {
        matches!(self.0, ErrorKind::NoLayoutDefined)
    }

    /// Returns `true` if at least one layout was attempted and none of them matched.
    #[must_use]
    pub const fn is_all_layouts_failed(&self) -> bool {
        matches!(self.0, ErrorKind::AllLayoutsFailed { .. })
    }

    /// Returns `true` if the primary layout could not render the instant.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self.0, ErrorKind::Format { .. })
    }

    /// Returns `true` if a serialized payload was not a quoted UTF-8 string.
    #[must_use]
    pub const fn is_malformed_payload(&self) -> bool {
        matches!(self.0, ErrorKind::MalformedPayload(_))
    }

    /// Returns the layout responsible for this error, if any.
    ///
    /// For parse failures this is the last layout that was attempted, for format
    /// failures the primary layout.
    #[must_use]
    pub const fn layout(&self) -> Option<&Layout> {
        match &self.0 {
            ErrorKind::AllLayoutsFailed { layout, .. } | ErrorKind::Format { layout, .. } => Some(layout),
            ErrorKind::NoLayoutDefined | ErrorKind::MalformedPayload(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorKind::NoLayoutDefined => write!(f, "no layout defined"),
            ErrorKind::AllLayoutsFailed { text, layout, source } => {
                write!(f, "parsing {text:?} with layout {:?} failed: {source}", layout.as_str())
            }
            ErrorKind::Format { layout, source } => {
                write!(f, "formatting with layout {:?} failed: {source}", layout.as_str())
            }
            ErrorKind::MalformedPayload(msg) => write!(f, "malformed payload: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            ErrorKind::AllLayoutsFailed { source, .. } | ErrorKind::Format { source, .. } => Some(source),
            ErrorKind::NoLayoutDefined | ErrorKind::MalformedPayload(_) => None,
        }
    }
}
