// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Zoned;

use crate::{Error, Layout, Layouts, Result};

/// Parses `text` with each of the `layouts` in order and returns the first success.
///
/// Layouts after the first match are never tried, so when several layouts would accept the
/// input, the one with the highest priority wins.
///
/// # Errors
///
/// - If `layouts` is empty, returns an error for which
///   [`Error::is_no_layout_defined`] is `true`.
/// - If no layout matches, returns an error for which [`Error::is_all_layouts_failed`] is
///   `true`. It carries the error of the **last** attempted layout only.
///
/// # Examples
///
/// ```
/// use stampede::{Layout, parse_with_fallback};
///
/// let layouts = [Layout::DATE_ONLY, Layout::new("%d.%m.%Y")];
/// let instant = parse_with_fallback(&layouts, "24.12.2023")?;
///
/// assert_eq!(instant.date(), jiff::civil::date(2023, 12, 24));
///
/// # Ok::<(), stampede::Error>(())
/// ```
#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "the attempt index is only reported through logs")
)]
pub fn parse_with_fallback(layouts: &[Layout], text: &str) -> Result<Zoned> {
    let mut last_failure = None;

    for (attempt, layout) in layouts.iter().enumerate() {
        match layout.parse(text) {
            Ok(instant) => {
                #[cfg(any(feature = "logs", test))]
                tracing::event!(
                    name: "stampede.layout_matched",
                    tracing::Level::DEBUG,
                    layout = %layout,
                    attempt,
                );

                return Ok(instant);
            }
            Err(error) => {
                #[cfg(any(feature = "logs", test))]
                tracing::event!(
                    name: "stampede.layout_rejected",
                    tracing::Level::TRACE,
                    layout = %layout,
                    attempt,
                    error = %error,
                );

                last_failure = Some((layout, error));
            }
        }
    }

    match last_failure {
        Some((layout, error)) => Err(Error::all_layouts_failed(text, layout.clone(), error)),
        None => Err(Error::no_layout_defined()),
    }
}

/// Determines the list of layouts that governs a timestamp.
///
/// Own layouts take precedence and are used verbatim, even when they are empty. Without
/// own layouts the `defaults` apply.
///
/// # Errors
///
/// Returns an error for which [`Error::is_no_layout_defined`] is `true` when the resolved
/// list is empty.
///
/// # Examples
///
/// ```
/// use stampede::{Layout, Layouts, resolve_layouts};
///
/// let defaults = Layouts::standard();
/// let own = Layouts::from_iter([Layout::DATE_ONLY]);
///
/// assert_eq!(resolve_layouts(None, &defaults)?, &defaults);
/// assert_eq!(resolve_layouts(Some(&own), &defaults)?, &own);
/// assert!(resolve_layouts(Some(&Layouts::empty()), &defaults).is_err());
///
/// # Ok::<(), stampede::Error>(())
/// ```
pub fn resolve_layouts<'a>(own: Option<&'a Layouts>, defaults: &'a Layouts) -> Result<&'a Layouts> {
    let resolved = own.unwrap_or(defaults);

    if resolved.is_empty() {
        return Err(Error::no_layout_defined());
    }

    Ok(resolved)
}
