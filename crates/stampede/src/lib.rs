// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Fallback parsing of timestamps against an ordered list of layouts.
//!
//! Real-world data rarely agrees on a single timestamp format. This crate tries a
//! prioritized list of [`Layout`]s against an input, returns the first one that matches,
//! and remembers which layouts a [`Timestamp`] should be formatted with when it is
//! serialized again.
//!
//! # Quick Start
//!
//! ```
//! use stampede::{Codec, Layouts};
//!
//! // The composition root owns the default layouts.
//! let codec = Codec::new(Layouts::from_iter(["%Y-%m-%dT%H:%M:%SZ", "%d %b %Y %H:%M"]));
//!
//! // The second layout matches, so it is used for parsing.
//! let stamp = codec.parse(None, "02 Jan 2006 15:04")?;
//!
//! // Serialization always uses the first (primary) layout.
//! assert_eq!(codec.marshal(&stamp)?, r#""2006-01-02T15:04:00Z""#);
//!
//! # Ok::<(), stampede::Error>(())
//! ```
//!
//! # Overview
//!
//! - [`Layout`] - A `strftime`/`strptime` style pattern, such as `%Y-%m-%d %H:%M:%S`.
//!   The dialect is the one implemented by [`jiff::fmt::strtime`].
//! - [`Layouts`] - An ordered list of layouts. The order defines the parsing priority and
//!   the first entry is the *primary* layout used for formatting.
//! - [`parse_with_fallback`] - Tries every layout in order, first success wins.
//! - [`resolve_layouts`] - Decides whether a timestamp's own layouts or the defaults apply.
//! - [`Timestamp`] - An instant together with an optional private list of layouts.
//! - [`Codec`] - Holds the default layouts and exposes the parse, marshal and unmarshal
//!   entry points.
//! - [`Error`] - The error type for all fallible operations.
//!
//! # Own layouts versus default layouts
//!
//! A [`Timestamp`] without own layouts defers to the defaults of the [`Codec`] it is used
//! with. Once own layouts are set they strictly override the defaults, even when the own
//! list is empty. An empty list fails every operation with a "no layout defined" error.
//!
//! ```
//! use stampede::{Codec, Layouts};
//!
//! let codec = Codec::default();
//! let mut stamp = codec.parse(None, "2015-12-31T23:59:00+00:00")?;
//!
//! stamp.set_layouts(Layouts::from_iter(["%Y-%m-%d %H:%M"]));
//! assert_eq!(codec.marshal(&stamp)?, r#""2015-12-31 23:59""#);
//!
//! stamp.set_layouts(Layouts::empty());
//! assert!(codec.marshal(&stamp).unwrap_err().is_no_layout_defined());
//!
//! # Ok::<(), stampede::Error>(())
//! ```
//!
//! # Features
//!
//! - **`serde`** - Adds [`Codec::serializable`] and [`Codec::seed`] adaptors for use with
//!   [serde](https://serde.rs/), and makes [`Layout`] and [`Layouts`] loadable from
//!   configuration documents.
//! - **`logs`** - Emits `tracing` events for every layout attempt.

mod codec;
mod error;
mod fallback;
mod layout;
mod layouts;
#[cfg(any(feature = "serde", test))]
mod serialization;
mod timestamp;

#[cfg(test)]
mod testing;

pub use codec::Codec;
pub use error::{Error, Result};
pub use fallback::{parse_with_fallback, resolve_layouts};
pub use layout::Layout;
pub use layouts::Layouts;
#[cfg(any(feature = "serde", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use serialization::{Serializable, TimestampSeed};
pub use timestamp::Timestamp;
