// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use serde_core::de::{self, DeserializeSeed};
use serde_core::ser;

use crate::{Codec, Layouts, Timestamp};

impl Codec {
    /// Returns a [`serde_core::Serialize`] view of `timestamp` that formats with this
    /// codec's defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use stampede::{Codec, Layouts};
    ///
    /// let codec = Codec::new(Layouts::from_iter(["%Y-%m-%d"]));
    /// let stamp = codec.parse(None, "2023-12-24")?;
    ///
    /// let json = serde_json::to_string(&codec.serializable(&stamp))?;
    /// assert_eq!(json, r#""2023-12-24""#);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub const fn serializable<'a>(&'a self, timestamp: &'a Timestamp) -> Serializable<'a> {
        Serializable {
            timestamp,
            defaults: self.defaults(),
        }
    }

    /// Returns a [`DeserializeSeed`] that parses a string into a [`Timestamp`].
    ///
    /// `layouts` become the private layouts of the produced timestamp, see
    /// [`Timestamp::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use serde::de::DeserializeSeed;
    /// use stampede::Codec;
    ///
    /// let codec = Codec::default();
    /// let mut deserializer = serde_json::Deserializer::from_str(r#""2023-12-24 18:00:00""#);
    ///
    /// let stamp = codec.seed(None).deserialize(&mut deserializer)?;
    /// assert_eq!(stamp.instant().hour(), 18);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub const fn seed(&self, layouts: Option<Layouts>) -> TimestampSeed<'_> {
        TimestampSeed {
            defaults: self.defaults(),
            layouts,
        }
    }
}

/// Serializes a [`Timestamp`] as a string formatted with its governing primary layout.
///
/// Created by [`Codec::serializable`].
#[derive(Debug, Clone, Copy)]
pub struct Serializable<'a> {
    timestamp: &'a Timestamp,
    defaults: &'a Layouts,
}

impl ser::Serialize for Serializable<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let formatted = self.timestamp.format(self.defaults).map_err(<S::Error as ser::Error>::custom)?;

        serializer.serialize_str(&formatted)
    }
}

/// Deserializes a string into a [`Timestamp`] by fallback parsing.
///
/// Created by [`Codec::seed`].
#[derive(Debug, Clone)]
pub struct TimestampSeed<'a> {
    defaults: &'a Layouts,
    layouts: Option<Layouts>,
}

impl<'de> DeserializeSeed<'de> for TimestampSeed<'_> {
    type Value = Timestamp;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor(self))
    }
}

struct TimestampVisitor<'a>(TimestampSeed<'a>);

impl de::Visitor<'_> for TimestampVisitor<'_> {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a timestamp string")
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let TimestampSeed { defaults, layouts } = self.0;

        Timestamp::parse(layouts, defaults, text).map_err(E::custom)
    }
}
