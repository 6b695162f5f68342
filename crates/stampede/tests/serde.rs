// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Integration tests for the serde adaptors.

#![cfg(feature = "serde")]

use serde::de::DeserializeSeed;
use stampede::{Codec, Layout, Layouts};

#[derive(serde::Deserialize)]
struct Config {
    layouts: Layouts,
    primary: Layout,
}

#[test]
fn layouts_load_from_configuration() {
    let config: Config = serde_json::from_str(r#"{"layouts":["%d.%m.%Y","%Y-%m-%d"],"primary":"%Y-%m-%dT%H:%M:%SZ"}"#).unwrap();

    let mut codec = Codec::new(config.layouts);
    codec.defaults_mut().insert(0, config.primary);

    let stamp = codec.parse(None, "24.12.2023").unwrap();
    assert_eq!(serde_json::to_string(&codec.serializable(&stamp)).unwrap(), r#""2023-12-24T00:00:00Z""#);
}

#[test]
fn seed_round_trip() {
    let codec = Codec::default();
    let own = Layouts::from_iter([Layout::RFC1123Z]);

    let mut deserializer = serde_json::Deserializer::from_str(r#""Mon, 02 Jan 2006 15:04:05 -0700""#);
    let stamp = codec.seed(Some(own.clone())).deserialize(&mut deserializer).unwrap();

    assert_eq!(stamp.layouts(), Some(&own));
    assert_eq!(
        serde_json::to_string(&codec.serializable(&stamp)).unwrap(),
        r#""Mon, 02 Jan 2006 15:04:05 -0700""#
    );
}

#[test]
fn seed_rejects_unknown_format() {
    let codec = Codec::new(Layouts::from_iter([Layout::DATE_ONLY]));

    let mut deserializer = serde_json::Deserializer::from_str(r#""12/24/2023""#);
    let error = codec.seed(None).deserialize(&mut deserializer).unwrap_err();

    assert!(error.is_data());
}
