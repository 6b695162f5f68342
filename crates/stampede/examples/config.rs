// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This example demonstrates loading the default layouts from a configuration document
//! and using the codec with serde.

use serde::de::DeserializeSeed;
use stampede::{Codec, Layouts};

const CONFIG: &str = r#"["%Y-%m-%d %H:%M:%S", "%d.%m.%Y %H:%M", "%Y-%m-%d"]"#;

#[derive(serde::Serialize)]
struct Record<'a> {
    id: u32,
    created: stampede::Serializable<'a>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let defaults: Layouts = serde_json::from_str(CONFIG)?;
    let codec = Codec::new(defaults);

    let mut deserializer = serde_json::Deserializer::from_str(r#""24.12.2023 18:30""#);
    let created = codec.seed(None).deserialize(&mut deserializer)?;

    let record = Record {
        id: 7,
        created: codec.serializable(&created),
    };

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
