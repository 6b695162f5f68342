// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This example demonstrates parsing timestamps of mixed formats and serializing them again.

use stampede::{Codec, Layouts};

fn main() -> Result<(), stampede::Error> {
    // The application owns the default layouts. The standard list starts with RFC 3339.
    let mut codec = Codec::default();

    // Teach the defaults a format seen in legacy data, with the lowest priority.
    codec.defaults_mut().push("%d/%m/%Y %H:%M");

    for text in ["2006-01-02T15:04:05+07:00", "Mon, 02 Jan 2006 15:04:05 -0700", "02/01/2006 15:04"] {
        let stamp = codec.parse(None, text)?;

        // Every timestamp is written back with the primary layout.
        println!("{text:>31} => {}", codec.marshal(&stamp)?);
    }

    // A timestamp with its own layouts ignores the defaults.
    let stamp = codec.parse(Some(Layouts::from_iter(["%Y/%m/%d"])), "2006/01/02")?;
    println!("{:>31} => {}", "2006/01/02", codec.marshal(&stamp)?);

    // Parsing fails with the error of the last layout that was tried.
    if let Err(error) = codec.parse(None, "a while ago") {
        println!("error: {error}");
    }

    Ok(())
}
