//
//  ynab-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON writers.

use serde::Serialize;
use std::io::{self, Write};

/// Prints `value` as indented JSON.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes `value` as indented JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Prints `value` as single-line JSON.
pub fn write_json_compact<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_compact_to(&mut handle, value)
}

/// Writes `value` as single-line JSON followed by a newline.
pub fn write_json_compact_to<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to() {
        let mut buf = Vec::new();
        write_json_to(&mut buf, &json!({"name": "test"})).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"name\": \"test\"\n}\n");
    }

    #[test]
    fn test_write_json_compact_to() {
        let mut buf = Vec::new();
        write_json_compact_to(&mut buf, &json!({"name": "test", "value": 42})).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"name\":\"test\",\"value\":42}\n"
        );
    }
}
