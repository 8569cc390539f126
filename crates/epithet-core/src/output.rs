//! Result writers for JSON and JSONL output.
//!
//! JSON output is written as one array, opened on the first item and closed
//! by [`OutputWriter::finish`], so batch results stream out as they are
//! produced instead of being collected first.

use serde::Serialize;
use std::io::{self, Write};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// A JSON array of results
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// Streams serialized results to any writer.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
    items_written: usize,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer. `pretty` only affects JSON format.
    pub fn new(writer: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
            items_written: 0,
        }
    }

    /// Write one item: the next array element for JSON, one line for JSONL.
    pub fn write<T: Serialize>(&mut self, item: &T) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let separator = if self.items_written == 0 { "[" } else { "," };
                if self.pretty {
                    writeln!(self.writer, "{separator}")?;
                    serde_json::to_writer_pretty(&mut self.writer, item)
                        .map_err(io::Error::other)?;
                } else {
                    write!(self.writer, "{separator}")?;
                    serde_json::to_writer(&mut self.writer, item).map_err(io::Error::other)?;
                }
            }
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut self.writer, item).map_err(io::Error::other)?;
                writeln!(self.writer)?;
            }
        }
        self.items_written += 1;
        Ok(())
    }

    /// Number of items written so far.
    pub fn items_written(&self) -> usize {
        self.items_written
    }

    /// Close the JSON array (an empty one if nothing was written) and flush.
    pub fn finish(mut self) -> io::Result<W> {
        if self.format == OutputFormat::Json {
            if self.items_written == 0 {
                writeln!(self.writer, "[]")?;
            } else if self.pretty {
                writeln!(self.writer, "\n]")?;
            } else {
                writeln!(self.writer, "]")?;
            }
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Photo;

    fn photos() -> Vec<Photo> {
        vec![
            Photo::new("a").with_title("Harbor"),
            Photo::new("b").with_tags(["misty"]),
        ]
    }

    fn write_all(format: OutputFormat, pretty: bool, items: &[Photo]) -> String {
        let mut writer = OutputWriter::new(Vec::new(), format, pretty);
        for item in items {
            writer.write(item).unwrap();
        }
        assert_eq!(writer.items_written(), items.len());
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_json_array_streams_valid_json() {
        for pretty in [false, true] {
            let output = write_all(OutputFormat::Json, pretty, &photos());
            let parsed: Vec<Photo> = serde_json::from_str(&output).unwrap();
            assert_eq!(parsed.len(), 2);
            assert_eq!(parsed[1].id, "b");
        }
    }

    #[test]
    fn test_empty_json_array() {
        let output = write_all(OutputFormat::Json, true, &[]);
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn test_jsonl_one_object_per_line() {
        let output = write_all(OutputFormat::JsonLines, true, &photos());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: Photo = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.id, "a");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("jsonl"), Some(OutputFormat::JsonLines));
        assert_eq!(OutputFormat::parse("JSONL"), Some(OutputFormat::JsonLines));
        assert_eq!(OutputFormat::parse("invalid"), None);
    }
}
