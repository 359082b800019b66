// crates/extract_code_examples/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Line that opens a recognized fenced code block in the documentation.
/// Must match the whole (rstripped) line exactly.
pub const FENCE_OPEN: &str = "```rust";

/// Line that closes a fenced code block. Whole-line match, same as above.
pub const FENCE_CLOSE: &str = "```";

/// Scans the given lines and returns the interior lines of every fenced
/// code block opened by [`FENCE_OPEN`] and closed by [`FENCE_CLOSE`],
/// in file order. Consecutive blocks are separated by two empty lines;
/// no separator follows the final block.
///
/// Lines outside any fence are dropped. A fence that is opened but never
/// closed keeps its interior lines. There is no escaping: an interior line
/// equal to the close marker closes the block.
pub fn extract_code_examples<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut output: Vec<String> = Vec::new();
    let mut in_block = false;
    let mut block_closed = false;

    for line in lines {
        let line = line.as_ref();
        if !in_block {
            if line == FENCE_OPEN {
                // Separator between blocks, never after the last one.
                if block_closed {
                    output.push(String::new());
                    output.push(String::new());
                }
                in_block = true;
            }
        } else if line == FENCE_CLOSE {
            in_block = false;
            block_closed = true;
        } else {
            output.push(line.to_string());
        }
    }

    output
}

/// Reads the documentation file at the given path and returns its lines
/// with trailing whitespace removed.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_doc_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    Ok(content.lines().map(|line| line.trim_end().to_string()).collect())
}

/// Joins the given lines with newlines and writes them to the path,
/// overwriting any previous contents. No trailing newline is added beyond
/// what joining produces.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_example_source<P: AsRef<str>, Q: AsRef<Path>>(path: Q, lines: &[P]) -> Result<()> {
    let path = path.as_ref();
    let joined = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, joined)
        .with_context(|| format!("Error writing file {}", path.display()))
}
