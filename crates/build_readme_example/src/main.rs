use anyhow::{Context, Result};

use extract_code_examples::{extract_code_examples, read_doc_lines, write_example_source};

/// Documentation file the examples are extracted from, relative to the
/// directory the binary is run in.
const README_PATH: &str = "README.md";

/// Generated source file holding the concatenated examples.
const EXAMPLE_PATH: &str = "demos/readme_examples.rs";

fn main() -> Result<()> {
    let lines = read_doc_lines(README_PATH)
        .context("Failed to read the documentation file")?;

    let examples = extract_code_examples(&lines);

    write_example_source(EXAMPLE_PATH, &examples)
        .context("Failed to write the generated example file")?;

    println!("Wrote {} example lines to {}", examples.len(), EXAMPLE_PATH);

    Ok(())
}
