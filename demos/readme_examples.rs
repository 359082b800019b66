let lines = extract_code_examples::read_doc_lines("README.md")?;
let examples = extract_code_examples::extract_code_examples(&lines);