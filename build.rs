//! Build script embedding the bundled English word lists
//!
//! Each list becomes a `pub const NAME: &[&str]` plus `NAME_COUNT`.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/en_answers.txt",
        "answers.rs",
        "ANSWERS",
        "Bundled English answer pool, in file order",
    ),
    (
        "data/en_guesses.txt",
        "guesses.rs",
        "GUESSES",
        "Bundled English acceptable guesses",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for &(input, output, const_name, doc) in LISTS {
        generate_word_list(input, &Path::new(&out_dir).join(output), const_name, doc);
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut source = format!("/// {doc_comment}\npub const {const_name}: &[&str] = &[\n");
    for word in &words {
        source.push_str(&format!("    {word:?},\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!(
        "/// Number of words in {const_name}\npub const {const_name}_COUNT: usize = {};\n",
        words.len()
    ));

    output
        .write_all(source.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
