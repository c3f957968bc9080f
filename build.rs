//! Build script to generate embedded word lists
//!
//! Reads one answers file and one allowed-guesses file per supported word length
//! and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Word lengths with bundled lists. Must match `core::SUPPORTED_LENGTHS`.
const LENGTHS: [usize; 4] = [4, 5, 6, 7];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for length in LENGTHS {
        generate_word_list(
            &mut output,
            &format!("data/answers_{length}.txt"),
            &format!("ANSWERS_{length}"),
            &format!("Daily answer words with {length} letters"),
            length,
        );
        generate_word_list(
            &mut output,
            &format!("data/allowed_{length}.txt"),
            &format!("ALLOWED_{length}"),
            &format!("Accepted guesses with {length} letters (answers included)"),
            length,
        );

        println!("cargo:rerun-if-changed=data/answers_{length}.txt");
        println!("cargo:rerun-if-changed=data/allowed_{length}.txt");
    }
}

fn generate_word_list(
    output: &mut fs::File,
    input_path: &str,
    const_name: &str,
    doc_comment: &str,
    length: usize,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    for word in &words {
        assert_eq!(
            word.chars().count(),
            length,
            "{input_path}: '{word}' is not {length} letters"
        );
    }

    let count = words.len();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
