//! Build script to generate the embedded puzzle
//!
//! Reads the board letters and word list and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate board letters
    generate_letters(
        "data/letters.txt",
        &Path::new(&out_dir).join("letters.rs"),
        "LETTERS",
        "Default honeycomb letters, center tile first",
    );

    // Generate acceptable words
    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Acceptable words for the default honeycomb",
    );

    // Rebuild if puzzle data changes
    println!("cargo:rerun-if-changed=data/letters.txt");
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_letters(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let letters: Vec<char> = content.trim().chars().collect();
    assert_eq!(letters.len(), 7, "{input_path} must hold exactly 7 letters");

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated board letters").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    write!(output, "pub const {const_name}: [char; 7] = [").unwrap();
    for letter in letters {
        write!(output, "'{}', ", letter.to_ascii_uppercase()).unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_ascii_uppercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
