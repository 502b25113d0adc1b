// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_report(sections: usize) -> String {
    let base = "# Section\n\nOwner: \"ops\" with `cargo`\n\nParagraph with **bold**, md``marked **inner** text`` and *italic*.\n\n- Bullet point\n1. Numbered\n\n| Name | Value |\n|:-----|------:|\n| a | **1** |\n| b | 2 |\n\n> ## Quoted heading\n> - quoted item\n> ```sh\n> echo hi\n> ```\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n---\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_inline_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!(
            "word {i} **bold {i}** \"quote {i}\" `code {i}` md``mark **{i}**`` "
        ));
    }
    line
}
