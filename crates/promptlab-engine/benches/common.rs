// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_prompt_template(size: usize) -> String {
    let base = "# Role\n\nYou are a **careful** reviewer.\n\n## Steps\n\n- Read the *input*\n- Check `edge cases`\n1. Summarize\n2. Reply\n\n> Keep answers short.\n\n```json\n{\"format\": \"markdown\"}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();

    for item in 0..items {
        for level in 0..depth {
            let indent = "  ".repeat(level);
            content.push_str(&format!("{indent}- item {item} at level {level} with **bold**\n"));
        }
    }

    content
}
