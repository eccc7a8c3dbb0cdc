//! MDX safety escaping.
//!
//! The site renderer treats `{...}` as embedded expressions. Literal braces
//! in prose are rewritten to escaped-brace expressions; fenced code blocks
//! are left byte-for-byte unchanged.

/// Escape literal braces outside fenced code blocks.
pub fn escape_braces(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_fence = false;

    for (i, line) in content.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            out.push_str(line);
            continue;
        }
        if in_fence {
            out.push_str(line);
            continue;
        }

        for c in line.chars() {
            match c {
                '{' => out.push_str("{'{'}"),
                '}' => out.push_str("{'}'}"),
                c => out.push(c),
            }
        }
    }

    if content.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_braces_in_prose() {
        let input = "Use {braces} carefully.\n";
        assert_eq!(escape_braces(input), "Use {'{'}braces{'}'} carefully.\n");
    }

    #[test]
    fn fenced_code_untouched() {
        let input = "Text {x}.\n```rust\nfn main() { let x = 1; }\n```\nAfter {y}.\n";
        let result = escape_braces(input);
        assert!(result.contains("fn main() { let x = 1; }"));
        assert!(result.contains("Text {'{'}x{'}'}."));
        assert!(result.contains("After {'{'}y{'}'}."));
    }

    #[test]
    fn no_braces_is_identity() {
        let input = "# Title\n\nPlain prose.\n";
        assert_eq!(escape_braces(input), input);
    }

    #[test]
    fn unclosed_fence_swallows_rest() {
        let input = "```\n{raw}\nstill raw {here}";
        let result = escape_braces(input);
        assert!(result.contains("{raw}"));
        assert!(result.contains("still raw {here}"));
    }
}
