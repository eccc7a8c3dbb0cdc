//! Front-matter parsing, merging, and rendering.
//!
//! Chapter files copied into the site may already carry a front-matter
//! block. Parsing it is best-effort, but the outcome is explicit: either a
//! parsed key/value list or "no prior front-matter". Injected keys win on
//! conflict when merging.

/// Outcome of looking for front-matter at the top of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontMatter {
    /// A well-formed block was found; keys in document order, values kept
    /// as their literal scalar text.
    Parsed(Vec<(String, String)>),
    /// No block, or a block that did not parse.
    Absent,
}

/// Split a document into its front-matter (if any) and body.
///
/// A document has front-matter when it starts with a `---` line and a
/// matching closing `---` line exists. A block containing any line without
/// a `key: value` shape is treated as absent and the whole document becomes
/// the body.
pub fn split_front_matter(content: &str) -> (FrontMatter, &str) {
    let Some(rest) = content.strip_prefix("---\n") else {
        return (FrontMatter::Absent, content);
    };
    let Some(end) = rest.find("\n---\n") else {
        return (FrontMatter::Absent, content);
    };

    let block = &rest[..end];
    let body = &rest[end + "\n---\n".len()..];

    let mut pairs = Vec::new();
    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            return (FrontMatter::Absent, content);
        };
        pairs.push((key.trim().to_string(), value.trim().to_string()));
    }

    (FrontMatter::Parsed(pairs), body)
}

/// Merge injected keys into existing front-matter. Existing key order is
/// kept; conflicting values are replaced by the injected ones; injected
/// keys not present before are appended in order.
pub fn merge(existing: &FrontMatter, injected: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged = match existing {
        FrontMatter::Parsed(pairs) => pairs.clone(),
        FrontMatter::Absent => Vec::new(),
    };

    for (key, value) in injected {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.clone(),
            None => merged.push((key.clone(), value.clone())),
        }
    }

    merged
}

/// Render a front-matter block, closing delimiter included.
pub fn render(pairs: &[(String, String)]) -> String {
    let mut out = String::from("---\n");
    for (key, value) in pairs {
        out.push_str(&format!("{key}: {value}\n"));
    }
    out.push_str("---\n");
    out
}

/// Quote a string value for use in a front-matter scalar.
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_well_formed_block() {
        let doc = "---\ntitle: \"Hi\"\nsidebar_position: 3\n---\n# Body\n";
        let (fm, body) = split_front_matter(doc);

        assert_eq!(
            fm,
            FrontMatter::Parsed(vec![
                ("title".into(), "\"Hi\"".into()),
                ("sidebar_position".into(), "3".into()),
            ])
        );
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn document_without_block_is_absent() {
        let doc = "# Just a heading\n";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm, FrontMatter::Absent);
        assert_eq!(body, doc);
    }

    #[test]
    fn malformed_block_is_absent_with_full_body() {
        let doc = "---\nthis is not a key value line\n---\nBody\n";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm, FrontMatter::Absent);
        assert_eq!(body, doc);
    }

    #[test]
    fn unterminated_block_is_absent() {
        let doc = "---\ntitle: x\nno closing delimiter";
        let (fm, body) = split_front_matter(doc);
        assert_eq!(fm, FrontMatter::Absent);
        assert_eq!(body, doc);
    }

    #[test]
    fn merge_injected_keys_win() {
        let existing = FrontMatter::Parsed(vec![
            ("title".into(), "\"Old\"".into()),
            ("draft".into(), "true".into()),
        ]);
        let injected = vec![
            ("title".into(), "\"New\"".into()),
            ("sidebar_position".into(), "2".into()),
        ];
        let merged = merge(&existing, &injected);

        assert_eq!(
            merged,
            vec![
                ("title".into(), "\"New\"".into()),
                ("draft".into(), "true".into()),
                ("sidebar_position".into(), "2".into()),
            ]
        );
    }

    #[test]
    fn render_roundtrips_through_split() {
        let pairs = vec![
            ("title".into(), "\"Chapter\"".into()),
            ("sidebar_position".into(), "1".into()),
        ];
        let doc = format!("{}body", render(&pairs));
        let (fm, body) = split_front_matter(&doc);
        assert_eq!(fm, FrontMatter::Parsed(pairs));
        assert_eq!(body, "body");
    }

    #[test]
    fn quoted_escapes_double_quotes() {
        assert_eq!(quoted(r#"He said "hi""#), "\"He said 'hi'\"");
    }
}
