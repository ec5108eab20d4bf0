use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to stat")
        || haystack.contains("not a directory")
        || haystack.contains("no such file or directory")
    {
        push_hint(&mut out, "Verify the path exists and is a readable directory.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("word is not valid") {
        push_hint(
            &mut out,
            "Words may contain only Latin or Cyrillic letters, spaces and hyphens.",
        );
    }

    if haystack.contains("no stored summary") {
        push_hint(&mut out, "Run `lexstat scan <PATH>` first.");
        push_hint(
            &mut out,
            "Use `lexstat list files` or `lexstat list dirs` to see stored keys.",
        );
    }

    if haystack.contains("schema version") || haystack.contains("not valid json") {
        push_hint(
            &mut out,
            "Delete the store file or point `--store` elsewhere, then rescan.",
        );
    }

    if haystack.contains("visited before its subdirectory")
        || haystack.contains("received a report")
    {
        push_hint(
            &mut out,
            "The tree changed during the scan; run `lexstat scan --force` again.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::{format, suggestions};

    #[test]
    fn suggests_for_missing_path() {
        let err = anyhow!("Failed to stat does-not-exist");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("path exists")));
    }

    #[test]
    fn suggests_for_rejected_word() {
        let err = anyhow!("Word is not valid: 'a1' contains unsupported character '1'");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("Cyrillic")));
    }

    #[test]
    fn suggests_scan_for_missing_summary() {
        let err = anyhow!("No stored summary for 'docs'");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("lexstat scan")));
    }

    #[test]
    fn hints_are_deduplicated() {
        let err = anyhow!("Failed to stat x").context("Not a directory: x");
        let hints = suggestions(&err);
        assert_eq!(hints.len(), 2);
    }

    #[test]
    fn format_includes_hints_section() {
        let err = anyhow!("Failed to stat no-dir");
        let rendered = format(&err);
        assert!(rendered.contains("Error:"));
        assert!(rendered.contains("Hints:"));
    }

    #[test]
    fn format_without_hints_is_single_line() {
        let rendered = format(&anyhow!("something odd"));
        assert_eq!(rendered, "Error: something odd");
    }
}
