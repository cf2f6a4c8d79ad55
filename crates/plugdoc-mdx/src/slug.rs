//! URL- and filesystem-safe slugs derived from plugin names.

/// Whitespace for slug purposes: Unicode `White_Space` plus the ASCII
/// information separators U+001C..=U+001F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Convert a plugin name to a slug.
///
/// Lowercases the input, drops everything that is not alphanumeric, an
/// underscore, whitespace or a hyphen, collapses separator runs into a single
/// hyphen and trims hyphens from both ends. An empty or all-punctuation name
/// yields an empty slug; callers get no fallback.
pub fn sanitize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || is_space(*c))
        .map(|c| if is_space(c) { '-' } else { c })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "PII Detector",
        "  Leading and trailing  ",
        "Rate-Limiter (v2)",
        "a -- b",
        "---",
        "snake_case_name",
        "Ünïcödé Plugin",
        "tabs\tand\nnewlines",
        "pipes | and / slashes",
        "-edge-",
        "",
        "100% Compliance!",
        "Cafe\u{301} Plugin",
        "\u{b2} sup",
        "a\u{203f}b",
        "x\u{200d}y",
        "tab\u{1f}sep",
    ];

    #[test]
    fn sanitizes_display_names() {
        assert_eq!(sanitize("PII Detector"), "pii-detector");
        assert_eq!(sanitize("Rate-Limiter (v2)"), "rate-limiter-v2");
        assert_eq!(sanitize("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(sanitize("snake_case_name"), "snake_case_name");
        assert_eq!(sanitize("100% Compliance!"), "100-compliance");
        assert_eq!(sanitize("Ünïcödé Plugin"), "ünïcödé-plugin");
    }

    #[test]
    fn keeps_only_alphanumerics_underscores_and_separators() {
        assert_eq!(sanitize("Cafe\u{301} Plugin"), "cafe-plugin");
        assert_eq!(sanitize("\u{b2} sup"), "\u{b2}-sup");
        assert_eq!(sanitize("a\u{203f}b"), "ab");
        assert_eq!(sanitize("x\u{200d}y"), "xy");
        assert_eq!(sanitize("tab\u{1f}sep"), "tab-sep");
        assert_eq!(sanitize("a - ! - b"), "a-b");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("!!!"), "");
        assert_eq!(sanitize("- -"), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for sample in SAMPLES {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "input: {sample:?}");
        }
    }

    #[test]
    fn never_produces_hyphen_runs_or_edge_hyphens() {
        for sample in SAMPLES {
            let slug = sanitize(sample);
            assert!(!slug.contains("--"), "{slug:?}");
            assert!(!slug.starts_with('-'), "{slug:?}");
            assert!(!slug.ends_with('-'), "{slug:?}");
        }
    }
}
