/// Line prefixes treated as comments once leading whitespace is trimmed.
const COMMENT_PREFIXES: &[&str] = &["//", "#", "/*", "*"];

/// Drops blank lines and lines that start with a comment marker.
///
/// This is a prefix check, not a lexer: only lines that themselves begin with
/// a marker are removed. Kept lines are returned verbatim, joined with `\n`
/// and without a trailing newline.
pub fn strip_comments(content: &str) -> String {
    content
        .lines()
        .filter(|line| !is_noise(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_noise(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_comments_and_blanks_yields_empty() {
        let input = "\n   \n// line\n  # hash\n\t/* open\n   * middle\n */\n";
        assert_eq!(strip_comments(input), "");
    }

    #[test]
    fn keeps_code_lines_verbatim_and_in_order() {
        let input = "package main\n\n// doc\nfunc main() {\n\tx := 1 // trailing\n}\n";
        assert_eq!(strip_comments(input), "package main\nfunc main() {\n\tx := 1 // trailing\n}");
    }

    #[test]
    fn block_comment_body_without_star_survives() {
        let input = "/* start\nstill comment\n*/\ncode();";
        assert_eq!(strip_comments(input), "still comment\ncode();");
    }

    #[test]
    fn handles_crlf() {
        assert_eq!(strip_comments("a\r\n# b\r\n  c\r\n"), "a\n  c");
    }
}
