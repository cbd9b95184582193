//! Shell quoting for values substituted into generated command lines.

use crate::registry::Quoting;

/// Wraps `s` in double quotes, escaping every character that stays special inside them.
///
/// The value reaches the command literally: no expansion or substitution of any kind.
pub fn double_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '`' | '$') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Wraps `s` in single quotes. Embedded single quotes become `'\''`.
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Applies `quoting`. A `Raw` value containing anything beyond plain word
/// characters is double-quoted instead of being inserted verbatim.
pub fn quote(s: &str, quoting: Quoting) -> String {
    match quoting {
        Quoting::Double => double_quote(s),
        Quoting::Single => single_quote(s),
        Quoting::Raw if is_plain_word(s) => s.to_string(),
        Quoting::Raw => double_quote(s),
    }
}

/// Flattens `s` onto one line so it cannot escape a `#` comment.
pub fn comment_text(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

fn is_plain_word(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '+' | ',' | '=' | '%' | '@'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quote_plain() {
        assert_eq!(double_quote("app.log"), "\"app.log\"");
        assert_eq!(double_quote(""), "\"\"");
    }

    #[test]
    fn test_double_quote_escapes_specials() {
        assert_eq!(double_quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(double_quote(r"C:\tmp"), r#""C:\\tmp""#);
        assert_eq!(double_quote("`whoami`"), "\"\\`whoami\\`\"");
    }

    #[test]
    fn test_double_quote_suppresses_expansion() {
        assert_eq!(double_quote("$HOME/out.txt"), r#""\$HOME/out.txt""#);
        assert_eq!(double_quote("$(touch /tmp/x)"), r#""\$(touch /tmp/x)""#);
        assert_eq!(double_quote("${USER:-root}"), r#""\${USER:-root}""#);
        assert_eq!(double_quote(r"\$[0-9]+"), r#""\\\$[0-9]+""#);
    }

    #[test]
    fn test_comment_text_is_one_line() {
        assert_eq!(comment_text("nightly\nrm -rf x\r\n"), "nightly rm -rf x  ");
        assert_eq!(comment_text("plain"), "plain");
    }

    #[test]
    fn test_single_quote_escapes_single_quotes() {
        assert_eq!(single_quote("{print $1}"), "'{print $1}'");
        assert_eq!(single_quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn test_raw_is_verbatim() {
        assert_eq!(quote("POST", Quoting::Raw), "POST");
        assert_eq!(quote("10", Quoting::Raw), "10");
    }

    #[test]
    fn test_raw_falls_back_to_double_quotes() {
        assert_eq!(quote("GET; rm -rf /", Quoting::Raw), "\"GET; rm -rf /\"");
    }
}
