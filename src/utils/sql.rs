/// Escapes `%`, `_` and the escape character itself for use inside a
/// SQL LIKE pattern.
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_wildcards() {
        assert_eq!(escape_like_pattern("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like_pattern("plain"), "plain");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}
