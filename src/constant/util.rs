/// # hide sensitive string
///
/// convert string from "something" to "so*****ng"
///
/// ### Arguments
///
/// * `str`: original string
/// * `shown_len`: chars kept in clear at most, split between both ends.
///   if the string is not longer than this, every char is hidden.
pub(crate) fn hide_sensitive_string(str: &str, shown_len: usize) -> String {
    let len = str.chars().count();
    if len <= shown_len {
        return "*".repeat(len);
    }

    let prefix_len = shown_len / 2;
    let suffix_len = shown_len - prefix_len;

    str.chars()
        .enumerate()
        .map(|(i, c)| {
            if i >= prefix_len && i < len - suffix_len {
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// # or placeholder
///
/// empty value shown as a placeholder in console output.
pub(crate) fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_hide_sensitive_string() {
        let result = super::hide_sensitive_string("1234567890", 4);
        assert_eq!(result, "12******90");
    }

    #[test]
    fn test_hide_sensitive_string_short() {
        let result = super::hide_sensitive_string("abc", 4);
        assert_eq!(result, "***");
    }

    #[test]
    fn test_hide_sensitive_string_multibyte() {
        let result = super::hide_sensitive_string("ключ-токен", 2);
        assert_eq!(result, "к********н");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(super::or_placeholder("", "(any)"), "(any)");
        assert_eq!(super::or_placeholder("main", "(any)"), "main");
    }
}
