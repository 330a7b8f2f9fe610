pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(needle.to_lowercase().as_str())
}

pub fn any_contains_ci<S: AsRef<str>>(items: &[S], needle: &str) -> bool {
    items.iter().any(|item| contains_ci(item.as_ref(), needle))
}
