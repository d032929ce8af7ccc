#[must_use]
pub(super) fn read_non_empty_env(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

#[must_use]
pub(super) fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
