//! Router base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/tickets` when hosted under a
/// subdirectory), the router is mounted there. Local builds fall back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
