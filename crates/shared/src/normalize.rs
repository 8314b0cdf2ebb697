/// Canonical form for ingredient, cookware, restriction and dislike names.
///
/// Every name comparison in the workspace goes through this function so that
/// "  Chicken Breast" and "chicken breast" resolve to the same key.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
