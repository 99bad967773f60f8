pub const APP_NAME: &str = "Thinking Mind";
pub const APP_TAGLINE: &str = "AI solutions for forward-thinking businesses";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Human-readable version string shown in the footer.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{APP_VERSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_label_falls_back_to_cargo_version() {
        let label = version_label();
        assert!(label.starts_with('v') || GIT_TAG.is_some());
        assert!(!label.is_empty());
    }
}
