//! Default configuration file for `changesort config`.

/// A commented config file listing every setting with its default.
#[must_use]
pub fn config_template() -> &'static str {
    include_str!("changesort.toml")
}

#[cfg(test)]
mod tests {
    use crate::config::SortConfig;

    #[test]
    fn template_matches_defaults() {
        assert_eq!(
            SortConfig::from_toml(super::config_template()).unwrap(),
            SortConfig::default()
        );
    }
}
