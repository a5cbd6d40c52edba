use serde::Deserialize;

/// How a consumer picks one provider out of a discovery pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Take the first provider in discovery order. Later entries are never instantiated.
    #[default]
    First,
    /// Instantiate every provider and take the highest priority; ties keep discovery order.
    Priority,
    /// Require at most one registered provider; more than one is an error.
    ExactlyOne,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        selection: SelectionPolicy,
    }

    #[test]
    fn test_policy_deserialization() {
        let parsed: Wrapper = toml::from_str("selection = \"exactly-one\"").unwrap();
        assert_eq!(parsed.selection, SelectionPolicy::ExactlyOne);
        let parsed: Wrapper = toml::from_str("selection = \"priority\"").unwrap();
        assert_eq!(parsed.selection, SelectionPolicy::Priority);
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::First);
    }
}
