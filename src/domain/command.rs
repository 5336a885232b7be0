use super::provider::{ProviderRegistry, COMMAND_PREFIX};

/// What the current contents of the search field mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Empty,
    /// The prefix alone: list the available providers.
    TriggerCommands,
    SelectProvider(char),
    /// Prefix followed by an unknown key or by more than one character.
    InvalidCommand,
    PlainQuery(String),
}

pub fn classify(raw: &str, registry: &ProviderRegistry) -> Classification {
    let text = raw.trim();
    if text.is_empty() {
        return Classification::Empty;
    }

    let Some(rest) = text.strip_prefix(COMMAND_PREFIX) else {
        return Classification::PlainQuery(text.to_string());
    };

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Classification::TriggerCommands,
        (Some(key), None) if registry.contains(key) => Classification::SelectProvider(key),
        _ => Classification::InvalidCommand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(classify("", &registry), Classification::Empty);
        assert_eq!(classify("   ", &registry), Classification::Empty);
        assert_eq!(classify("\t\n", &registry), Classification::Empty);
    }

    #[test]
    fn test_prefix_alone_triggers_commands() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(classify(":", &registry), Classification::TriggerCommands);
        assert_eq!(classify("  :  ", &registry), Classification::TriggerCommands);
    }

    #[test]
    fn test_every_registered_key_selects_its_provider() {
        let registry = ProviderRegistry::builtin();
        for (key, _) in registry.iter() {
            assert_eq!(
                classify(&format!(":{key}"), &registry),
                Classification::SelectProvider(key)
            );
        }
    }

    #[test]
    fn test_unregistered_keys_are_invalid() {
        let registry = ProviderRegistry::builtin();
        for c in ['x', 'z', 'B', '1', ':', 'é'] {
            assert_eq!(
                classify(&format!(":{c}"), &registry),
                Classification::InvalidCommand,
                "key {c:?}"
            );
        }
    }

    #[test]
    fn test_long_commands_are_invalid() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(classify(":bb", &registry), Classification::InvalidCommand);
        assert_eq!(classify(":brave", &registry), Classification::InvalidCommand);
        assert_eq!(classify(":b rust", &registry), Classification::InvalidCommand);
    }

    #[test]
    fn test_other_text_is_a_trimmed_query() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(
            classify("  hello world ", &registry),
            Classification::PlainQuery("hello world".to_string())
        );
        assert_eq!(
            classify("b:", &registry),
            Classification::PlainQuery("b:".to_string())
        );
    }
}
