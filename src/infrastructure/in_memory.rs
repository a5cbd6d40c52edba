use crate::domain::ports::RegistrationSource;
use crate::domain::registration::ProviderEntry;
use crate::error::DiscoveryError;
use std::collections::HashMap;

/// A compiled-in registration table.
///
/// Populated by explicit [`declare`](Self::declare) calls at startup; nothing is
/// scanned. Entries keep their declaration order and are never deduplicated.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistrations {
    entries: HashMap<String, Vec<ProviderEntry>>,
}

impl InMemoryRegistrations {
    /// Creates a new, empty registration table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `identity` as a provider of `capability`.
    pub fn declare(&mut self, capability: &str, identity: impl Into<String>, priority: i32) -> &mut Self {
        self.entries
            .entry(capability.to_string())
            .or_default()
            .push(ProviderEntry::with_priority(identity, priority));
        self
    }
}

impl RegistrationSource for InMemoryRegistrations {
    fn entries(&self, capability: &str) -> Result<Vec<ProviderEntry>, DiscoveryError> {
        Ok(self.entries.get(capability).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_registrations() {
        let mut source = InMemoryRegistrations::new();
        source
            .declare("cap.A", "first", 0)
            .declare("cap.A", "second", 3)
            .declare("cap.B", "other", 0);

        let entries = source.entries("cap.A").unwrap();
        assert_eq!(
            entries,
            vec![
                ProviderEntry::new("first"),
                ProviderEntry::with_priority("second", 3)
            ]
        );
        assert!(source.entries("cap.C").unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_registrations_keep_duplicates() {
        let mut source = InMemoryRegistrations::new();
        source.declare("cap.A", "same", 0).declare("cap.A", "same", 0);
        assert_eq!(source.entries("cap.A").unwrap().len(), 2);
    }
}
