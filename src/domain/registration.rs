/// One registration entry: "implementer `identity` provides this capability".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry {
    pub identity: String,
    pub priority: i32,
}

impl ProviderEntry {
    pub fn new(identity: impl Into<String>) -> Self {
        Self::with_priority(identity, 0)
    }

    pub fn with_priority(identity: impl Into<String>, priority: i32) -> Self {
        Self {
            identity: identity.into(),
            priority,
        }
    }
}

/// Checks an implementer identity such as `paylink.console`.
///
/// The first character must be an ASCII letter or `_`; the rest may also be
/// digits, `.`, `:` or `-`.
pub fn is_valid_identity(identity: &str) -> bool {
    let mut chars = identity.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
}
