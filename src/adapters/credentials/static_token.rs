use crate::ports::credential_provider::CredentialProvider;

/// A token fixed at construction time.
#[derive(Clone, Default)]
pub struct StaticTokenProvider(Option<String>);

impl StaticTokenProvider {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(Some(token.into()))
    }

    pub fn empty() -> Self {
        Self(None)
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self.0.as_ref().map(|_| "<redacted>");
        f.debug_tuple("StaticTokenProvider").field(&shown).finish()
    }
}

impl CredentialProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Asks each provider in turn and returns the first non-empty token.
pub struct FirstAvailable(pub Vec<Box<dyn CredentialProvider>>);

impl CredentialProvider for FirstAvailable {
    fn bearer_token(&self) -> Option<String> {
        self.0
            .iter()
            .find_map(|provider| provider.bearer_token().filter(|token| !token.is_empty()))
    }
}
