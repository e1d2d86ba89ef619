//! Token Registry
//!
//! The registry owns every token of a graph, keyed by name. It is the only
//! place tokens are created, which is what guarantees one token per name.
//!
//! Tokens are stored in an insertion-ordered arena; a `TokenId` is the
//! token's position in it. Since tokens are never removed, ids stay valid
//! for the registry's lifetime.

use indexmap::IndexMap;
use tracing::debug;

use super::token::{Token, TokenId};

/// Name-keyed arena of tokens.
#[derive(Debug, Default, Clone)]
pub struct TokenRegistry {
    tokens: IndexMap<String, Token>,
}

impl TokenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: IndexMap::with_capacity(capacity),
        }
    }

    /// Look up a token by name, creating it if this is the first reference.
    ///
    /// The same name always yields the same id.
    pub fn get_or_create(&mut self, name: &str) -> TokenId {
        if let Some(index) = self.tokens.get_index_of(name) {
            return TokenId::new(index);
        }

        let (index, _) = self.tokens.insert_full(name.to_string(), Token::new(name));
        debug!(token = name, id = index, "registered token");
        TokenId::new(index)
    }

    /// Look up a token by name without creating it.
    pub fn get(&self, name: &str) -> Option<TokenId> {
        self.tokens.get_index_of(name).map(TokenId::new)
    }

    /// Check whether a name has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Get a token by id.
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get_index(id.index()).map(|(_, token)| token)
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_index_mut(id.index()).map(|(_, token)| token)
    }

    /// Get a token's name by id.
    pub fn name(&self, id: TokenId) -> Option<&str> {
        self.token(id).map(Token::name)
    }

    /// Iterate over all tokens in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens
            .values()
            .enumerate()
            .map(|(index, token)| (TokenId::new(index), token))
    }

    /// Number of distinct names seen so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
