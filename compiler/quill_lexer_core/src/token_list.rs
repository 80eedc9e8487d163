//! Ordered token sequence with O(1) insertion next to any token.
//!
//! Tokens live in an arena (`Vec`) and are linked by [`TokenId`] indices
//! instead of pointers. Appending and inserting before/after an existing
//! token are O(1); nothing is ever removed, so ids stay valid for the
//! lifetime of the list. Arena order is allocation order; use [`TokenList::iter`]
//! for sequence order.

use std::fmt;

use crate::Token;

/// Index of a token in a [`TokenList`] arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TokenId(u32);

impl TokenId {
    #[inline]
    fn new(index: usize) -> Self {
        // A template with more than u32::MAX tokens would need > 4 GiB of input.
        TokenId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Node {
    token: Token,
    prev: Option<TokenId>,
    next: Option<TokenId>,
}

/// Doubly-linked token sequence backed by an arena.
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    nodes: Vec<Node>,
    head: Option<TokenId>,
    tail: Option<TokenId>,
}

// Sequence equality: two lists are equal when they yield the same tokens in
// the same order, regardless of arena layout.
impl PartialEq for TokenList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.tokens().eq(other.tokens())
    }
}
impl Eq for TokenList {}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Build a list from tokens in sequence order.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut list = TokenList::new();
        for token in tokens {
            list.push(token);
        }
        list
    }

    fn alloc(&mut self, token: Token, prev: Option<TokenId>, next: Option<TokenId>) -> TokenId {
        let id = TokenId::new(self.nodes.len());
        self.nodes.push(Node { token, prev, next });
        id
    }

    /// Append a token at the tail.
    pub fn push(&mut self, token: Token) -> TokenId {
        let id = self.alloc(token, self.tail, None);
        match self.tail {
            Some(tail) => self.nodes[tail.index()].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Insert a token immediately before `at`.
    pub fn insert_before(&mut self, at: TokenId, token: Token) -> TokenId {
        let prev = self.nodes[at.index()].prev;
        let id = self.alloc(token, prev, Some(at));
        self.nodes[at.index()].prev = Some(id);
        match prev {
            Some(prev) => self.nodes[prev.index()].next = Some(id),
            None => self.head = Some(id),
        }
        id
    }

    /// Insert a token immediately after `at`.
    pub fn insert_after(&mut self, at: TokenId, token: Token) -> TokenId {
        let next = self.nodes[at.index()].next;
        let id = self.alloc(token, Some(at), next);
        self.nodes[at.index()].next = Some(id);
        match next {
            Some(next) => self.nodes[next.index()].prev = Some(id),
            None => self.tail = Some(id),
        }
        id
    }

    #[inline]
    pub fn get(&self, id: TokenId) -> &Token {
        &self.nodes[id.index()].token
    }

    #[inline]
    pub fn get_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.nodes[id.index()].token
    }

    #[inline]
    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        self.nodes[id.index()].prev
    }

    #[inline]
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        self.nodes[id.index()].next
    }

    #[inline]
    pub fn head(&self) -> Option<TokenId> {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> Option<TokenId> {
        self.tail
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate `(id, token)` pairs in sequence order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    /// Token ids in sequence order, collected so the list can be mutated
    /// while walking them.
    pub fn ids(&self) -> Vec<TokenId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Tokens in sequence order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.iter().map(|(_, token)| token)
    }
}

/// Sequence-order iterator over a [`TokenList`].
pub struct Iter<'a> {
    list: &'a TokenList,
    next: Option<TokenId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (TokenId, &'a Token);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.list.next(id);
        Some((id, self.list.get(id)))
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = (TokenId, &'a Token);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
