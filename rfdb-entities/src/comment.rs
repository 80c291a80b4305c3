use crate::{id::*, time::*};

/// Depth of a comment within its reply tree.
///
/// Top-level comments are on layer 1, replies one layer below
/// their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Layer(u16);

impl Layer {
    pub const TOP: Self = Self(1);

    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub fn is_top(self) -> bool {
        self == Self::TOP
    }

    /// The layer of a reply to a comment on this layer.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Like [`Layer::next`], but `None` on the deepest layer.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::TOP
    }
}

impl From<u16> for Layer {
    fn from(from: u16) -> Self {
        Self(from)
    }
}

impl From<Layer> for u16 {
    fn from(from: Layer) -> Self {
        from.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id            : Id,
    pub restaurant_id : Id,
    pub author_id     : Id,
    pub text          : String,
    // None for top-level comments
    pub reply_to      : Option<Id>,
    pub layer         : Layer,
    pub created_at    : Timestamp,
}

/// A comment that has not been stored yet.
///
/// The id is assigned by the store.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub restaurant_id : Id,
    pub author_id     : Id,
    pub text          : String,
    pub reply_to      : Option<Id>,
    pub layer         : Layer,
    pub created_at    : Timestamp,
}

impl NewComment {
    pub fn into_comment(self, id: Id) -> Comment {
        let Self {
            restaurant_id,
            author_id,
            text,
            reply_to,
            layer,
            created_at,
        } = self;
        Comment {
            id,
            restaurant_id,
            author_id,
            text,
            reply_to,
            layer,
            created_at,
        }
    }
}
