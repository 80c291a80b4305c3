use crate::id::*;

/// A user likes a comment.
///
/// The pair of user and comment is unique, there is no
/// further payload.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentLike {
    pub user_id    : Id,
    pub comment_id : Id,
}
