use std::collections::HashMap;

use crate::entities::*;

/// Number of likes per comment.
#[derive(Debug, Clone, Default)]
pub struct LikeIndex {
    counts: HashMap<Id, usize>,
}

impl LikeIndex {
    pub fn from_likes<'a>(likes: impl IntoIterator<Item = &'a CommentLike>) -> Self {
        let mut counts = HashMap::new();
        for like in likes {
            *counts.entry(like.comment_id).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, comment_id: Id) -> usize {
        self.counts.get(&comment_id).copied().unwrap_or_default()
    }
}
