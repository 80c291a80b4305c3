//! Threaded comments of a restaurant.
//!
//! Comments are stored as a flat, self-referential table. [`assemble`]
//! reconstructs the reply forest from these rows, annotates every comment
//! with its likes and flattens the forest into a pre-order sequence that
//! can be rendered by indenting each comment according to its layer:
//!
//! ```text
//! [2] layer 1, 5 likes
//!   [3] layer 2, reply to 2
//! [1] layer 1, 2 likes
//! ```
//!
//! Siblings are ranked by their number of likes (descending) and then by
//! their creation time (newest first). The same order applies on all layers.
//!
//! Replies whose parent is not part of the rendered thread are omitted,
//! e.g. after the parent has been deleted or if the parent itself was
//! omitted. Such orphans remain in storage. Comments on layers beyond
//! [`ThreadConfig::max_reply_depth`] are omitted as well.

use std::collections::{HashMap, HashSet};

use crate::entities::*;

mod likes;
mod rank;


pub use self::likes::LikeIndex;

/// The deepest layer that is rendered by default.
pub const MAX_REPLY_DEPTH: Layer = Layer::new(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadConfig {
    pub max_reply_depth: Layer,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            max_reply_depth: MAX_REPLY_DEPTH,
        }
    }
}

impl ThreadConfig {
    pub fn is_rendered(&self, layer: Layer) -> bool {
        layer >= Layer::TOP && layer <= self.max_reply_depth
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedComment {
    pub comment: Comment,
    pub like_count: usize,
    pub liked_by_viewer: bool,
}

impl AnnotatedComment {
    pub fn annotate(comment: Comment, likes: &LikeIndex, viewer_liked: &HashSet<Id>) -> Self {
        let like_count = likes.count(comment.id);
        let liked_by_viewer = viewer_liked.contains(&comment.id);
        Self {
            comment,
            like_count,
            liked_by_viewer,
        }
    }

    pub fn id(&self) -> Id {
        self.comment.id
    }

    pub fn layer(&self) -> Layer {
        self.comment.layer
    }
}

/// Assembles the comments of a single restaurant into a ranked,
/// flattened thread.
///
/// * `viewer_liked` contains the ids of all comments that have been
///   liked by the current viewer
/// * `all_likes` may contain likes of comments of other restaurants,
///   only exact matches are counted
///
/// This function never fails. Malformed input like orphaned replies or
/// comments on unsupported layers is omitted from the result.
pub fn assemble(
    comments: Vec<Comment>,
    viewer_liked: &HashSet<Id>,
    all_likes: &[CommentLike],
    config: &ThreadConfig,
) -> Vec<AnnotatedComment> {
    let total_count = comments.len();
    let likes = LikeIndex::from_likes(all_likes);

    let mut ranked: Vec<_> = comments
        .into_iter()
        .filter(|c| config.is_rendered(c.layer))
        .map(|c| AnnotatedComment::annotate(c, &likes, viewer_liked))
        .collect();
    // Ranking all comments at once ranks the siblings of each
    // parent, because the relative order is preserved when
    // grouping them below.
    ranked.sort_by(rank::by_popularity_then_recency);

    let mut roots = Vec::new();
    let mut replies: HashMap<Id, Vec<usize>> = HashMap::new();
    for (idx, c) in ranked.iter().enumerate() {
        if c.layer().is_top() {
            roots.push(idx);
        } else if let Some(parent_id) = c.comment.reply_to {
            replies.entry(parent_id).or_default().push(idx);
        }
    }

    let mut slots: Vec<_> = ranked.into_iter().map(Some).collect();
    let mut thread = Vec::with_capacity(slots.len());
    let mut stack: Vec<usize> = roots.into_iter().rev().collect();
    while let Some(idx) = stack.pop() {
        let Some(comment) = slots[idx].take() else {
            // Already emitted, only possible with duplicate ids
            continue;
        };
        // Replies to the deepest layer are saturated on the same layer
        if let (Some(children), Some(child_layer)) =
            (replies.get(&comment.id()), comment.layer().checked_next())
        {
            stack.extend(
                children
                    .iter()
                    .rev()
                    .copied()
                    .filter(|&child| matches!(&slots[child], Some(c) if c.layer() == child_layer)),
            );
        }
        thread.push(comment);
    }

    let omitted_count = total_count - thread.len();
    if omitted_count > 0 {
        log::debug!(
            "Omitted {omitted_count} of {total_count} comment(s) that are orphaned or nested too deep"
        );
    }
    thread
}
