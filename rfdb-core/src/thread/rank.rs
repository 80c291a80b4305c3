use std::cmp::Ordering;

use super::AnnotatedComment;

// Most liked first, newest first if equally liked
pub(super) fn by_popularity_then_recency(a: &AnnotatedComment, b: &AnnotatedComment) -> Ordering {
    b.like_count
        .cmp(&a.like_count)
        .then_with(|| b.comment.created_at.cmp(&a.comment.created_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfdb_entities::{builders::*, comment::*};

    fn annotated(id: i64, like_count: usize, created_at: i64) -> AnnotatedComment {
        AnnotatedComment {
            comment: Comment::build().id(id).created_at(created_at).finish(),
            like_count,
            liked_by_viewer: false,
        }
    }

    #[test]
    fn more_likes_first() {
        let a = annotated(1, 3, 0);
        let b = annotated(2, 1, 100);
        assert_eq!(Ordering::Less, by_popularity_then_recency(&a, &b));
        assert_eq!(Ordering::Greater, by_popularity_then_recency(&b, &a));
    }

    #[test]
    fn newest_first_if_equally_liked() {
        let older = annotated(1, 2, 10);
        let newer = annotated(2, 2, 20);
        assert_eq!(Ordering::Less, by_popularity_then_recency(&newer, &older));
        assert_eq!(
            Ordering::Equal,
            by_popularity_then_recency(&older, &older.clone())
        );
    }
}
