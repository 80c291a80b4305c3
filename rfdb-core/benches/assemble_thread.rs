use std::collections::HashSet;

use brunch::{Bench, Benches};
use rfdb_core::thread::{assemble, ThreadConfig};
use rfdb_entities::{builders::*, comment::*, id::*, like::*};

fn main() {
    let mut benches = Benches::default();

    let (comments, likes) = create_thread(10_000, 50_000);
    let viewer_liked: HashSet<Id> = likes
        .iter()
        .filter(|l| l.user_id == Id::new(1))
        .map(|l| l.comment_id)
        .collect();
    let config = ThreadConfig::default();

    benches.push(
        Bench::new("Assemble a thread of 10000 comments with 50000 likes").run(|| {
            assemble(comments.clone(), &viewer_liked, &likes, &config)
        }),
    );
    benches.finish();
}

// Every 4th comment starts a new thread, the others reply to
// one of the previous comments in a round-robin fashion.
fn create_thread(comment_count: i64, like_count: i64) -> (Vec<Comment>, Vec<CommentLike>) {
    let mut comments: Vec<Comment> = Vec::with_capacity(comment_count as usize);
    for id in 1..=comment_count {
        let comment = if id % 4 == 1 {
            Comment::build().id(id).created_at(id).finish()
        } else {
            let parent = &comments[(id as usize * 7) % comments.len()];
            Comment::build()
                .id(id)
                .reply_to(parent.id.value(), parent.layer.next().value())
                .created_at(id)
                .finish()
        };
        comments.push(comment);
    }
    let likes = (0..like_count)
        .map(|i| CommentLike {
            user_id: Id::new(i % 97 + 1),
            comment_id: Id::new((i * 31) % comment_count + 1),
        })
        .collect();
    (comments, likes)
}
