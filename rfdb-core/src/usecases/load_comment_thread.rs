use std::collections::HashSet;

use super::{prelude::*, require_restaurant};
use crate::thread::{self, AnnotatedComment, ThreadConfig};

/// Loads all comments of a restaurant as a ranked thread.
///
/// Anonymous viewers (`viewer_id = None`) have not liked any comments.
pub fn load_comment_thread<R>(
    repo: &R,
    restaurant_id: Id,
    viewer_id: Option<Id>,
    config: &ThreadConfig,
) -> Result<Vec<AnnotatedComment>>
where
    R: CommentRepo + CommentLikeRepo + RestaurantRepo,
{
    require_restaurant(repo, restaurant_id)?;
    let comments = repo.load_comments_of_restaurant(restaurant_id)?;
    let viewer_liked = match viewer_id {
        Some(user_id) => repo.liked_comment_ids_of_user(user_id)?,
        None => HashSet::new(),
    };
    let all_likes = repo.all_comment_likes()?;
    log::debug!(
        "Assembling thread of {} comment(s) for restaurant {restaurant_id}",
        comments.len()
    );
    Ok(thread::assemble(
        comments,
        &viewer_liked,
        &all_likes,
        config,
    ))
}
