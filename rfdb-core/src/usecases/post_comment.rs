use super::{prelude::*, require_restaurant, require_user, validate_text};

#[derive(Debug, Clone)]
pub struct PostComment {
    pub restaurant_id: Id,
    pub author_id: Id,
    pub text: String,
}

pub fn post_comment<R>(repo: &R, params: PostComment) -> Result<Comment>
where
    R: CommentRepo + UserRepo + RestaurantRepo,
{
    let PostComment {
        restaurant_id,
        author_id,
        text,
    } = params;
    validate_text(&text)?;
    require_user(repo, author_id)?;
    require_restaurant(repo, restaurant_id)?;
    let new_comment = NewComment {
        restaurant_id,
        author_id,
        text,
        reply_to: None,
        layer: Layer::TOP,
        created_at: Timestamp::now(),
    };
    let id = repo.create_comment(new_comment.clone())?;
    log::info!("User {author_id} commented on restaurant {restaurant_id}");
    Ok(new_comment.into_comment(id))
}
