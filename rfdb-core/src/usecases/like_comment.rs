use super::{prelude::*, require_comment, require_user};

pub fn like_comment<R>(repo: &R, user_id: Id, comment_id: Id) -> Result<()>
where
    R: CommentLikeRepo + CommentRepo + UserRepo,
{
    require_user(repo, user_id)?;
    require_comment(repo, comment_id)?;
    if repo.try_get_comment_like(user_id, comment_id)?.is_some() {
        return Err(Error::AlreadyLiked);
    }
    let like = CommentLike {
        user_id,
        comment_id,
    };
    repo.create_comment_like(like).map_err(|err| match err {
        RepoError::AlreadyExists => Error::AlreadyLiked,
        err => err.into(),
    })?;
    log::debug!("User {user_id} likes comment {comment_id}");
    Ok(())
}

pub fn unlike_comment<R>(repo: &R, user_id: Id, comment_id: Id) -> Result<()>
where
    R: CommentLikeRepo,
{
    repo.delete_comment_like(user_id, comment_id)
        .map_err(|err| match err {
            RepoError::NotFound => Error::NotLiked,
            err => err.into(),
        })?;
    log::debug!("User {user_id} no longer likes comment {comment_id}");
    Ok(())
}
