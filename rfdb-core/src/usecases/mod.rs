mod create_restaurant;
mod create_user;
mod delete_comment;
mod error;
mod like_comment;
mod load_comment_thread;
mod post_comment;
mod reply_to_comment;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_restaurant::*, create_user::*, delete_comment::*, error::Error, like_comment::*,
    load_comment_thread::*, post_comment::*, reply_to_comment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}

use self::prelude::*;

fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    Ok(())
}

fn require_user<R: UserRepo>(repo: &R, id: Id) -> Result<User> {
    repo.try_get_user(id)?.ok_or(Error::UserDoesNotExist)
}

fn require_restaurant<R: RestaurantRepo>(repo: &R, id: Id) -> Result<Restaurant> {
    repo.try_get_restaurant(id)?
        .ok_or(Error::RestaurantDoesNotExist)
}

fn require_comment<R: CommentRepo>(repo: &R, id: Id) -> Result<Comment> {
    match repo.load_comment(id) {
        Ok(comment) => Ok(comment),
        Err(RepoError::NotFound) => Err(Error::CommentDoesNotExist),
        Err(err) => Err(err.into()),
    }
}
