// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepo {
    // Returns the id that has been assigned by the store
    fn create_comment(&self, comment: NewComment) -> Result<Id>;

    fn load_comment(&self, id: Id) -> Result<Comment>;
    fn load_comments_of_restaurant(&self, restaurant_id: Id) -> Result<Vec<Comment>>;

    // Deletes only the given comment together with its likes.
    // Replies are kept and become orphans.
    fn delete_comment(&self, id: Id) -> Result<()>;
}

pub trait CommentLikeRepo {
    fn create_comment_like(&self, like: CommentLike) -> Result<()>;
    fn delete_comment_like(&self, user_id: Id, comment_id: Id) -> Result<()>;

    fn try_get_comment_like(&self, user_id: Id, comment_id: Id) -> Result<Option<CommentLike>>;

    // All likes of all restaurants
    fn all_comment_likes(&self) -> Result<Vec<CommentLike>>;

    fn liked_comment_ids_of_user(&self, user_id: Id) -> Result<HashSet<Id>>;
}

pub trait UserRepo {
    fn create_user(&self, user: NewUser) -> Result<Id>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn try_get_user(&self, id: Id) -> Result<Option<User>> {
        match self.get_user(id) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

pub trait RestaurantRepo {
    fn create_restaurant(&self, name: &str) -> Result<Id>;

    fn get_restaurant(&self, id: Id) -> Result<Restaurant>;
    fn try_get_restaurant(&self, id: Id) -> Result<Option<Restaurant>> {
        match self.get_restaurant(id) {
            Ok(restaurant) => Ok(Some(restaurant)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
