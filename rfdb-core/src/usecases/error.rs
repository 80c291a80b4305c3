use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty comment")]
    EmptyComment,
    #[error("Empty name")]
    EmptyName,
    #[error("Invalid email address")]
    Email,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The restaurant does not exist")]
    RestaurantDoesNotExist,
    #[error("The comment does not exist")]
    CommentDoesNotExist,
    #[error("The comment belongs to another restaurant")]
    CommentOfOtherRestaurant,
    #[error("The comment has already been liked")]
    AlreadyLiked,
    #[error("The comment has not been liked")]
    NotLiked,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
