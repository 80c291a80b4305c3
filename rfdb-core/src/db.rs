use crate::repositories::*;

/// All repositories that are needed by the use cases.
pub trait Db: CommentRepo + CommentLikeRepo + UserRepo + RestaurantRepo {}

impl<T> Db for T where T: CommentRepo + CommentLikeRepo + UserRepo + RestaurantRepo {}
