use super::prelude::*;

use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
struct Sequence(Cell<i64>);

impl Sequence {
    fn next(&self) -> Id {
        let id = self.0.get() + 1;
        self.0.set(id);
        Id::new(id)
    }
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub restaurants: RefCell<Vec<Restaurant>>,
    pub comments: RefCell<Vec<Comment>>,
    pub likes: RefCell<Vec<CommentLike>>,
    user_ids: Sequence,
    restaurant_ids: Sequence,
    comment_ids: Sequence,
}

impl MockDb {
    /// A database with user 1 and restaurant 1
    pub fn with_user_and_restaurant() -> Self {
        let db = Self::default();
        let user_id = db
            .create_user(NewUser {
                name: "user".into(),
                email: "user@example.com".into(),
                role: Role::User,
            })
            .unwrap();
        let restaurant_id = db.create_restaurant("restaurant").unwrap();
        debug_assert_eq!(Id::new(1), user_id);
        debug_assert_eq!(Id::new(1), restaurant_id);
        db
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: NewComment) -> RepoResult<Id> {
        let id = self.comment_ids.next();
        self.comments.borrow_mut().push(comment.into_comment(id));
        Ok(id)
    }

    fn load_comment(&self, id: Id) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments_of_restaurant(&self, restaurant_id: Id) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    fn delete_comment(&self, id: Id) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let pos = comments
            .iter()
            .position(|c| c.id == id)
            .ok_or(RepoError::NotFound)?;
        comments.remove(pos);
        self.likes.borrow_mut().retain(|l| l.comment_id != id);
        Ok(())
    }
}

impl CommentLikeRepo for MockDb {
    fn create_comment_like(&self, like: CommentLike) -> RepoResult<()> {
        let mut likes = self.likes.borrow_mut();
        if likes.contains(&like) {
            return Err(RepoError::AlreadyExists);
        }
        likes.push(like);
        Ok(())
    }

    fn delete_comment_like(&self, user_id: Id, comment_id: Id) -> RepoResult<()> {
        let mut likes = self.likes.borrow_mut();
        let pos = likes
            .iter()
            .position(|l| l.user_id == user_id && l.comment_id == comment_id)
            .ok_or(RepoError::NotFound)?;
        likes.remove(pos);
        Ok(())
    }

    fn try_get_comment_like(&self, user_id: Id, comment_id: Id) -> RepoResult<Option<CommentLike>> {
        Ok(self
            .likes
            .borrow()
            .iter()
            .find(|l| l.user_id == user_id && l.comment_id == comment_id)
            .copied())
    }

    fn all_comment_likes(&self) -> RepoResult<Vec<CommentLike>> {
        Ok(self.likes.borrow().clone())
    }

    fn liked_comment_ids_of_user(&self, user_id: Id) -> RepoResult<HashSet<Id>> {
        Ok(self
            .likes
            .borrow()
            .iter()
            .filter(|l| l.user_id == user_id)
            .map(|l| l.comment_id)
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: NewUser) -> RepoResult<Id> {
        if self.users.borrow().iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.user_ids.next();
        self.users.borrow_mut().push(user.into_user(id));
        Ok(id)
    }

    fn get_user(&self, id: Id) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl RestaurantRepo for MockDb {
    fn create_restaurant(&self, name: &str) -> RepoResult<Id> {
        let id = self.restaurant_ids.next();
        self.restaurants.borrow_mut().push(Restaurant {
            id,
            name: name.to_owned(),
        });
        Ok(id)
    }

    fn get_restaurant(&self, id: Id) -> RepoResult<Restaurant> {
        self.restaurants
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}
