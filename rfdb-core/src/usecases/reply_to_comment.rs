use super::{prelude::*, require_comment, require_restaurant, require_user, validate_text};

#[derive(Debug, Clone)]
pub struct ReplyToComment {
    pub restaurant_id: Id,
    pub parent_id: Id,
    pub author_id: Id,
    pub text: String,
}

/// Stores a reply one layer below the parent comment.
///
/// Replies are stored independent of their depth, even if they
/// are nested too deep to be displayed.
pub fn reply_to_comment<R>(repo: &R, params: ReplyToComment) -> Result<Comment>
where
    R: CommentRepo + UserRepo + RestaurantRepo,
{
    let ReplyToComment {
        restaurant_id,
        parent_id,
        author_id,
        text,
    } = params;
    validate_text(&text)?;
    require_user(repo, author_id)?;
    require_restaurant(repo, restaurant_id)?;
    let parent = require_comment(repo, parent_id)?;
    if parent.restaurant_id != restaurant_id {
        log::warn!(
            "Reply to comment {parent_id} of restaurant {} submitted for restaurant {restaurant_id}",
            parent.restaurant_id
        );
        return Err(Error::CommentOfOtherRestaurant);
    }
    let new_comment = NewComment {
        restaurant_id,
        author_id,
        text,
        reply_to: Some(parent.id),
        layer: parent.layer.next(),
        created_at: Timestamp::now(),
    };
    let id = repo.create_comment(new_comment.clone())?;
    log::info!("User {author_id} replied to comment {parent_id}");
    Ok(new_comment.into_comment(id))
}

#[cfg(test)]
mod tests {
    use super::super::{post_comment, tests::MockDb, PostComment};
    use super::*;

    fn reply(db: &MockDb, parent_id: Id, text: &str) -> Result<Comment> {
        reply_to_comment(
            db,
            ReplyToComment {
                restaurant_id: Id::new(1),
                parent_id,
                author_id: Id::new(1),
                text: text.into(),
            },
        )
    }

    fn post(db: &MockDb) -> Comment {
        post_comment(
            db,
            PostComment {
                restaurant_id: Id::new(1),
                author_id: Id::new(1),
                text: "top".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn reply_one_layer_below_parent() {
        let db = MockDb::with_user_and_restaurant();
        let top = post(&db);
        let first = reply(&db, top.id, "first").unwrap();
        assert_eq!(Some(top.id), first.reply_to);
        assert_eq!(Layer::new(2), first.layer);
        let second = reply(&db, first.id, "second").unwrap();
        assert_eq!(Some(first.id), second.reply_to);
        assert_eq!(Layer::new(3), second.layer);
        assert_eq!(3, db.comments.borrow().len());
    }

    #[test]
    fn store_replies_beyond_max_reply_depth() {
        let db = MockDb::with_user_and_restaurant();
        let mut parent = post(&db);
        for _ in 0..5 {
            parent = reply(&db, parent.id, "deeper").unwrap();
        }
        assert_eq!(Layer::new(6), parent.layer);
        assert_eq!(parent, db.load_comment(parent.id).unwrap());
    }

    #[test]
    fn reject_reply_to_missing_comment() {
        let db = MockDb::with_user_and_restaurant();
        assert!(matches!(
            reply(&db, Id::new(42), "reply"),
            Err(Error::CommentDoesNotExist)
        ));
    }

    #[test]
    fn reject_empty_reply() {
        let db = MockDb::with_user_and_restaurant();
        let top = post(&db);
        assert!(matches!(reply(&db, top.id, "  "), Err(Error::EmptyComment)));
    }

    #[test]
    fn reject_reply_to_comment_of_other_restaurant() {
        let db = MockDb::with_user_and_restaurant();
        let other = db.create_restaurant("Other").unwrap();
        let comment = post_comment(
            &db,
            PostComment {
                restaurant_id: other,
                author_id: Id::new(1),
                text: "elsewhere".into(),
            },
        )
        .unwrap();
        assert!(matches!(
            reply(&db, comment.id, "reply"),
            Err(Error::CommentOfOtherRestaurant)
        ));
    }
}
