use super::*;
use std::collections::HashSet;

impl<'a> CommentLikeRepo for DbReadWrite<'a> {
    fn create_comment_like(&self, like: CommentLike) -> Result<()> {
        create_comment_like(&mut self.conn.borrow_mut(), like)
    }
    fn delete_comment_like(&self, user_id: Id, comment_id: Id) -> Result<()> {
        delete_comment_like(&mut self.conn.borrow_mut(), user_id, comment_id)
    }
    fn try_get_comment_like(&self, user_id: Id, comment_id: Id) -> Result<Option<CommentLike>> {
        try_get_comment_like(&mut self.conn.borrow_mut(), user_id, comment_id)
    }
    fn all_comment_likes(&self) -> Result<Vec<CommentLike>> {
        all_comment_likes(&mut self.conn.borrow_mut())
    }
    fn liked_comment_ids_of_user(&self, user_id: Id) -> Result<HashSet<Id>> {
        liked_comment_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> CommentLikeRepo for DbConnection<'a> {
    fn create_comment_like(&self, like: CommentLike) -> Result<()> {
        create_comment_like(&mut self.conn.borrow_mut(), like)
    }
    fn delete_comment_like(&self, user_id: Id, comment_id: Id) -> Result<()> {
        delete_comment_like(&mut self.conn.borrow_mut(), user_id, comment_id)
    }
    fn try_get_comment_like(&self, user_id: Id, comment_id: Id) -> Result<Option<CommentLike>> {
        try_get_comment_like(&mut self.conn.borrow_mut(), user_id, comment_id)
    }
    fn all_comment_likes(&self) -> Result<Vec<CommentLike>> {
        all_comment_likes(&mut self.conn.borrow_mut())
    }
    fn liked_comment_ids_of_user(&self, user_id: Id) -> Result<HashSet<Id>> {
        liked_comment_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> CommentLikeRepo for DbReadOnly<'a> {
    fn create_comment_like(&self, _like: CommentLike) -> Result<()> {
        unreachable!();
    }
    fn delete_comment_like(&self, _user_id: Id, _comment_id: Id) -> Result<()> {
        unreachable!();
    }
    fn try_get_comment_like(&self, user_id: Id, comment_id: Id) -> Result<Option<CommentLike>> {
        try_get_comment_like(&mut self.conn.borrow_mut(), user_id, comment_id)
    }
    fn all_comment_likes(&self) -> Result<Vec<CommentLike>> {
        all_comment_likes(&mut self.conn.borrow_mut())
    }
    fn liked_comment_ids_of_user(&self, user_id: Id) -> Result<HashSet<Id>> {
        liked_comment_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_comment_like(conn: &mut SqliteConnection, like: CommentLike) -> Result<()> {
    let CommentLike {
        user_id,
        comment_id,
    } = like;
    let new_like = models::NewLikeComment {
        user_id: user_id.into(),
        comment_id: comment_id.into(),
        created_at: Timestamp::now().as_millis(),
    };
    let _count = diesel::insert_into(schema::like_comments::table)
        .values(&new_like)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn delete_comment_like(conn: &mut SqliteConnection, user_id: Id, comment_id: Id) -> Result<()> {
    use schema::like_comments::dsl;
    let count = diesel::delete(
        schema::like_comments::table
            .filter(dsl::user_id.eq(i64::from(user_id)))
            .filter(dsl::comment_id.eq(i64::from(comment_id))),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn try_get_comment_like(
    conn: &mut SqliteConnection,
    user_id: Id,
    comment_id: Id,
) -> Result<Option<CommentLike>> {
    use schema::like_comments::dsl;
    Ok(schema::like_comments::table
        .select((dsl::user_id, dsl::comment_id))
        .filter(dsl::user_id.eq(i64::from(user_id)))
        .filter(dsl::comment_id.eq(i64::from(comment_id)))
        .first::<(i64, i64)>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_like))
}

fn all_comment_likes(conn: &mut SqliteConnection) -> Result<Vec<CommentLike>> {
    use schema::like_comments::dsl;
    Ok(schema::like_comments::table
        .select((dsl::user_id, dsl::comment_id))
        .load::<(i64, i64)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_like)
        .collect())
}

fn liked_comment_ids_of_user(conn: &mut SqliteConnection, user_id: Id) -> Result<HashSet<Id>> {
    use schema::like_comments::dsl;
    Ok(schema::like_comments::table
        .select(dsl::comment_id)
        .filter(dsl::user_id.eq(i64::from(user_id)))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::new)
        .collect())
}

fn load_like((user_id, comment_id): (i64, i64)) -> CommentLike {
    CommentLike {
        user_id: Id::new(user_id),
        comment_id: Id::new(comment_id),
    }
}
