use super::*;

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn create_comment(&self, comment: NewComment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_restaurant(&self, restaurant_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id)
    }
    fn delete_comment(&self, id: Id) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> CommentRepo for DbConnection<'a> {
    fn create_comment(&self, comment: NewComment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_restaurant(&self, restaurant_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id)
    }
    fn delete_comment(&self, id: Id) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn create_comment(&self, _comment: NewComment) -> Result<Id> {
        unreachable!();
    }
    fn load_comment(&self, id: Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_restaurant(&self, restaurant_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_restaurant(&mut self.conn.borrow_mut(), restaurant_id)
    }
    fn delete_comment(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: NewComment) -> Result<Id> {
    let NewComment {
        restaurant_id,
        author_id,
        text,
        reply_to,
        layer,
        created_at,
    } = comment;
    let new_comment = models::NewComment {
        restaurant_id: restaurant_id.into(),
        user_id: author_id.into(),
        text,
        reply_comment_id: reply_to.map(Into::into),
        layer: layer.value().into(),
        created_at: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    last_insert_id(conn)
}

fn load_comment(conn: &mut SqliteConnection, id: Id) -> Result<Comment> {
    use schema::comments::dsl;
    schema::comments::table
        .filter(dsl::id.eq(i64::from(id)))
        .first::<models::Comment>(conn)
        .map(Into::into)
        .map_err(from_diesel_err)
}

fn load_comments_of_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: Id,
) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(schema::comments::table
        .filter(dsl::restaurant_id.eq(i64::from(restaurant_id)))
        .order_by(dsl::id)
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn delete_comment(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    let id = i64::from(id);
    // Replies are not touched
    let likes = diesel::delete(
        schema::like_comments::table.filter(schema::like_comments::dsl::comment_id.eq(id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    let count = diesel::delete(schema::comments::table.filter(schema::comments::dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    log::debug!("Deleted comment {id} together with {likes} like(s)");
    Ok(())
}
