use super::*;

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: NewUser) -> Result<Id> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: NewUser) -> Result<Id> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: NewUser) -> Result<Id> {
        unreachable!();
    }
    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
}

fn create_user(conn: &mut SqliteConnection, user: NewUser) -> Result<Id> {
    let NewUser { name, email, role } = &user;
    let new_user = models::NewUser {
        name,
        email,
        role: store_role(*role),
    };
    let _count = diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    last_insert_id(conn)
}

fn get_user(conn: &mut SqliteConnection, id: Id) -> Result<User> {
    use schema::users::dsl;
    schema::users::table
        .filter(dsl::id.eq(i64::from(id)))
        .first::<models::User>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}
