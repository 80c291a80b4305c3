use super::*;

impl<'a> RestaurantRepo for DbReadWrite<'a> {
    fn create_restaurant(&self, name: &str) -> Result<Id> {
        create_restaurant(&mut self.conn.borrow_mut(), name)
    }
    fn get_restaurant(&self, id: Id) -> Result<Restaurant> {
        get_restaurant(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> RestaurantRepo for DbConnection<'a> {
    fn create_restaurant(&self, name: &str) -> Result<Id> {
        create_restaurant(&mut self.conn.borrow_mut(), name)
    }
    fn get_restaurant(&self, id: Id) -> Result<Restaurant> {
        get_restaurant(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> RestaurantRepo for DbReadOnly<'a> {
    fn create_restaurant(&self, _name: &str) -> Result<Id> {
        unreachable!();
    }
    fn get_restaurant(&self, id: Id) -> Result<Restaurant> {
        get_restaurant(&mut self.conn.borrow_mut(), id)
    }
}

fn create_restaurant(conn: &mut SqliteConnection, name: &str) -> Result<Id> {
    let _count = diesel::insert_into(schema::restaurants::table)
        .values(&models::NewRestaurant { name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    last_insert_id(conn)
}

fn get_restaurant(conn: &mut SqliteConnection, id: Id) -> Result<Restaurant> {
    use schema::restaurants::dsl;
    schema::restaurants::table
        .filter(dsl::id.eq(i64::from(id)))
        .first::<models::Restaurant>(conn)
        .map(Into::into)
        .map_err(from_diesel_err)
}
