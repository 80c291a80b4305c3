use super::*;

pub fn create_restaurant(connections: &sqlite::Connections, name: &str) -> Result<Restaurant> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_restaurant(conn, name).map_err(|err| {
            warn!("Failed to create restaurant '{}': {}", name, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_restaurants_with_distinct_ids() {
        let fixture = BackendFixture::new();
        let trattoria = flows::create_restaurant(&fixture.db_connections, "Trattoria").unwrap();
        let sushi_bar = flows::create_restaurant(&fixture.db_connections, " Sushi Bar ").unwrap();
        assert_ne!(trattoria.id, sushi_bar.id);
        assert_eq!("Sushi Bar", sushi_bar.name);
    }

    #[test]
    fn reject_a_blank_name() {
        let fixture = BackendFixture::new();
        let err = flows::create_restaurant(&fixture.db_connections, "  ").unwrap_err();
        assert!(matches!(
            err.parameter_error(),
            Some(usecases::Error::EmptyName)
        ));
    }
}
