use super::prelude::*;

pub fn create_restaurant<R: RestaurantRepo>(repo: &R, name: &str) -> Result<Restaurant> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    let id = repo.create_restaurant(name)?;
    log::debug!("Created restaurant {id}");
    Ok(Restaurant {
        id,
        name: name.to_owned(),
    })
}
