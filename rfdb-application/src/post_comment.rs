use super::*;

pub fn post_comment(
    connections: &sqlite::Connections,
    params: usecases::PostComment,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let restaurant_id = params.restaurant_id;
        usecases::post_comment(conn, params).map_err(|err| {
            warn!(
                "Failed to post comment on restaurant {}: {}",
                restaurant_id, err
            );
            err
        })
    })?)
}
