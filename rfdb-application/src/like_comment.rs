use super::*;

pub fn like_comment(connections: &sqlite::Connections, user_id: Id, comment_id: Id) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::like_comment(conn, user_id, comment_id).map_err(|err| {
            warn!(
                "User {} failed to like comment {}: {}",
                user_id, comment_id, err
            );
            err
        })
    })?)
}

pub fn unlike_comment(
    connections: &sqlite::Connections,
    user_id: Id,
    comment_id: Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::unlike_comment(conn, user_id, comment_id).map_err(|err| {
            warn!(
                "User {} failed to unlike comment {}: {}",
                user_id, comment_id, err
            );
            err
        })
    })?)
}
