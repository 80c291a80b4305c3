use super::*;

pub fn reply_to_comment(
    connections: &sqlite::Connections,
    params: usecases::ReplyToComment,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let parent_id = params.parent_id;
        usecases::reply_to_comment(conn, params).map_err(|err| {
            warn!("Failed to reply to comment {}: {}", parent_id, err);
            err
        })
    })?)
}
