use super::*;

/// Deletes a single comment on behalf of an admin.
///
/// Returns the deleted comment.
pub fn delete_comment(
    connections: &sqlite::Connections,
    account_id: Id,
    comment_id: Id,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_comment(conn, account_id, comment_id).map_err(|err| {
            warn!(
                "Account {} failed to delete comment {}: {}",
                account_id, comment_id, err
            );
            err
        })
    })?)
}
