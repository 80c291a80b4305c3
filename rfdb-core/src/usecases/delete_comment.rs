use super::{prelude::*, require_comment, require_user};

/// Deletes a single comment.
///
/// Replies to the deleted comment are kept. They become orphans
/// and are no longer displayed.
pub fn delete_comment<D: Db>(db: &D, account_id: Id, comment_id: Id) -> Result<Comment> {
    let account = require_user(db, account_id)?;
    if !account.is_admin() {
        log::warn!("User {account_id} is not allowed to delete comment {comment_id}");
        return Err(Error::Forbidden);
    }
    let comment = require_comment(db, comment_id)?;
    db.delete_comment(comment_id)?;
    log::info!(
        "Deleted comment {comment_id} of restaurant {}",
        comment.restaurant_id
    );
    Ok(comment)
}
