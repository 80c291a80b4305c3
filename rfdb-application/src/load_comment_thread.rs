use super::*;

use rfdb_core::thread::{AnnotatedComment, ThreadConfig};

pub fn load_comment_thread(
    connections: &sqlite::Connections,
    restaurant_id: Id,
    viewer_id: Option<Id>,
    config: &ThreadConfig,
) -> Result<Vec<AnnotatedComment>> {
    let db = connections.shared()?;
    Ok(
        usecases::load_comment_thread(&db, restaurant_id, viewer_id, config).map_err(|err| {
            warn!(
                "Failed to load comments of restaurant {}: {}",
                restaurant_id, err
            );
            err
        })?,
    )
}
