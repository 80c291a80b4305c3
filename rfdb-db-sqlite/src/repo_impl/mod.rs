// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    sql_types::BigInt,
};
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use rfdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;
mod like;
mod restaurant;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

// The id of the row that has most recently been inserted
// through this connection
fn last_insert_id(conn: &mut SqliteConnection) -> Result<Id> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map(Id::new)
        .map_err(from_diesel_err)
}

fn load_role(role: i16) -> Result<Role> {
    Role::from_i16(role).ok_or_else(|| anyhow!("Invalid role: {role}").into())
}

fn store_role(role: Role) -> i16 {
    role.to_i16().unwrap_or_default()
}

fn load_layer(id: i64, layer: i32) -> Layer {
    match u16::try_from(layer) {
        Ok(layer) => Layer::new(layer),
        Err(_) => {
            // Never rendered, but still loaded
            log::warn!("Comment {id} is stored with invalid layer {layer}");
            Layer::new(if layer < 0 { 0 } else { u16::MAX })
        }
    }
}

impl From<models::Comment> for Comment {
    fn from(from: models::Comment) -> Self {
        let models::Comment {
            id,
            restaurant_id,
            user_id,
            text,
            reply_comment_id,
            layer,
            created_at,
        } = from;
        Self {
            id: Id::new(id),
            restaurant_id: Id::new(restaurant_id),
            author_id: Id::new(user_id),
            text,
            // The legacy schema uses 0 instead of NULL
            reply_to: reply_comment_id.filter(|id| *id > 0).map(Id::new),
            layer: load_layer(id, layer),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl From<models::Restaurant> for Restaurant {
    fn from(from: models::Restaurant) -> Self {
        let models::Restaurant { id, name } = from;
        Self {
            id: Id::new(id),
            name,
        }
    }
}

impl TryFrom<models::User> for User {
    type Error = repo::Error;
    fn try_from(from: models::User) -> Result<Self> {
        let models::User {
            id,
            name,
            email,
            role,
        } = from;
        Ok(Self {
            id: Id::new(id),
            name,
            email,
            role: load_role(role)?,
        })
    }
}
