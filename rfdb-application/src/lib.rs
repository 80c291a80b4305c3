#[macro_use]
extern crate log;

mod create_restaurant;
mod create_user;
mod delete_comment;
mod like_comment;
mod load_comment_thread;
mod post_comment;
mod reply_to_comment;

pub mod prelude {
    pub use super::{
        create_restaurant::*, create_user::*, delete_comment::*, like_comment::*,
        load_comment_thread::*, post_comment::*, reply_to_comment::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use rfdb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use rfdb_db_sqlite::Connections;
}
