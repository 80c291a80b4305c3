pub mod db;
pub mod repositories;
pub mod thread;
pub mod usecases;

pub mod entities {
    pub use rfdb_entities::{comment::*, id::*, like::*, restaurant::*, time::*, user::*};
}
