pub mod prelude {
    pub use rfdb_core::{
        entities::*,
        repositories::*,
        thread::{AnnotatedComment, ThreadConfig},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::prelude as flows;

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            rfdb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn create_user(&self, email: &str, role: Role) -> Id {
            flows::create_user(
                &self.db_connections,
                NewUser {
                    name: email.split('@').next().unwrap_or_default().into(),
                    email: email.into(),
                    role,
                },
            )
            .unwrap()
            .id
        }

        pub fn try_get_user(&self, id: Id) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user(id)
                .unwrap()
        }

        pub fn create_restaurant(&self, name: &str) -> Id {
            flows::create_restaurant(&self.db_connections, name)
                .unwrap()
                .id
        }

        pub fn post_comment(&self, restaurant_id: Id, author_id: Id, text: &str) -> Id {
            flows::post_comment(
                &self.db_connections,
                usecases::PostComment {
                    restaurant_id,
                    author_id,
                    text: text.into(),
                },
            )
            .unwrap()
            .id
        }

        pub fn reply(&self, restaurant_id: Id, parent_id: Id, author_id: Id, text: &str) -> Id {
            flows::reply_to_comment(
                &self.db_connections,
                usecases::ReplyToComment {
                    restaurant_id,
                    parent_id,
                    author_id,
                    text: text.into(),
                },
            )
            .unwrap()
            .id
        }

        pub fn load_comment(&self, id: Id) -> Comment {
            self.db_connections
                .shared()
                .unwrap()
                .load_comment(id)
                .unwrap()
        }

        pub fn load_thread(&self, restaurant_id: Id, viewer_id: Option<Id>) -> Vec<AnnotatedComment> {
            flows::load_comment_thread(
                &self.db_connections,
                restaurant_id,
                viewer_id,
                &ThreadConfig::default(),
            )
            .unwrap()
        }
    }
}
