pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::comment_builder::*;

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.comment.id = id.into();
            self
        }
        /// Turns the comment into a reply on the given layer.
        pub fn reply_to(mut self, parent: i64, layer: u16) -> Self {
            self.comment.reply_to = Some(parent.into());
            self.comment.layer = layer.into();
            self
        }
        pub fn layer(mut self, layer: u16) -> Self {
            self.comment.layer = layer.into();
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.comment.created_at = Timestamp::from_millis(millis);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(1),
                    restaurant_id: Id::new(1),
                    author_id: Id::new(1),
                    text: "a comment".into(),
                    reply_to: None,
                    layer: Layer::TOP,
                    created_at: Timestamp::from_millis(0),
                },
            }
        }
    }

    #[test]
    fn build_reply() {
        let c = Comment::build().id(7).reply_to(3, 2).finish();
        assert_eq!(Id::new(7), c.id);
        assert_eq!(Some(Id::new(3)), c.reply_to);
        assert_eq!(Layer::new(2), c.layer);
    }
}
