mod body;
pub use body::{body, Block};

mod card;
pub use card::{PostCard, ValidationError, SEED_COMMENT};

mod comment;
pub use comment::{Comment, CommentId};

pub mod api {
    pub use feed_api::*;
}
