mod app;
pub use app::{App, AppProps, LoadError, LoadErrorProps};

mod avatar;
pub use avatar::Avatar;

mod comment_item;
pub use comment_item::CommentItem;

mod post_content;
pub use post_content::PostContent;

mod post_card;
pub use post_card::PostCard;
