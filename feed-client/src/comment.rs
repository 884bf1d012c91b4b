#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CommentId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    /// Unique within its card, only used to key the rendered list
    pub id: CommentId,

    pub content: String,
}
