use crate::{Comment, CommentId};

pub const SEED_COMMENT: &str = "Post top, hein?";

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Esse campo é obrigatório")]
    Required,
}

/// State of one post card: its comment thread and the comment being written
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostCard {
    comments: Vec<Comment>,
    draft: String,
    validation: Option<ValidationError>,
    next_id: u64,
}

impl Default for PostCard {
    fn default() -> PostCard {
        PostCard::new()
    }
}

impl PostCard {
    pub fn new() -> PostCard {
        let mut this = PostCard {
            comments: Vec::new(),
            draft: String::new(),
            validation: None,
            next_id: 0,
        };
        this.push_comment(String::from(SEED_COMMENT));
        this
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.draft.is_empty()
    }

    /// Empty when the draft has not been rejected since its last edit
    pub fn validation_message(&self) -> String {
        self.validation.map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.draft.is_empty() {
            true => Err(ValidationError::Required),
            false => Ok(()),
        }
    }

    pub fn update_draft(&mut self, text: String) {
        tracing::trace!(len = text.len(), "draft updated");
        self.draft = text;
        self.validation = None;
    }

    pub fn reject_empty_draft(&mut self) {
        tracing::debug!("empty draft rejected");
        self.validation = Some(ValidationError::Required);
    }

    /// Moves the draft to the end of the thread.
    ///
    /// Emptiness is not checked here: callers go through `validate` first,
    /// and the submit button is disabled while the draft is empty.
    pub fn submit_comment(&mut self) -> &Comment {
        let content = std::mem::take(&mut self.draft);
        tracing::debug!(?content, "submitting comment");
        self.push_comment(content)
    }

    /// Removes every comment whose text is `target`
    pub fn delete_comment(&mut self, target: &str) {
        let before = self.comments.len();
        self.comments.retain(|c| c.content != target);
        tracing::debug!(
            ?target,
            removed = before - self.comments.len(),
            "deleted comment"
        );
    }

    fn push_comment(&mut self, content: String) -> &Comment {
        let id = CommentId(self.next_id);
        self.next_id += 1;
        let idx = self.comments.len();
        self.comments.push(Comment { id, content });
        &self.comments[idx]
    }
}
