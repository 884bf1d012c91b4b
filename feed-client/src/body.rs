use crate::api::{ContentKind, ContentLine};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Block<'a> {
    Paragraph(&'a str),
    Link(&'a str),
}

/// Lays out a post body in order, dropping lines of unknown kind
pub fn body(content: &[ContentLine]) -> Vec<Block<'_>> {
    content
        .iter()
        .filter_map(|line| match line.kind {
            ContentKind::Paragraph => Some(Block::Paragraph(&line.text)),
            ContentKind::Link => Some(Block::Link(&line.text)),
            ContentKind::Other => {
                tracing::warn!(text = ?line.text, "skipping content line of unknown kind");
                None
            }
        })
        .collect()
}
