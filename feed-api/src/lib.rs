use chrono::Utc;

mod date;
pub use date::{format_published, format_relative, format_relative_to_now, iso_timestamp, LOCALE};

pub type Time = chrono::DateTime<Utc>;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Paragraph,
    Link,

    /// Any kind this version does not know how to display
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ContentLine {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(rename = "content")]
    pub text: String,
}

impl ContentLine {
    pub fn paragraph(text: impl Into<String>) -> ContentLine {
        ContentLine {
            kind: ContentKind::Paragraph,
            text: text.into(),
        }
    }

    pub fn link(text: impl Into<String>) -> ContentLine {
        ContentLine {
            kind: ContentKind::Link,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    #[serde(rename = "publishedAt")]
    pub published_at: Time,
    pub content: Vec<ContentLine>,
}

/// Everything the front-end displays: who is looking, and what they look at
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Feed {
    pub viewer: Author,
    pub posts: Vec<Post>,
}
