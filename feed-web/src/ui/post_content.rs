use feed_client::{api::ContentLine, Block};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct PostContentProps {
    pub content: Vec<ContentLine>,
}

#[function_component(PostContent)]
pub fn post_content(p: &PostContentProps) -> Html {
    let blocks = feed_client::body(&p.content)
        .into_iter()
        .map(|block| match block {
            Block::Paragraph(text) => html! { <p>{ text }</p> },
            Block::Link(text) => html! { <p><a href="#">{ text }</a></p> },
        });
    html! {
        <div class="post-content">
            { for blocks }
        </div>
    }
}
