use feed_client::api::Author;
use std::rc::Rc;
use yew::prelude::*;

use crate::ui::Avatar;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub content: AttrValue,
    pub author: Rc<Author>,
    pub on_delete: Callback<String>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let on_delete = {
        let content = p.content.clone();
        p.on_delete.reform(move |_: MouseEvent| content.to_string())
    };
    html! {
        <div class="comment d-flex">
            <Avatar src={ p.author.avatar_url.clone() } has_border={ false } />
            <div class="comment-box flex-fill">
                <div class="comment-content p-3">
                    <header class="d-flex align-items-start">
                        <strong class="flex-fill">{ &p.author.name }</strong>
                        <button
                            type="button"
                            class="btn bi-btn bi-trash"
                            title="Deletar comentário"
                            aria-label="Deletar comentário"
                            onclick={ on_delete }
                        >
                        </button>
                    </header>
                    <p>{ &p.content }</p>
                </div>
            </div>
        </div>
    }
}
