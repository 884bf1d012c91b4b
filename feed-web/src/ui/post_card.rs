use feed_client::api::{self, Author, Post};
use std::rc::Rc;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::{
    ui::{Avatar, CommentItem, PostContent},
    util,
};

#[derive(Clone, PartialEq, Properties)]
pub struct PostCardProps {
    pub post: Post,
    pub viewer: Rc<Author>,
}

pub enum PostCardMsg {
    DraftChanged(String),
    DraftInvalid,
    Submit,
    Delete(String),
}

pub struct PostCard {
    card: feed_client::PostCard,
    draft_ref: NodeRef,
}

impl PostCard {
    /// Mirrors the validation message into the browser's form validation
    fn sync_validity(&self) {
        if let Some(textarea) = self.draft_ref.cast::<HtmlTextAreaElement>() {
            textarea.set_custom_validity(&self.card.validation_message());
        }
    }
}

impl Component for PostCard {
    type Message = PostCardMsg;
    type Properties = PostCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            card: feed_client::PostCard::new(),
            draft_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PostCardMsg::DraftChanged(text) => {
                self.card.update_draft(text);
                self.sync_validity();
            }
            PostCardMsg::DraftInvalid => {
                self.card.reject_empty_draft();
                self.sync_validity();
            }
            PostCardMsg::Submit => match self.card.validate() {
                Ok(()) => {
                    let c = self.card.submit_comment();
                    tracing::debug!(post = ?ctx.props().post.id, comment = ?c.id, "comment published");
                }
                Err(e) => {
                    tracing::debug!("refusing to publish comment: {e}");
                    self.card.reject_empty_draft();
                    self.sync_validity();
                }
            },
            PostCardMsg::Delete(content) => self.card.delete_comment(&content),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let post = &ctx.props().post;
        let viewer = &ctx.props().viewer;

        // Recomputed on each render, so the relative date follows the clock
        let published_title = api::format_published(&post.published_at, &util::local_tz());
        let published_iso = api::iso_timestamp(&post.published_at);
        let published_relative = api::format_relative_to_now(&post.published_at);

        let on_delete = ctx.link().callback(PostCardMsg::Delete);
        let comments = self.card.comments().iter().map(|c| {
            html! {
                <CommentItem
                    key={ c.id.0.to_string() }
                    content={ c.content.clone() }
                    author={ viewer.clone() }
                    on_delete={ on_delete.clone() }
                />
            }
        });

        html! {
            <article class="post p-4 mb-4">
                <header class="post-header d-flex align-items-center">
                    <div class="author d-flex align-items-center flex-fill">
                        <Avatar src={ post.author.avatar_url.clone() } has_border={ true } />
                        <div class="author-info ms-3">
                            <strong>{ &post.author.name }</strong>
                            <span>{ &post.author.role }</span>
                        </div>
                    </div>
                    <time title={ published_title } datetime={ published_iso }>
                        { published_relative }
                    </time>
                </header>

                <PostContent content={ post.content.clone() } />

                <form
                    class="comment-form"
                    onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        PostCardMsg::Submit
                    }) }
                >
                    <strong>{ "Deixe um comentário" }</strong>
                    <textarea
                        ref={ self.draft_ref.clone() }
                        name="comment"
                        placeholder="Deixe um comentário"
                        value={ self.card.draft().to_string() }
                        oninput={ ctx.link().callback(|e: InputEvent| {
                            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                            PostCardMsg::DraftChanged(textarea.value())
                        }) }
                        oninvalid={ ctx.link().callback(|_: Event| PostCardMsg::DraftInvalid) }
                        required=true
                    />
                    <footer>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={ self.card.is_submit_disabled() }
                        >
                            { "Publicar" }
                        </button>
                    </footer>
                </form>

                <div class="comment-list">
                    { for comments }
                </div>
            </article>
        }
    }
}
