use feed_client::api::{Author, Feed};
use std::rc::Rc;
use yew::prelude::*;

use crate::ui::{Avatar, PostCard};

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    pub feed: Rc<Feed>,
}

#[function_component(App)]
pub fn app(p: &AppProps) -> Html {
    let viewer = Rc::new(p.feed.viewer.clone());
    // Keyed by post id so that each card keeps its own comment thread
    let posts = p.feed.posts.iter().map(|post| {
        html! {
            <PostCard
                key={ post.id.0.to_string() }
                post={ post.clone() }
                viewer={ viewer.clone() }
            />
        }
    });
    html! {
        <>
            <header class="app-header d-flex justify-content-center p-3">
                <strong>{ "Ignite Feed" }</strong>
            </header>
            <div class="container my-4">
                <div class="row">
                    <aside class="col-md-3">
                        { sidebar(&viewer) }
                    </aside>
                    <main class="col-md-9">
                        { for posts }
                    </main>
                </div>
            </div>
        </>
    }
}

fn sidebar(viewer: &Author) -> Html {
    html! {
        <div class="sidebar d-flex flex-column align-items-center p-4">
            <Avatar src={ viewer.avatar_url.clone() } has_border={ true } />
            <strong class="mt-3">{ &viewer.name }</strong>
            <span>{ &viewer.role }</span>
        </div>
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct LoadErrorProps {
    pub message: AttrValue,
}

#[function_component(LoadError)]
pub fn load_error(p: &LoadErrorProps) -> Html {
    html! {
        <div class="container my-4">
            <div class="alert alert-danger" role="alert">
                { "Failed loading the feed: " }{ &p.message }
            </div>
        </div>
    }
}
