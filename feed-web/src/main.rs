use anyhow::Context;
use feed_client::api::Feed;
use std::rc::Rc;

mod ui;
mod util;

const FEED_JSON: &str = include_str!("../feed.json");

fn load_feed() -> anyhow::Result<Feed> {
    serde_json::from_str(FEED_JSON).context("parsing the embedded feed")
}

fn main() {
    tracing_wasm::set_as_global_default();
    match load_feed() {
        Ok(feed) => {
            tracing::info!(posts = feed.posts.len(), "feed loaded");
            yew::Renderer::<ui::App>::with_props(ui::AppProps {
                feed: Rc::new(feed),
            })
            .render();
        }
        Err(e) => {
            tracing::error!("failed loading feed: {e:?}");
            yew::Renderer::<ui::LoadError>::with_props(ui::LoadErrorProps {
                message: format!("{e:#}").into(),
            })
            .render();
        }
    }
}
