use anyhow::Context;
use chrono::Duration;
use feed_api::{Author, ContentKind, ContentLine, Feed, Post, PostId, Time};
use rand::{rngs::StdRng, Rng, SeedableRng};

const NAMES: &[&str] = &[
    "Diego Fernandes",
    "Mayk Brito",
    "Leslie Alexander",
    "Devon Lane",
    "Jane Cooper",
];
const ROLES: &[&str] = &["CTO", "Educator", "UI Designer", "Web Developer"];

const PARAGRAPHS_PER_POST: usize = 3;
const PARAGRAPH_WORD_COUNT: usize = 25;
const LINK_WORD_COUNT: usize = 2;
// posts are spread over a bit more than a year, to hit every relative date wording
const MAX_AGE_MINUTES: i64 = 60 * 24 * 400;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Number of posts to generate
    #[structopt(short, long, default_value = "5")]
    posts: usize,

    /// Seed, for reproducible output
    #[structopt(short, long)]
    seed: Option<u64>,
}

fn pick<'a>(rng: &mut StdRng, from: &[&'a str]) -> &'a str {
    from[rng.gen_range(0..from.len())]
}

fn gen_author(rng: &mut StdRng) -> Author {
    let name = pick(rng, NAMES);
    Author {
        name: String::from(name),
        role: String::from(pick(rng, ROLES)),
        avatar_url: format!(
            "https://i.pravatar.cc/150?u={}",
            name.to_lowercase().replace(' ', "-")
        ),
    }
}

fn gen_content(rng: &mut StdRng) -> Vec<ContentLine> {
    let mut content = (0..rng.gen_range(1..=PARAGRAPHS_PER_POST))
        .map(|_| {
            ContentLine::paragraph(lipsum::lipsum_from_seed(PARAGRAPH_WORD_COUNT, rng.gen()))
        })
        .collect::<Vec<_>>();
    if rng.gen_bool(0.7) {
        let words = lipsum::lipsum_from_seed(LINK_WORD_COUNT, rng.gen());
        let link = words
            .to_lowercase()
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .collect::<Vec<_>>()
            .join(".");
        content.push(ContentLine::link(link));
    }
    if rng.gen_bool(0.1) {
        // the front-end must skip what it cannot display
        content.push(ContentLine {
            kind: ContentKind::Other,
            text: String::from("unsupported"),
        });
    }
    content
}

fn gen_post(rng: &mut StdRng, id: i64, now: Time) -> Post {
    Post {
        id: PostId(id),
        author: gen_author(rng),
        published_at: now - Duration::minutes(rng.gen_range(0..MAX_AGE_MINUTES)),
        content: gen_content(rng),
    }
}

/// Same seed and same `now` always give the same feed
fn gen_feed(posts: usize, seed: u64, now: Time) -> Feed {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut posts = (0..posts)
        .map(|i| gen_post(&mut rng, i as i64 + 1, now))
        .collect::<Vec<_>>();
    posts.sort_by_key(|p| std::cmp::Reverse(p.published_at));
    Feed {
        viewer: gen_author(&mut rng),
        posts,
    }
}

fn main() -> anyhow::Result<()> {
    let opt = <Opt as structopt::StructOpt>::from_args();
    let seed = opt.seed.unwrap_or_else(rand::random);
    let feed = gen_feed(opt.posts, seed, chrono::Utc::now());

    let json = serde_json::to_string_pretty(&feed).context("serializing generated feed")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> Time {
        chrono::Utc.with_ymd_and_hms(2022, 5, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn same_seed_same_feed() {
        let feed = gen_feed(10, 42, now());
        assert_eq!(feed.posts.len(), 10);
        assert_eq!(feed, gen_feed(10, 42, now()));
        assert_ne!(feed, gen_feed(10, 43, now()));
    }

    #[test]
    fn generated_feed_is_loadable() {
        let feed = gen_feed(5, 7, now());
        let json = serde_json::to_string(&feed).unwrap();
        let parsed: Feed = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, feed);
        assert!(feed
            .posts
            .windows(2)
            .all(|w| w[0].published_at >= w[1].published_at));
        assert!(feed.posts.iter().all(|p| !p.content.is_empty()));
    }
}
