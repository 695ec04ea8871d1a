//! Plain-text rendering of a [`FeedView`] for terminals.

use crate::{
    feed::{FeedItem, FeedView},
    rich_text::{RichText, Segment},
};

pub fn to_text(view: &FeedView) -> String {
    match view {
        FeedView::Loading { label } => format!("{label}\n"),
        FeedView::Failed { message, .. } => format!("! {message}\n"),
        FeedView::Empty { title, hint } => format!("{title}\n{hint}\n"),
        FeedView::Items { items } => {
            let mut out = String::new();
            for item in items {
                write_item(&mut out, item);
            }
            out
        }
    }
}

fn write_item(out: &mut String, item: &FeedItem) {
    let color = item.color.map(|slot| slot.token()).unwrap_or("system");
    out.push_str(&format!(
        "[{color}] {} {} ({})\n",
        item.description.user_name,
        inline(&item.description.summary),
        item.description.time_since
    ));
    let Some(story) = &item.story else {
        return;
    };
    let Some(body) = story.body.as_deref() else {
        return;
    };
    match story.body_link.as_deref() {
        Some(link) => out.push_str(&format!("    {body} <{link}>\n")),
        None => out.push_str(&format!("    {body}\n")),
    }
}

fn inline(summary: &RichText) -> String {
    summary
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Link { text, href, .. } => format!("{text} <{href}>"),
            other => other.text().to_string(),
        })
        .collect()
}
