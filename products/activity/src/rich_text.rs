use std::fmt;

use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    /// Emphasized, non-clickable name.
    Name { text: String },
    Link {
        text: String,
        href: String,
        /// Analytics label attached to the click.
        track: String,
    },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Text { text } | Segment::Name { text } | Segment::Link { text, .. } => text,
        }
    }
}

/// Inline markup for a summary line.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Text { text: text.into() });
        self
    }

    pub fn name(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Name { text: text.into() });
        self
    }

    pub fn link(
        mut self,
        text: impl Into<String>,
        href: impl Into<String>,
        track: impl Into<String>,
    ) -> Self {
        self.segments.push(Segment::Link {
            text: text.into(),
            href: href.into(),
            track: track.into(),
        });
        self
    }

    /// Link when `href` is present, plain name otherwise.
    pub fn target(self, text: impl Into<String>, href: Option<String>, track: &str) -> Self {
        match href {
            Some(href) => self.link(text, href, track),
            None => self.name(text),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Link { text, href, .. } => Some((text.as_str(), href.as_str())),
            _ => None,
        })
    }

    pub fn has_links(&self) -> bool {
        self.links().next().is_some()
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_picks_link_or_name() {
        let rich = RichText::new()
            .text("saved ")
            .target("Sales", Some("/question/7".into()), "Card")
            .text(" and ")
            .target("Gone", None, "Card");
        assert_eq!(rich.plain_text(), "saved Sales and Gone");
        assert_eq!(rich.links().collect::<Vec<_>>(), vec![("Sales", "/question/7")]);
        assert!(matches!(rich.segments()[3], Segment::Name { .. }));
    }

    #[test]
    fn serializes_as_tagged_segments() {
        let rich = RichText::new().text("hi ").name("Ada");
        let value = serde_json::to_value(&rich).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"kind": "text", "text": "hi "},
                {"kind": "name", "text": "Ada"}
            ])
        );
    }
}
