use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate piece of content to be ranked.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Absent optional fields contribute nothing to scoring; they are never an
/// error. Items are read-only inputs for the duration of one ranking call.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use kerbside_core::ContentItem;
///
/// let item = ContentItem::new("a1", "Night market opens", "Street food stalls return", 0, "citydesk")
///     .with_topics(["food", "events"])
///     .with_location(Coord { x: -0.08, y: 51.52 });
///
/// assert_eq!(item.id, "a1");
/// assert_eq!(item.topics.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContentItem {
    /// Unique, stable identifier.
    pub id: String,
    /// Headline text.
    pub title: String,
    /// Short summary or standfirst.
    pub summary: String,
    /// Optional full body text.
    pub body: Option<String>,
    /// Ordered topic labels assigned by ingestion.
    pub topics: Vec<String>,
    /// Free-text tags; empty means none were supplied.
    pub tags: Vec<String>,
    /// Publication timestamp in epoch milliseconds.
    pub published_at: i64,
    /// Geographic position, when the item is tied to a place.
    pub location: Option<Coord<f64>>,
    /// Name of the originating source.
    pub source: String,
    /// Optional image reference.
    pub image_url: Option<String>,
    /// Free-text place names mentioned by the item.
    pub locations: Vec<String>,
}

impl ContentItem {
    /// Construct an item with the required fields; optional fields start
    /// absent and can be attached with the `with_*` builders.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        published_at: i64,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            body: None,
            topics: Vec::new(),
            tags: Vec::new(),
            published_at,
            location: None,
            source: source.into(),
            image_url: None,
            locations: Vec::new(),
        }
    }

    /// Attach topic labels while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Attach free-text tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a coordinate.
    #[must_use]
    pub fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Attach free-text place names.
    #[must_use]
    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Report whether any tag equals `tag` ignoring ASCII case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_attach_optional_fields() {
        let item = ContentItem::new("a", "t", "s", 1, "src")
            .with_body("body")
            .with_tags(["Breaking"])
            .with_image_url("https://example.com/a.jpg");

        assert_eq!(item.body.as_deref(), Some("body"));
        assert!(item.has_tag("breaking"));
        assert!(item.image_url.is_some());
    }

    #[test]
    fn missing_tag_is_not_found() {
        let item = ContentItem::new("a", "t", "s", 1, "src");
        assert!(!item.has_tag("breaking"));
    }
}
