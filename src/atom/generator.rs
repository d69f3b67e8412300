//! Atom document writer

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::types::{Category, Content, Entry, Feed, Link, Person};
use super::{ATOM03_URI, ATOM10_URI};
use crate::date;
use crate::io::WireFeedGenerator;
use crate::module;
use crate::wire::{FeedType, WireFeed};
use crate::xml::{self, Element};
use crate::{Result, SyndError};

/// Writes a [`Feed`] as Atom 0.3 or 1.0
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomGenerator;

impl WireFeedGenerator for AtomGenerator {
    fn supports(&self, feed_type: FeedType) -> bool {
        feed_type.is_atom()
    }

    fn generate(&self, feed: &WireFeed) -> Result<Element> {
        let atom = feed
            .as_atom()
            .ok_or_else(|| SyndError::UnsupportedFeedType(feed.feed_type().to_string()))?;

        let writer = match atom.feed_type {
            FeedType::Atom10 => Writer {
                ns: ATOM10_URI,
                legacy: false,
            },
            FeedType::Atom03 => Writer {
                ns: ATOM03_URI,
                legacy: true,
            },
            other => return Err(SyndError::UnsupportedFeedType(other.to_string())),
        };

        debug!(
            "Generating {} document with {} entries",
            atom.feed_type,
            atom.entries.len()
        );

        let mut root = writer.feed_element(atom, "feed");
        if writer.legacy {
            root.set_attribute("version", "0.3");
        }
        for entry in &atom.entries {
            root.push(writer.entry_element(entry));
        }
        Ok(root)
    }
}

struct Writer {
    ns: &'static str,
    legacy: bool,
}

impl Writer {
    fn element(&self, name: &str) -> Element {
        Element::with_namespace(None, name, self.ns)
    }

    fn push_text(&self, parent: &mut Element, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            parent.push(self.element(name).with_text(value));
        }
    }

    fn push_date(&self, parent: &mut Element, name: &str, value: Option<&DateTime<Utc>>) {
        if let Some(value) = value {
            parent.push(self.element(name).with_text(&date::format_w3c(value)));
        }
    }

    /// Feed metadata, shared by `<feed>` and Atom 1.0 `<source>`
    fn feed_element(&self, feed: &Feed, name: &str) -> Element {
        let mut element = self.element(name);
        if let Some(base) = feed.xml_base.as_deref() {
            element.set_attribute("xml:base", base);
        }
        if let Some(language) = feed.language.as_deref() {
            element.set_attribute("xml:lang", language);
        }

        self.push_content(&mut element, "title", feed.title.as_ref());
        for link in feed.links() {
            element.push(self.link_element(link));
        }
        if self.legacy {
            self.push_content(&mut element, "tagline", feed.subtitle.as_ref());
        } else {
            self.push_content(&mut element, "subtitle", feed.subtitle.as_ref());
        }
        self.push_text(&mut element, "id", feed.id.as_deref());

        if let Some(generator) = &feed.generator {
            let mut generator_element = self
                .element("generator")
                .with_text(generator.value.as_deref().unwrap_or_default());
            if let Some(url) = generator.url.as_deref() {
                generator_element.set_attribute(if self.legacy { "url" } else { "uri" }, url);
            }
            if let Some(version) = generator.version.as_deref() {
                generator_element.set_attribute("version", version);
            }
            element.push(generator_element);
        }

        if self.legacy {
            self.push_text(&mut element, "copyright", feed.rights.as_deref());
            self.push_content(&mut element, "info", feed.info.as_ref());
            self.push_date(&mut element, "modified", feed.updated.as_ref());
        } else {
            self.push_text(&mut element, "rights", feed.rights.as_deref());
            self.push_text(&mut element, "icon", feed.icon.as_deref());
            self.push_text(&mut element, "logo", feed.logo.as_deref());
            self.push_date(&mut element, "updated", feed.updated.as_ref());
        }

        self.push_persons(&mut element, "author", &feed.authors);
        self.push_persons(&mut element, "contributor", &feed.contributors);
        if !self.legacy {
            for category in &feed.categories {
                element.push(self.category_element(category));
            }
        }

        module::generate_modules(&feed.modules, &mut element);
        for foreign in &feed.foreign_markup {
            element.push(foreign.clone());
        }
        element
    }

    fn entry_element(&self, entry: &Entry) -> Element {
        let mut element = self.element("entry");
        if let Some(base) = entry.xml_base.as_deref() {
            element.set_attribute("xml:base", base);
        }

        self.push_content(&mut element, "title", entry.title.as_ref());
        for link in entry.links() {
            element.push(self.link_element(link));
        }
        self.push_persons(&mut element, "author", &entry.authors);
        self.push_persons(&mut element, "contributor", &entry.contributors);
        self.push_text(&mut element, "id", entry.id.as_deref());

        if self.legacy {
            self.push_date(&mut element, "modified", entry.updated.as_ref());
            self.push_date(&mut element, "issued", entry.published.as_ref());
            self.push_date(&mut element, "created", entry.created.as_ref());
            self.push_text(&mut element, "copyright", entry.rights.as_deref());
        } else {
            self.push_date(&mut element, "updated", entry.updated.as_ref());
            self.push_date(&mut element, "published", entry.published.as_ref());
            self.push_text(&mut element, "rights", entry.rights.as_deref());
            for category in &entry.categories {
                element.push(self.category_element(category));
            }
            if let Some(source) = &entry.source {
                element.push(self.feed_element(source, "source"));
            }
        }

        self.push_content(&mut element, "summary", entry.summary.as_ref());
        for content in &entry.contents {
            self.push_content(&mut element, "content", Some(content));
        }

        module::generate_modules(&entry.modules, &mut element);
        for foreign in &entry.foreign_markup {
            element.push(foreign.clone());
        }
        element
    }

    fn link_element(&self, link: &Link) -> Element {
        let mut element = self.element("link");
        element.set_attribute("rel", link.rel.as_str());
        let attributes = [
            ("href", link.href.as_deref()),
            ("type", link.link_type.as_deref()),
            ("hreflang", link.hreflang.as_deref()),
            ("title", link.title.as_deref()),
        ];
        for (name, value) in attributes {
            if let Some(value) = value {
                element.set_attribute(name, value);
            }
        }
        if link.length > 0 {
            element.set_attribute("length", link.length.to_string());
        }
        element
    }

    fn push_persons(&self, parent: &mut Element, name: &str, persons: &[Person]) {
        for person in persons {
            let mut element = self.element(name);
            self.push_text(&mut element, "name", person.name.as_deref());
            self.push_text(
                &mut element,
                if self.legacy { "url" } else { "uri" },
                person.uri.as_deref(),
            );
            self.push_text(&mut element, "email", person.email.as_deref());
            parent.push(element);
        }
    }

    fn category_element(&self, category: &Category) -> Element {
        let mut element = self.element("category");
        let attributes = [
            ("term", category.term.as_deref()),
            ("scheme", category.scheme.as_deref()),
            ("label", category.label.as_deref()),
        ];
        for (name, value) in attributes {
            if let Some(value) = value {
                element.set_attribute(name, value);
            }
        }
        element
    }

    fn push_content(&self, parent: &mut Element, name: &str, content: Option<&Content>) {
        let Some(content) = content else {
            return;
        };

        let mut element = self.element(name);
        if let Some(content_type) = content.content_type.as_deref() {
            element.set_attribute("type", content_type);
        }
        if let Some(src) = content.src.as_deref() {
            element.set_attribute("src", src);
        }
        if self.legacy {
            if let Some(mode) = content.mode.as_deref() {
                element.set_attribute("mode", mode);
            }
        }

        let value = content.value.as_deref().unwrap_or_default();
        let base64 = if self.legacy {
            content.mode.as_deref() == Some(Content::BASE64)
        } else {
            content.is_binary()
        };
        if base64 {
            element.push_text(&STANDARD.encode(value.as_bytes()));
        } else if content.is_markup() {
            match xml::parse_fragment(value) {
                Ok(nodes) => element.children = nodes,
                Err(e) => {
                    warn!("Writing unparseable {} markup as text: {}", name, e);
                    element.push_text(value);
                }
            }
        } else if content.src.is_none() || !value.is_empty() {
            element.push_text(value);
        }
        parent.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn feed(feed_type: FeedType) -> Feed {
        let mut feed = Feed::new(feed_type);
        feed.title = Some(Content::new(Some(Content::TEXT), "Blog"));
        feed.subtitle = Some(Content::new(None, "About things"));
        feed.updated = Some(Utc.with_ymd_and_hms(2005, 7, 31, 12, 29, 29).unwrap());
        feed.alternate_links.push(Link::new("http://example.com/"));
        feed.entries.push(Entry {
            id: Some("urn:entry:1".to_string()),
            published: Some(Utc.with_ymd_and_hms(2005, 7, 30, 0, 0, 0).unwrap()),
            contents: vec![Content::new(Some(Content::XHTML), "<div xmlns=\"http://www.w3.org/1999/xhtml\"><p>Hi</p></div>")],
            ..Entry::default()
        });
        feed
    }

    #[test]
    fn test_generate_atom10() {
        let root = AtomGenerator.generate(&WireFeed::Atom(feed(FeedType::Atom10))).unwrap();
        assert!(root.is(Some(ATOM10_URI), "feed"));
        assert_eq!(root.child_text(Some(ATOM10_URI), "subtitle").as_deref(), Some("About things"));
        assert_eq!(
            root.child_text(Some(ATOM10_URI), "updated").as_deref(),
            Some("2005-07-31T12:29:29Z")
        );

        let entry = root.child(Some(ATOM10_URI), "entry").unwrap();
        assert!(entry.child(Some(ATOM10_URI), "published").is_some());
        let content = entry.child(Some(ATOM10_URI), "content").unwrap();
        assert!(content.child(Some("http://www.w3.org/1999/xhtml"), "div").is_some());
    }

    #[test]
    fn test_generate_atom03_names() {
        let root = AtomGenerator.generate(&WireFeed::Atom(feed(FeedType::Atom03))).unwrap();
        assert_eq!(root.attribute("version"), Some("0.3"));
        assert!(root.child(Some(ATOM03_URI), "tagline").is_some());
        assert!(root.child(Some(ATOM03_URI), "modified").is_some());

        let entry = root.child(Some(ATOM03_URI), "entry").unwrap();
        assert!(entry.child(Some(ATOM03_URI), "issued").is_some());
    }

    #[test]
    fn test_base64_content_is_encoded() {
        let mut feed = feed(FeedType::Atom10);
        feed.entries[0].contents = vec![Content {
            content_type: Some("application/octet-stream".to_string()),
            mode: Some(Content::BASE64.to_string()),
            src: None,
            value: Some("Hello".to_string()),
        }];

        let root = AtomGenerator.generate(&WireFeed::Atom(feed)).unwrap();
        let entry = root.child(Some(ATOM10_URI), "entry").unwrap();
        assert_eq!(entry.child_text(Some(ATOM10_URI), "content").as_deref(), Some("SGVsbG8="));
    }

    #[test]
    fn test_base64_mode_text_content_written_plain_in_atom10() {
        let mut feed = feed(FeedType::Atom10);
        feed.entries[0].contents = vec![Content {
            content_type: Some(Content::TEXT.to_string()),
            mode: Some(Content::BASE64.to_string()),
            src: None,
            value: Some("Hello".to_string()),
        }];

        let root = AtomGenerator.generate(&WireFeed::Atom(feed)).unwrap();
        let content = root
            .child(Some(ATOM10_URI), "entry")
            .and_then(|e| e.child(Some(ATOM10_URI), "content"))
            .unwrap();
        assert_eq!(content.text(), "Hello");
        assert_eq!(content.attribute("mode"), None);
    }
}
