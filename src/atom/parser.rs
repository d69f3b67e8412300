//! Atom document reader

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::types::{Category, Content, Entry, Feed, Generator, Link, Person};
use super::{ATOM03_URI, ATOM10_URI};
use crate::date;
use crate::io::WireFeedParser;
use crate::module;
use crate::synd::uri;
use crate::wire::{FeedType, WireFeed};
use crate::xml::{Document, Element, XML_URI};
use crate::{Result, SyndError};

/// Reads Atom 0.3 and 1.0 into a [`Feed`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomParser;

impl WireFeedParser for AtomParser {
    fn detect(&self, document: &Document) -> Option<FeedType> {
        let root = &document.root;
        if root.is(Some(ATOM10_URI), "feed") {
            Some(FeedType::Atom10)
        } else if root.is(Some(ATOM03_URI), "feed") {
            Some(FeedType::Atom03)
        } else {
            None
        }
    }

    fn parse(&self, document: &Document, feed_type: FeedType) -> Result<WireFeed> {
        let reader = match feed_type {
            FeedType::Atom10 => Reader {
                ns: ATOM10_URI,
                legacy: false,
            },
            FeedType::Atom03 => Reader {
                ns: ATOM03_URI,
                legacy: true,
            },
            other => return Err(SyndError::UnsupportedFeedType(other.to_string())),
        };

        let root = &document.root;
        if !root.is(Some(reader.ns), "feed") {
            return Err(SyndError::Xml(format!(
                "expected <feed> in {}, found <{}>",
                reader.ns,
                root.qualified_name()
            )));
        }

        let base = xml_base(root, None);
        let mut feed = reader.read_feed(root, base.as_deref(), feed_type);
        feed.entries = root
            .children_named(Some(reader.ns), "entry")
            .map(|e| reader.read_entry(e, base.as_deref(), feed_type))
            .collect();

        debug!("Parsed {} feed with {} entries", feed_type, feed.entries.len());
        Ok(WireFeed::Atom(feed))
    }
}

/// `xml:base` of `element` resolved against the base in scope
fn xml_base(element: &Element, inherited: Option<&str>) -> Option<String> {
    match element.attribute("xml:base") {
        Some(base) => Some(uri::resolve(inherited, base)),
        None => inherited.map(str::to_string),
    }
}

struct Reader {
    ns: &'static str,
    /// Atom 0.3 element names and content modes
    legacy: bool,
}

impl Reader {
    fn text(&self, element: &Element, name: &str) -> Option<String> {
        element.child_text(Some(self.ns), name)
    }

    fn date(&self, element: &Element, name: &str) -> Option<DateTime<Utc>> {
        self.text(element, name)
            .and_then(|d| date::parse_date_lenient(&d))
    }

    fn read_feed(&self, element: &Element, base: Option<&str>, feed_type: FeedType) -> Feed {
        let mut feed = Feed::new(feed_type);
        feed.xml_base = element.attribute("xml:base").map(str::to_string);
        feed.language = element.attribute("xml:lang").map(str::to_string);
        feed.id = self.text(element, "id");
        feed.title = self.construct(element, "title");
        feed.icon = self.text(element, "icon");
        feed.logo = self.text(element, "logo");
        feed.generator = element.child(Some(self.ns), "generator").map(|g| Generator {
            url: g
                .attribute(if self.legacy { "url" } else { "uri" })
                .map(str::to_string),
            version: g.attribute("version").map(str::to_string),
            value: Some(g.text().trim().to_string()),
        });

        if self.legacy {
            feed.subtitle = self.construct(element, "tagline");
            feed.rights = self.text(element, "copyright");
            feed.info = self.construct(element, "info");
            feed.updated = self.date(element, "modified");
        } else {
            feed.subtitle = self.construct(element, "subtitle");
            feed.rights = self.text(element, "rights");
            feed.updated = self.date(element, "updated");
        }

        (feed.alternate_links, feed.other_links) = self.links(element, base);
        feed.authors = self.persons(element, "author");
        feed.contributors = self.persons(element, "contributor");
        feed.categories = self.categories(element);
        feed.modules = module::parse_modules(element);
        feed.foreign_markup = self.foreign_children(element);
        feed
    }

    fn read_entry(&self, element: &Element, base: Option<&str>, feed_type: FeedType) -> Entry {
        let base = xml_base(element, base);
        let base = base.as_deref();

        let mut entry = Entry {
            xml_base: element.attribute("xml:base").map(str::to_string),
            id: self.text(element, "id"),
            title: self.construct(element, "title"),
            summary: self.construct(element, "summary"),
            contents: element
                .children_named(Some(self.ns), "content")
                .map(|c| self.content(c))
                .collect(),
            authors: self.persons(element, "author"),
            contributors: self.persons(element, "contributor"),
            categories: self.categories(element),
            modules: module::parse_modules(element),
            foreign_markup: self.foreign_children(element),
            ..Entry::default()
        };

        if self.legacy {
            entry.published = self.date(element, "issued");
            entry.updated = self.date(element, "modified");
            entry.created = self.date(element, "created");
            entry.rights = self.text(element, "copyright");
        } else {
            entry.published = self.date(element, "published");
            entry.updated = self.date(element, "updated");
            entry.rights = self.text(element, "rights");
            entry.source = element
                .child(Some(self.ns), "source")
                .map(|s| Box::new(self.read_feed(s, base, feed_type)));
        }

        (entry.alternate_links, entry.other_links) = self.links(element, base);
        entry
    }

    /// Alternate links and all other links, in document order
    fn links(&self, element: &Element, base: Option<&str>) -> (Vec<Link>, Vec<Link>) {
        element
            .children_named(Some(self.ns), "link")
            .map(|l| {
                let href = l.attribute("href").map(str::to_string);
                let link_base = xml_base(l, base);
                let href_resolved = href
                    .as_deref()
                    .map(|h| uri::resolve(link_base.as_deref(), h))
                    .filter(|resolved| Some(resolved) != href.as_ref());
                Link {
                    href,
                    href_resolved,
                    rel: l.attribute("rel").unwrap_or(Link::ALTERNATE).to_string(),
                    link_type: l.attribute("type").map(str::to_string),
                    hreflang: l.attribute("hreflang").map(str::to_string),
                    title: l.attribute("title").map(str::to_string),
                    length: l
                        .attribute("length")
                        .and_then(|len| len.trim().parse().ok())
                        .unwrap_or(0),
                }
            })
            .partition(Link::is_alternate)
    }

    fn persons(&self, element: &Element, name: &str) -> Vec<Person> {
        element
            .children_named(Some(self.ns), name)
            .map(|p| Person {
                name: self.text(p, "name"),
                uri: self.text(p, if self.legacy { "url" } else { "uri" }),
                email: self.text(p, "email"),
            })
            .collect()
    }

    fn categories(&self, element: &Element) -> Vec<Category> {
        element
            .children_named(Some(self.ns), "category")
            .map(|c| Category {
                term: c.attribute("term").map(str::to_string),
                scheme: c.attribute("scheme").map(str::to_string),
                label: c.attribute("label").map(str::to_string),
            })
            .collect()
    }

    fn construct(&self, element: &Element, name: &str) -> Option<Content> {
        element.child(Some(self.ns), name).map(|c| self.content(c))
    }

    fn content(&self, element: &Element) -> Content {
        let mut content = Content {
            content_type: element.attribute("type").map(str::to_string),
            mode: element.attribute("mode").map(str::to_string),
            src: element.attribute("src").map(str::to_string),
            value: None,
        };

        if !self.legacy && content.is_binary() {
            content.mode = Some(Content::BASE64.to_string());
        }

        content.value = match content.mode.as_deref() {
            Some(Content::BASE64) => Some(decode_base64(&element.text())),
            _ if content.is_markup() => match element.inner_xml() {
                Ok(markup) => Some(markup.trim().to_string()),
                Err(e) => {
                    warn!("Falling back to text for <{}>: {}", element.name, e);
                    Some(element.text())
                }
            },
            _ => Some(element.text()),
        };
        content
    }

    /// Children outside the Atom namespace that no module reader consumes
    fn foreign_children(&self, element: &Element) -> Vec<Element> {
        element
            .elements()
            .filter(|child| match child.namespace.as_deref() {
                None => true,
                Some(uri) => uri != self.ns && uri != XML_URI && !module::is_module_namespace(uri),
            })
            .cloned()
            .collect()
    }
}

fn decode_base64(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("Keeping undecodable base64 content: {}", e);
            text.to_string()
        }
    }
}
