//! RSS document reader

use tracing::{debug, trace, warn};

use super::types::{
    Category, Channel, Cloud, Content, Description, Enclosure, Guid, Image, Item, Source,
    TextInput,
};
use super::{CONTENT_URI, NETSCAPE_PUBLIC_ID, RDF_URI, RSS090_URI, RSS10_URI};
use crate::date;
use crate::io::WireFeedParser;
use crate::module;
use crate::wire::{FeedType, WireFeed};
use crate::xml::{Document, Element};
use crate::{Result, SyndError};

/// Reads every RSS version into a [`Channel`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RssParser;

impl WireFeedParser for RssParser {
    fn detect(&self, document: &Document) -> Option<FeedType> {
        let root = &document.root;

        if root.is(Some(RDF_URI), "RDF") {
            // The RSS namespace is the default namespace of channel and items
            return root.elements().find_map(|e| match e.namespace.as_deref() {
                Some(RSS10_URI) => Some(FeedType::Rss10),
                Some(RSS090_URI) => Some(FeedType::Rss090),
                _ => None,
            });
        }

        if !root.is(None, "rss") {
            return None;
        }

        let version = root.attribute("version")?.trim();
        match version {
            "0.91" => {
                let netscape = document
                    .doctype
                    .as_deref()
                    .is_some_and(|d| d.contains(NETSCAPE_PUBLIC_ID) || d.contains("Netscape"));
                if netscape {
                    Some(FeedType::Rss091Netscape)
                } else {
                    Some(FeedType::Rss091Userland)
                }
            }
            "0.92" => Some(FeedType::Rss092),
            "0.93" => Some(FeedType::Rss093),
            "0.94" => Some(FeedType::Rss094),
            v if v.starts_with("2.") => Some(FeedType::Rss20),
            other => {
                debug!("Unknown RSS version '{}'", other);
                None
            }
        }
    }

    fn parse(&self, document: &Document, feed_type: FeedType) -> Result<WireFeed> {
        let channel = match feed_type {
            FeedType::Rss090 => parse_rdf(&document.root, feed_type, RSS090_URI)?,
            FeedType::Rss10 => parse_rdf(&document.root, feed_type, RSS10_URI)?,
            t if t.is_rss() => parse_rss(&document.root, feed_type)?,
            other => return Err(SyndError::UnsupportedFeedType(other.to_string())),
        };

        debug!(
            "Parsed {} channel with {} items",
            feed_type,
            channel.items.len()
        );
        Ok(WireFeed::Rss(channel))
    }
}

/// RSS 0.90 and 1.0: channel, image, textinput and items are siblings
fn parse_rdf(root: &Element, feed_type: FeedType, ns: &'static str) -> Result<Channel> {
    let element = root
        .child(Some(ns), "channel")
        .ok_or_else(|| SyndError::Xml(format!("{} document without <channel>", feed_type)))?;

    let mut channel = Channel::new(feed_type);
    read_channel(element, Some(ns), &mut channel);
    channel.uri = element.attribute("rdf:about").map(str::to_string);

    channel.image = root.child(Some(ns), "image").map(|e| read_image(e, Some(ns)));
    channel.text_input = root
        .child(Some(ns), "textinput")
        .map(|e| read_text_input(e, Some(ns)));
    channel.items = root
        .children_named(Some(ns), "item")
        .map(|e| read_item(e, Some(ns)))
        .collect();

    // Foreign elements may live beside the channel as well as inside it
    channel
        .foreign_markup
        .extend(foreign_children(root, Some(ns)));
    Ok(channel)
}

/// `<rss version>` family: everything nests under `<channel>`
fn parse_rss(root: &Element, feed_type: FeedType) -> Result<Channel> {
    let element = root
        .child(None, "channel")
        .ok_or_else(|| SyndError::Xml(format!("{} document without <channel>", feed_type)))?;

    let mut channel = Channel::new(feed_type);
    read_channel(element, None, &mut channel);

    channel.image = element.child(None, "image").map(|e| read_image(e, None));
    channel.text_input = element
        .child(None, "textInput")
        .or_else(|| element.child(None, "textinput"))
        .map(|e| read_text_input(e, None));
    channel.items = element
        .children_named(None, "item")
        .map(|e| read_item(e, None))
        .collect();
    Ok(channel)
}

fn read_channel(element: &Element, ns: Option<&str>, channel: &mut Channel) {
    channel.title = element.child_text(ns, "title");
    channel.link = element.child_text(ns, "link");
    channel.description = element.child_text(ns, "description");
    channel.language = element.child_text(ns, "language");
    channel.rating = element.child_text(ns, "rating");
    channel.copyright = element.child_text(ns, "copyright");
    channel.pub_date = read_date(element, ns, "pubDate");
    channel.last_build_date = read_date(element, ns, "lastBuildDate");
    channel.docs = element.child_text(ns, "docs");
    channel.managing_editor = element.child_text(ns, "managingEditor");
    channel.web_master = element.child_text(ns, "webMaster");
    channel.generator = element.child_text(ns, "generator");
    channel.ttl = element
        .child_text(ns, "ttl")
        .and_then(|ttl| parse_number(&ttl, "ttl"));

    if let Some(hours) = element.child(ns, "skipHours") {
        channel.skip_hours = hours
            .children_named(ns, "hour")
            .filter_map(|h| parse_number(h.text().trim(), "hour"))
            .collect();
    }
    if let Some(days) = element.child(ns, "skipDays") {
        channel.skip_days = days
            .children_named(ns, "day")
            .map(|d| d.text().trim().to_string())
            .collect();
    }

    channel.cloud = element.child(ns, "cloud").map(|cloud| Cloud {
        domain: cloud.attribute("domain").map(str::to_string),
        port: cloud
            .attribute("port")
            .and_then(|port| parse_number(port, "cloud port")),
        path: cloud.attribute("path").map(str::to_string),
        register_procedure: cloud.attribute("registerProcedure").map(str::to_string),
        protocol: cloud.attribute("protocol").map(str::to_string),
    });
    channel.categories = read_categories(element, ns);

    channel.modules = module::parse_modules(element);
    channel.foreign_markup = foreign_children(element, ns);
}

fn read_image(element: &Element, ns: Option<&str>) -> Image {
    Image {
        title: element.child_text(ns, "title"),
        url: element.child_text(ns, "url"),
        link: element.child_text(ns, "link"),
        width: element
            .child_text(ns, "width")
            .and_then(|w| parse_number(&w, "image width")),
        height: element
            .child_text(ns, "height")
            .and_then(|h| parse_number(&h, "image height")),
        description: element.child_text(ns, "description"),
    }
}

fn read_text_input(element: &Element, ns: Option<&str>) -> TextInput {
    TextInput {
        title: element.child_text(ns, "title"),
        description: element.child_text(ns, "description"),
        name: element.child_text(ns, "name"),
        link: element.child_text(ns, "link"),
    }
}

fn read_item(element: &Element, ns: Option<&str>) -> Item {
    let mut item = Item {
        title: element.child_text(ns, "title"),
        link: element.child_text(ns, "link"),
        uri: element.attribute("rdf:about").map(str::to_string),
        comments: element.child_text(ns, "comments"),
        author: element.child_text(ns, "author"),
        pub_date: read_date(element, ns, "pubDate"),
        expiration_date: read_date(element, ns, "expirationDate"),
        categories: read_categories(element, ns),
        ..Item::default()
    };

    item.description = element.child(ns, "description").map(|d| Description {
        description_type: d.attribute("type").map(str::to_string),
        value: Some(d.text().trim().to_string()),
    });
    item.content = element.child(Some(CONTENT_URI), "encoded").map(|c| Content {
        content_type: Some(Content::HTML.to_string()),
        value: Some(c.text()),
    });
    item.source = element.child(ns, "source").map(|s| Source {
        url: s.attribute("url").map(str::to_string),
        value: Some(s.text().trim().to_string()),
    });
    item.enclosures = element
        .children_named(ns, "enclosure")
        .map(|e| Enclosure {
            url: e.attribute("url").map(str::to_string),
            length: e
                .attribute("length")
                .and_then(|l| parse_number(l, "enclosure length"))
                .unwrap_or(0),
            enclosure_type: e.attribute("type").map(str::to_string),
        })
        .collect();
    item.guid = element.child(ns, "guid").map(|g| Guid {
        value: Some(g.text().trim().to_string()),
        perma_link: !g
            .attribute("isPermaLink")
            .is_some_and(|p| p.trim().eq_ignore_ascii_case("false")),
    });

    item.modules = module::parse_modules(element);
    item.foreign_markup = foreign_children(element, ns);
    trace!("Parsed item {:?}", item.title);
    item
}

fn read_categories(element: &Element, ns: Option<&str>) -> Vec<Category> {
    element
        .children_named(ns, "category")
        .map(|c| Category {
            domain: c.attribute("domain").map(str::to_string),
            value: Some(c.text().trim().to_string()),
        })
        .collect()
}

fn read_date(element: &Element, ns: Option<&str>, name: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    element
        .child_text(ns, name)
        .and_then(|d| date::parse_date_lenient(&d))
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Ignoring {} '{}': {}", what, value, e);
            None
        }
    }
}

/// Namespaced children that no RSS or module reader consumes
fn foreign_children(element: &Element, ns: Option<&str>) -> Vec<Element> {
    element
        .elements()
        .filter(|child| match child.namespace.as_deref() {
            None => false,
            Some(uri) => {
                Some(uri) != ns
                    && uri != RDF_URI
                    && uri != CONTENT_URI
                    && !module::is_module_namespace(uri)
            }
        })
        .cloned()
        .collect()
}
