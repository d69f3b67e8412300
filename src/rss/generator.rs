//! RSS document writer

use tracing::debug;

use super::types::{Channel, Image, Item, TextInput};
use super::{
    CONTENT_PREFIX, CONTENT_URI, NETSCAPE_DOCTYPE, RDF_URI, RSS090_URI, RSS10_URI,
};
use crate::date;
use crate::io::WireFeedGenerator;
use crate::module;
use crate::wire::{FeedType, WireFeed};
use crate::xml::Element;
use crate::{Result, SyndError};

/// Writes a [`Channel`] in the layout of its feed type
#[derive(Debug, Clone, Copy, Default)]
pub struct RssGenerator;

impl WireFeedGenerator for RssGenerator {
    fn supports(&self, feed_type: FeedType) -> bool {
        feed_type.is_rss()
    }

    fn generate(&self, feed: &WireFeed) -> Result<Element> {
        let channel = feed
            .as_rss()
            .ok_or_else(|| SyndError::UnsupportedFeedType(feed.feed_type().to_string()))?;

        debug!(
            "Generating {} document with {} items",
            channel.feed_type,
            channel.items.len()
        );
        match channel.feed_type {
            FeedType::Rss090 => Ok(generate_rdf(channel, RSS090_URI)),
            FeedType::Rss10 => Ok(generate_rdf(channel, RSS10_URI)),
            t if t.is_rss() => Ok(generate_rss(channel)),
            other => Err(SyndError::UnsupportedFeedType(other.to_string())),
        }
    }

    fn doctype(&self, feed_type: FeedType) -> Option<&'static str> {
        (feed_type == FeedType::Rss091Netscape).then_some(NETSCAPE_DOCTYPE)
    }
}

/// Position of a `<rss version>` feed type in version order
///
/// Fields introduced by a version are written for that version and every
/// later one.
fn rank(feed_type: FeedType) -> u8 {
    match feed_type {
        FeedType::Rss091Netscape | FeedType::Rss091Userland => 1,
        FeedType::Rss092 => 2,
        FeedType::Rss093 => 3,
        FeedType::Rss094 => 4,
        FeedType::Rss20 => 5,
        _ => 0,
    }
}

fn push_text(parent: &mut Element, ns: Option<&str>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        parent.push(empty(ns, name).with_text(value));
    }
}

fn generate_rdf(channel: &Channel, ns: &'static str) -> Element {
    let rss10 = ns == RSS10_URI;
    let ns = Some(ns);
    let mut root = Element::with_namespace(Some("rdf"), "RDF", RDF_URI);

    let mut element = empty(ns, "channel");
    if rss10 {
        if let Some(uri) = channel.uri.as_deref().or(channel.link.as_deref()) {
            element.set_attribute("rdf:about", uri);
        }
    }
    push_text(&mut element, ns, "title", channel.title.as_deref());
    push_text(&mut element, ns, "link", channel.link.as_deref());
    push_text(&mut element, ns, "description", channel.description.as_deref());

    if rss10 {
        if let Some(image) = channel.image.as_ref().and_then(|i| i.url.as_deref()) {
            element.push(empty(ns, "image").with_attribute("rdf:resource", image));
        }
        let mut sequence = Element::with_namespace(Some("rdf"), "Seq", RDF_URI);
        for item in &channel.items {
            if let Some(about) = item_about(item) {
                sequence.push(Element::with_namespace(Some("rdf"), "li", RDF_URI).with_attribute("rdf:resource", about));
            }
        }
        let mut items = empty(ns, "items");
        items.push(sequence);
        element.push(items);

        if let Some(link) = channel.text_input.as_ref().and_then(|t| t.link.as_deref()) {
            element.push(empty(ns, "textinput").with_attribute("rdf:resource", link));
        }
    }
    module::generate_modules(&channel.modules, &mut element);
    push_foreign(&mut element, &channel.foreign_markup);
    root.push(element);

    if let Some(image) = &channel.image {
        root.push(image_element(image, ns, rss10));
    }
    for item in &channel.items {
        root.push(rdf_item(item, ns, rss10));
    }
    if let Some(text_input) = &channel.text_input {
        root.push(text_input_element(text_input, ns, "textinput", rss10));
    }
    root
}

fn item_about(item: &Item) -> Option<&str> {
    item.uri.as_deref().or(item.link.as_deref())
}

fn rdf_item(item: &Item, ns: Option<&str>, rss10: bool) -> Element {
    let mut element = empty(ns, "item");
    if rss10 {
        if let Some(about) = item_about(item) {
            element.set_attribute("rdf:about", about);
        }
    }
    push_text(&mut element, ns, "title", item.title.as_deref());
    push_text(&mut element, ns, "link", item.link.as_deref());
    if rss10 {
        push_text(
            &mut element,
            ns,
            "description",
            item.description.as_ref().and_then(|d| d.value.as_deref()),
        );
        push_content(&mut element, item);
    }
    module::generate_modules(&item.modules, &mut element);
    push_foreign(&mut element, &item.foreign_markup);
    element
}

fn generate_rss(channel: &Channel) -> Element {
    let rank = rank(channel.feed_type);
    let mut root = Element::new("rss");
    if let Some(version) = channel.feed_type.rss_version() {
        root.set_attribute("version", version);
    }

    let mut element = Element::new("channel");
    push_text(&mut element, None, "title", channel.title.as_deref());
    push_text(&mut element, None, "link", channel.link.as_deref());
    push_text(&mut element, None, "description", channel.description.as_deref());
    push_text(&mut element, None, "language", channel.language.as_deref());
    push_text(&mut element, None, "rating", channel.rating.as_deref());
    push_text(&mut element, None, "copyright", channel.copyright.as_deref());
    push_date(&mut element, "pubDate", channel.pub_date.as_ref());
    push_date(&mut element, "lastBuildDate", channel.last_build_date.as_ref());
    push_text(&mut element, None, "docs", channel.docs.as_deref());
    push_text(&mut element, None, "managingEditor", channel.managing_editor.as_deref());
    push_text(&mut element, None, "webMaster", channel.web_master.as_deref());

    if let Some(image) = &channel.image {
        element.push(image_element(image, None, false));
    }
    if let Some(text_input) = &channel.text_input {
        element.push(text_input_element(text_input, None, "textInput", false));
    }

    if !channel.skip_hours.is_empty() {
        let mut hours = Element::new("skipHours");
        for hour in &channel.skip_hours {
            hours.push(Element::new("hour").with_text(&hour.to_string()));
        }
        element.push(hours);
    }
    if !channel.skip_days.is_empty() {
        let mut days = Element::new("skipDays");
        for day in &channel.skip_days {
            days.push(Element::new("day").with_text(day));
        }
        element.push(days);
    }

    if rank >= 2 {
        if let Some(cloud) = &channel.cloud {
            let mut cloud_element = Element::new("cloud");
            let port = cloud.port.map(|p| p.to_string());
            let attributes = [
                ("domain", cloud.domain.as_deref()),
                ("port", port.as_deref()),
                ("path", cloud.path.as_deref()),
                ("registerProcedure", cloud.register_procedure.as_deref()),
                ("protocol", cloud.protocol.as_deref()),
            ];
            for (name, value) in attributes {
                if let Some(value) = value {
                    cloud_element.set_attribute(name, value);
                }
            }
            element.push(cloud_element);
        }
        for category in &channel.categories {
            element.push(category_element(category));
        }
    }
    if rank >= 4 {
        push_text(&mut element, None, "generator", channel.generator.as_deref());
        if let Some(ttl) = channel.ttl {
            element.push(Element::new("ttl").with_text(&ttl.to_string()));
        }
    }

    module::generate_modules(&channel.modules, &mut element);
    push_foreign(&mut element, &channel.foreign_markup);

    for item in &channel.items {
        element.push(rss_item(item, rank));
    }
    root.push(element);
    root
}

fn rss_item(item: &Item, rank: u8) -> Element {
    let mut element = Element::new("item");
    push_text(&mut element, None, "title", item.title.as_deref());
    push_text(&mut element, None, "link", item.link.as_deref());

    if let Some(description) = &item.description {
        if let Some(value) = description.value.as_deref() {
            let mut description_element = Element::new("description").with_text(value);
            if (3..=4).contains(&rank) {
                if let Some(description_type) = description.description_type.as_deref() {
                    description_element.set_attribute("type", description_type);
                }
            }
            element.push(description_element);
        }
    }

    if rank >= 2 {
        if let Some(source) = &item.source {
            let mut source_element = Element::new("source").with_text(source.value.as_deref().unwrap_or_default());
            if let Some(url) = source.url.as_deref() {
                source_element.set_attribute("url", url);
            }
            element.push(source_element);
        }
        for enclosure in &item.enclosures {
            let mut enclosure_element = Element::new("enclosure");
            if let Some(url) = enclosure.url.as_deref() {
                enclosure_element.set_attribute("url", url);
            }
            enclosure_element.set_attribute("length", enclosure.length.to_string());
            if let Some(enclosure_type) = enclosure.enclosure_type.as_deref() {
                enclosure_element.set_attribute("type", enclosure_type);
            }
            element.push(enclosure_element);
        }
        for category in &item.categories {
            element.push(category_element(category));
        }
    }
    if rank >= 3 {
        push_date(&mut element, "pubDate", item.pub_date.as_ref());
    }
    if (3..=4).contains(&rank) {
        push_date(&mut element, "expirationDate", item.expiration_date.as_ref());
    }
    if rank >= 4 {
        if let Some(guid) = &item.guid {
            let mut guid_element = Element::new("guid").with_text(guid.value.as_deref().unwrap_or_default());
            if !guid.perma_link {
                guid_element.set_attribute("isPermaLink", "false");
            }
            element.push(guid_element);
        }
        push_text(&mut element, None, "comments", item.comments.as_deref());
        push_text(&mut element, None, "author", item.author.as_deref());
        push_content(&mut element, item);
    }

    module::generate_modules(&item.modules, &mut element);
    push_foreign(&mut element, &item.foreign_markup);
    element
}

fn push_content(element: &mut Element, item: &Item) {
    if let Some(value) = item.content.as_ref().and_then(|c| c.value.as_deref()) {
        element.push(Element::with_namespace(Some(CONTENT_PREFIX), "encoded", CONTENT_URI).with_text(value));
    }
}

fn push_date(element: &mut Element, name: &str, value: Option<&chrono::DateTime<chrono::Utc>>) {
    if let Some(value) = value {
        element.push(Element::new(name).with_text(&date::format_rfc822(value)));
    }
}

fn category_element(category: &super::Category) -> Element {
    let mut element = Element::new("category").with_text(category.value.as_deref().unwrap_or_default());
    if let Some(domain) = category.domain.as_deref() {
        element.set_attribute("domain", domain);
    }
    element
}

fn image_element(image: &Image, ns: Option<&str>, rss10: bool) -> Element {
    let mut element = empty(ns, "image");
    if rss10 {
        if let Some(url) = image.url.as_deref() {
            element.set_attribute("rdf:about", url);
        }
    }
    push_text(&mut element, ns, "title", image.title.as_deref());
    push_text(&mut element, ns, "url", image.url.as_deref());
    push_text(&mut element, ns, "link", image.link.as_deref());
    if ns.is_none() {
        if let Some(width) = image.width {
            element.push(Element::new("width").with_text(&width.to_string()));
        }
        if let Some(height) = image.height {
            element.push(Element::new("height").with_text(&height.to_string()));
        }
        push_text(&mut element, None, "description", image.description.as_deref());
    }
    element
}

fn text_input_element(text_input: &TextInput, ns: Option<&str>, name: &str, rss10: bool) -> Element {
    let mut element = empty(ns, name);
    if rss10 {
        if let Some(link) = text_input.link.as_deref() {
            element.set_attribute("rdf:about", link);
        }
    }
    push_text(&mut element, ns, "title", text_input.title.as_deref());
    push_text(&mut element, ns, "description", text_input.description.as_deref());
    push_text(&mut element, ns, "name", text_input.name.as_deref());
    push_text(&mut element, ns, "link", text_input.link.as_deref());
    element
}

fn empty(ns: Option<&str>, name: &str) -> Element {
    let mut element = Element::new(name);
    element.namespace = ns.map(str::to_string);
    element
}

fn push_foreign(element: &mut Element, markup: &[Element]) {
    for foreign in markup {
        element.push(foreign.clone());
    }
}
