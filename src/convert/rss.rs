//! RSS channel and item mapping

use tracing::trace;

use super::{check_type, Converter};
use crate::rss::{self, Channel, Guid, Item};
use crate::synd::{
    SyndCategory, SyndContent, SyndEnclosure, SyndEntry, SyndFeed, SyndImage,
};
use crate::wire::{FeedType, WireEntry, WireFeed};
use crate::{Result, SyndError};

/// Converter for one RSS version
#[derive(Debug, Clone, Copy)]
pub struct RssConverter {
    feed_type: FeedType,
}

impl RssConverter {
    pub const fn new(feed_type: FeedType) -> Self {
        Self { feed_type }
    }
}

impl Converter for RssConverter {
    fn feed_type(&self) -> FeedType {
        self.feed_type
    }

    fn copy_into(&self, wire: &WireFeed, feed: &mut SyndFeed, preserve: bool) -> Result<()> {
        check_type(self, wire)?;
        let channel = wire
            .as_rss()
            .ok_or_else(|| SyndError::UnsupportedFeedType(wire.feed_type().to_string()))?;

        feed.set_feed_type(Some(channel.feed_type));
        feed.set_encoding(channel.encoding.as_deref());
        // Modules first: the convenience setters below write into them
        feed.set_modules(channel.modules.clone());
        feed.set_foreign_markup(channel.foreign_markup.clone());
        feed.set_style_sheet(channel.style_sheet.as_deref());
        feed.set_uri(channel.uri.as_deref());
        feed.set_title(channel.title.as_deref());
        feed.set_link(channel.link.as_deref());
        if channel.description.is_some() {
            feed.set_description(channel.description.as_deref());
        }
        feed.set_image(channel.image.as_ref().map(|image| SyndImage {
            title: image.title.clone(),
            url: image.url.clone(),
            link: image.link.clone(),
            description: image.description.clone(),
            width: image.width,
            height: image.height,
        }));

        if channel.language.is_some() {
            feed.set_language(channel.language.as_deref());
        }
        if channel.copyright.is_some() {
            feed.set_copyright(channel.copyright.as_deref());
        }
        if channel.pub_date.is_some() {
            feed.set_published_date(channel.pub_date);
        }
        if let Some(editor) = channel.managing_editor.as_deref() {
            feed.set_managing_editor(Some(editor));
            if feed.author().is_none_or(str::is_empty) {
                feed.set_author(Some(editor));
            }
        }
        if !channel.categories.is_empty() {
            feed.set_categories(channel.categories.iter().map(synd_category).collect());
        }
        feed.set_docs(channel.docs.as_deref());
        feed.set_generator(channel.generator.as_deref());
        feed.set_web_master(channel.web_master.as_deref());

        let entries = channel
            .items
            .iter()
            .map(|item| {
                let mut entry = synd_entry(item);
                if preserve {
                    entry.set_wire_entry(Some(WireEntry::Item(item.clone())));
                }
                entry
            })
            .collect();
        feed.set_entries(entries);
        Ok(())
    }

    fn create_real_feed(&self, feed: &SyndFeed) -> Result<WireFeed> {
        let mut channel = Channel::new(self.feed_type);
        channel.encoding = feed.encoding().map(str::to_string);
        channel.style_sheet = feed.style_sheet().map(str::to_string);
        channel.uri = feed.uri().map(str::to_string);
        channel.title = feed.title().map(str::to_string);
        channel.link = feed
            .link()
            .or_else(|| feed.links().first().and_then(|l| l.href.as_deref()))
            .map(str::to_string);
        channel.description = feed.description().map(str::to_string);
        channel.image = feed.image().map(|image| rss::Image {
            title: image.title.clone(),
            url: image.url.clone(),
            link: image.link.clone(),
            width: image.width,
            height: image.height,
            description: image.description.clone(),
        });
        channel.language = feed.language().map(str::to_string);
        channel.copyright = feed.copyright().map(str::to_string);
        channel.pub_date = feed.published_date();
        channel.docs = feed.docs().map(str::to_string);
        channel.managing_editor = feed.managing_editor().map(str::to_string);
        channel.web_master = feed.web_master().map(str::to_string);
        channel.generator = feed.generator().map(str::to_string);
        channel.categories = feed.categories().iter().map(rss_category).collect();
        channel.modules = feed.modules().to_vec();
        channel.foreign_markup = feed.foreign_markup().to_vec();

        channel.items = feed
            .entries()
            .iter()
            .map(|entry| rss_item(entry, self.feed_type))
            .collect();

        trace!(
            "Created {} channel with {} items",
            self.feed_type,
            channel.items.len()
        );
        Ok(WireFeed::Rss(channel))
    }
}

fn synd_category(category: &rss::Category) -> SyndCategory {
    SyndCategory {
        name: category.value.clone(),
        taxonomy_uri: category.domain.clone(),
    }
}

fn rss_category(category: &SyndCategory) -> rss::Category {
    rss::Category {
        domain: category.taxonomy_uri.clone(),
        value: category.name.clone(),
    }
}

fn synd_entry(item: &Item) -> SyndEntry {
    let mut entry = SyndEntry::new();
    entry.set_modules(item.modules.clone());
    entry.set_foreign_markup(item.foreign_markup.clone());

    if item.title.is_some() {
        entry.set_title(item.title.as_deref());
    }
    entry.set_link(item.link.as_deref());

    let guid = item.guid.as_ref().and_then(|g| g.value.as_deref());
    entry.set_uri(item.uri.as_deref().or(guid).or(item.link.as_deref()));
    if entry.link().is_none() {
        if let Some(guid) = item.guid.as_ref().filter(|g| g.perma_link) {
            entry.set_link(guid.value.as_deref());
        }
    }

    entry.set_description(item.description.as_ref().map(|d| SyndContent {
        content_type: d.description_type.clone(),
        mode: None,
        value: d.value.clone(),
    }));
    if let Some(content) = &item.content {
        entry.contents_mut().push(SyndContent {
            content_type: content.content_type.clone(),
            mode: None,
            value: content.value.clone(),
        });
    }

    if item.pub_date.is_some() {
        entry.set_published_date(item.pub_date);
    }
    if item.author.is_some() {
        entry.set_author(item.author.as_deref());
    }

    entry.set_categories(item.categories.iter().map(synd_category).collect());
    entry.set_enclosures(
        item.enclosures
            .iter()
            .map(|e| SyndEnclosure {
                url: e.url.clone(),
                length: e.length,
                enclosure_type: e.enclosure_type.clone(),
            })
            .collect(),
    );
    entry.set_source(item.source.as_ref().map(|source| {
        let mut feed = SyndFeed::default();
        feed.set_title(source.value.as_deref());
        feed.set_link(source.url.as_deref());
        feed
    }));
    entry
}

fn rss_item(entry: &SyndEntry, feed_type: FeedType) -> Item {
    let link = entry
        .link()
        .or_else(|| entry.links().first().and_then(|l| l.href.as_deref()));

    let mut item = Item {
        title: entry.title().map(str::to_string),
        link: link.map(str::to_string),
        pub_date: entry.published_date(),
        modules: entry.modules().to_vec(),
        foreign_markup: entry.foreign_markup().to_vec(),
        ..Item::default()
    };

    if feed_type == FeedType::Rss10 {
        item.uri = entry.uri().map(str::to_string);
    }
    item.guid = entry.uri().map(|uri| Guid {
        value: Some(uri.to_string()),
        perma_link: Some(uri) == link,
    });

    item.description = entry.description().map(|d| rss::Description {
        description_type: d.content_type.clone(),
        value: d.value.clone(),
    });
    item.content = entry.contents().first().map(|c| rss::Content {
        content_type: Some(c.content_type.clone().unwrap_or_else(|| rss::Content::HTML.to_string())),
        value: c.value.clone(),
    });

    // Direct authors become the RSS author; a Dublin Core creator stays in
    // the module
    item.author = entry
        .authors()
        .first()
        .and_then(|p| p.email.clone().or_else(|| p.name.clone()));

    item.categories = entry.categories().iter().map(rss_category).collect();
    item.enclosures = entry
        .enclosures()
        .iter()
        .map(|e| rss::Enclosure {
            url: e.url.clone(),
            length: e.length,
            enclosure_type: e.enclosure_type.clone(),
        })
        .collect();
    item.source = entry.source().map(|source| rss::Source {
        url: source.link().map(str::to_string),
        value: source.title().map(str::to_string),
    });
    item
}
