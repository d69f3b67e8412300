//! Atom feed and entry mapping

use tracing::trace;

use super::{check_type, Converter};
use crate::atom::{self, Content, Entry, Feed, Link, Person};
use crate::synd::{
    SyndCategory, SyndContent, SyndEnclosure, SyndEntry, SyndFeed, SyndImage, SyndLink,
    SyndPerson,
};
use crate::wire::{FeedType, WireEntry, WireFeed};
use crate::{Result, SyndError};

/// Atom 1.0 text construct types and the MIME types the synd model uses
const TEXT_TYPES: [(&str, &str); 3] = [
    (Content::TEXT, "text/plain"),
    (Content::HTML, "text/html"),
    (Content::XHTML, "application/xhtml+xml"),
];

/// Converter for one Atom version
#[derive(Debug, Clone, Copy)]
pub struct AtomConverter {
    feed_type: FeedType,
}

impl AtomConverter {
    pub const fn new(feed_type: FeedType) -> Self {
        Self { feed_type }
    }

    fn synd_content(&self, content: &Content) -> SyndContent {
        let content_type = content.content_type.as_deref().map(|t| {
            TEXT_TYPES
                .iter()
                .find(|(atom, _)| *atom == t)
                .map_or(t, |(_, mime)| *mime)
                .to_string()
        });
        SyndContent {
            content_type,
            mode: content.mode.clone(),
            value: content.value.clone(),
        }
    }

    fn atom_content(&self, content: &SyndContent) -> Content {
        let content_type = content.content_type.as_deref().map(|t| {
            let mapped = match self.feed_type {
                FeedType::Atom10 => TEXT_TYPES
                    .iter()
                    .find(|(_, mime)| *mime == t)
                    .map(|(atom, _)| *atom),
                _ => None,
            };
            mapped.unwrap_or(t).to_string()
        });
        Content {
            content_type,
            mode: content.mode.clone(),
            src: None,
            value: content.value.clone(),
        }
    }

    fn synd_feed(&self, atom: &Feed, feed: &mut SyndFeed, preserve: bool) {
        feed.set_feed_type(Some(atom.feed_type));
        feed.set_encoding(atom.encoding.as_deref());
        feed.set_modules(atom.modules.clone());
        feed.set_foreign_markup(atom.foreign_markup.clone());

        feed.set_uri(atom.id.as_deref());
        feed.set_title_ex(atom.title.as_ref().map(|t| self.synd_content(t)));
        feed.set_description_ex(atom.subtitle.as_ref().map(|s| self.synd_content(s)));
        feed.set_links(atom.links().map(synd_link).collect());
        feed.set_link(
            atom.alternate_links
                .first()
                .and_then(Link::href_resolved),
        );
        feed.set_generator(atom.generator.as_ref().and_then(|g| g.value.as_deref()));
        feed.set_image(atom.logo.as_ref().or(atom.icon.as_ref()).map(|url| SyndImage {
            url: Some(url.clone()),
            ..SyndImage::default()
        }));

        if atom.rights.is_some() {
            feed.set_copyright(atom.rights.as_deref());
        }
        if atom.language.is_some() {
            feed.set_language(atom.language.as_deref());
        }
        if atom.updated.is_some() {
            feed.set_published_date(atom.updated);
        }
        if !atom.categories.is_empty() {
            feed.set_categories(atom.categories.iter().map(synd_category).collect());
        }
        feed.set_authors(atom.authors.iter().map(synd_person).collect());
        feed.set_contributors(atom.contributors.iter().map(synd_person).collect());

        let entries = atom
            .entries
            .iter()
            .map(|e| {
                let mut entry = self.synd_entry(e);
                if preserve {
                    entry.set_wire_entry(Some(WireEntry::Entry(e.clone())));
                }
                entry
            })
            .collect();
        feed.set_entries(entries);
    }

    fn synd_entry(&self, atom: &Entry) -> SyndEntry {
        let mut entry = SyndEntry::new();
        entry.set_modules(atom.modules.clone());
        entry.set_foreign_markup(atom.foreign_markup.clone());

        entry.set_uri(atom.id.as_deref());
        entry.set_title_ex(atom.title.as_ref().map(|t| self.synd_content(t)));
        entry.set_description(atom.summary.as_ref().map(|s| self.synd_content(s)));
        entry.set_contents(atom.contents.iter().map(|c| self.synd_content(c)).collect());

        let (enclosures, links): (Vec<&Link>, Vec<&Link>) =
            atom.links().partition(|l| l.rel == Link::ENCLOSURE);
        entry.set_links(links.into_iter().map(synd_link).collect());
        entry.set_enclosures(
            enclosures
                .into_iter()
                .map(|l| SyndEnclosure {
                    url: l.href_resolved().map(str::to_string),
                    length: l.length,
                    enclosure_type: l.link_type.clone(),
                })
                .collect(),
        );
        entry.set_link(
            atom.alternate_links
                .first()
                .and_then(Link::href_resolved),
        );

        if atom.published.is_some() {
            entry.set_published_date(atom.published);
        }
        entry.set_updated_date(atom.updated);
        entry.set_authors(atom.authors.iter().map(synd_person).collect());
        entry.set_contributors(atom.contributors.iter().map(synd_person).collect());
        entry.set_categories(atom.categories.iter().map(synd_category).collect());

        entry.set_source(atom.source.as_deref().map(|source| {
            let mut feed = SyndFeed::default();
            self.synd_feed(source, &mut feed, false);
            feed
        }));
        entry
    }

    fn atom_feed(&self, feed: &SyndFeed) -> Feed {
        let mut atom = Feed::new(self.feed_type);
        atom.encoding = feed.encoding().map(str::to_string);
        atom.id = feed.uri().map(str::to_string);
        atom.title = feed.title_ex().map(|t| self.atom_content(t));
        atom.subtitle = feed.description_ex().map(|d| self.atom_content(d));
        atom.rights = feed.copyright().map(str::to_string);
        atom.language = feed.language().map(str::to_string);
        atom.updated = feed.published_date();
        atom.generator = feed.generator().map(|g| atom::Generator {
            value: Some(g.to_string()),
            ..atom::Generator::default()
        });
        atom.logo = feed.image().and_then(|i| i.url.clone());

        (atom.alternate_links, atom.other_links) = atom_links(feed.links(), feed.link());
        atom.authors = feed.authors().iter().map(atom_person).collect();
        if atom.authors.is_empty() {
            if let Some(author) = feed.author().filter(|a| !a.is_empty()) {
                atom.authors.push(Person {
                    name: Some(author.to_string()),
                    ..Person::default()
                });
            }
        }
        atom.contributors = feed.contributors().iter().map(atom_person).collect();
        atom.categories = feed.categories().iter().map(atom_category).collect();
        atom.modules = feed.modules().to_vec();
        atom.foreign_markup = feed.foreign_markup().to_vec();
        atom
    }

    fn atom_entry(&self, entry: &SyndEntry) -> Entry {
        let mut atom = Entry {
            id: entry.uri().map(str::to_string),
            title: entry.title_ex().map(|t| self.atom_content(t)),
            summary: entry.description().map(|d| self.atom_content(d)),
            contents: entry.contents().iter().map(|c| self.atom_content(c)).collect(),
            published: entry.published_date(),
            updated: entry.updated_date(),
            contributors: entry.contributors().iter().map(atom_person).collect(),
            categories: entry.categories().iter().map(atom_category).collect(),
            modules: entry.modules().to_vec(),
            foreign_markup: entry.foreign_markup().to_vec(),
            ..Entry::default()
        };

        (atom.alternate_links, atom.other_links) = atom_links(entry.links(), entry.link());
        atom.other_links
            .extend(entry.enclosures().iter().map(|e| Link {
                href: e.url.clone(),
                rel: Link::ENCLOSURE.to_string(),
                link_type: e.enclosure_type.clone(),
                length: e.length,
                ..Link::default()
            }));

        atom.authors = entry.authors().iter().map(atom_person).collect();
        if atom.authors.is_empty() {
            let author = entry.author();
            if !author.is_empty() {
                atom.authors.push(Person {
                    name: Some(author),
                    ..Person::default()
                });
            }
        }

        if self.feed_type == FeedType::Atom10 {
            atom.source = entry.source().map(|s| Box::new(self.atom_feed(s)));
        }
        atom
    }
}

impl Converter for AtomConverter {
    fn feed_type(&self) -> FeedType {
        self.feed_type
    }

    fn copy_into(&self, wire: &WireFeed, feed: &mut SyndFeed, preserve: bool) -> Result<()> {
        check_type(self, wire)?;
        let atom = wire
            .as_atom()
            .ok_or_else(|| SyndError::UnsupportedFeedType(wire.feed_type().to_string()))?;
        self.synd_feed(atom, feed, preserve);
        Ok(())
    }

    fn create_real_feed(&self, feed: &SyndFeed) -> Result<WireFeed> {
        let mut atom = self.atom_feed(feed);
        atom.entries = feed.entries().iter().map(|e| self.atom_entry(e)).collect();
        trace!(
            "Created {} feed with {} entries",
            self.feed_type,
            atom.entries.len()
        );
        Ok(WireFeed::Atom(atom))
    }
}

fn synd_link(link: &Link) -> SyndLink {
    SyndLink {
        href: link.href_resolved().map(str::to_string),
        rel: link.rel.clone(),
        link_type: link.link_type.clone(),
        hreflang: link.hreflang.clone(),
        title: link.title.clone(),
        length: link.length,
    }
}

/// Alternate and other links; a bare `link` becomes the alternate link
fn atom_links(links: &[SyndLink], link: Option<&str>) -> (Vec<Link>, Vec<Link>) {
    let (mut alternate, other): (Vec<Link>, Vec<Link>) = links
        .iter()
        .map(|l| Link {
            href: l.href.clone(),
            rel: l.rel.clone(),
            link_type: l.link_type.clone(),
            hreflang: l.hreflang.clone(),
            title: l.title.clone(),
            length: l.length,
            href_resolved: None,
        })
        .partition(Link::is_alternate);

    if alternate.is_empty() {
        if let Some(link) = link {
            alternate.push(Link::new(link));
        }
    }
    (alternate, other)
}

fn synd_person(person: &Person) -> SyndPerson {
    SyndPerson {
        name: person.name.clone(),
        uri: person.uri.clone(),
        email: person.email.clone(),
    }
}

fn atom_person(person: &SyndPerson) -> Person {
    Person {
        name: person.name.clone(),
        uri: person.uri.clone(),
        email: person.email.clone(),
    }
}

fn synd_category(category: &atom::Category) -> SyndCategory {
    SyndCategory {
        name: category.term.clone(),
        taxonomy_uri: category.scheme.clone(),
    }
}

fn atom_category(category: &SyndCategory) -> atom::Category {
    atom::Category {
        term: category.name.clone(),
        scheme: category.taxonomy_uri.clone(),
        label: None,
    }
}
