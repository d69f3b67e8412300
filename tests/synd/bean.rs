//! Bean operations on the synd model
//!
//! Equality, hashing, dumps and deep copies across whole feed trees.

use std::any::Any;
use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use synd_rs::bean::{self, Bean, Interface, Property, PropertyValue, Value};
use synd_rs::module::georss::{GeoRssModule, Geometry, Point, Position};
use synd_rs::module::{georss, DcModule, Module};
use synd_rs::{
    CopyFrom, FeedType, SyndCategory, SyndContent, SyndEntry, SyndError, SyndFeed, SyndLink,
    SyndPerson,
};

/// A text construct that is not a `SyndContent`
#[derive(Debug, Default)]
struct Note {
    mime: Option<String>,
    body: Option<String>,
}

impl Bean for Note {
    fn bean_name(&self) -> &'static str {
        "Note"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("type", self.mime.as_deref()),
            Property::new("value", self.body.as_deref()),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for Note {
    fn interface(&self) -> Interface {
        Interface::SyndContent
    }

    fn copy_from(&mut self, _source: &dyn CopyFrom) -> synd_rs::Result<()> {
        unimplemented!("only used as a copy source")
    }

    fn set_property(&mut self, name: &str, _value: Value) -> synd_rs::Result<()> {
        Err(SyndError::UnknownProperty {
            bean: "Note".to_string(),
            property: name.to_string(),
        })
    }

    fn new_instance(&self) -> Box<dyn CopyFrom> {
        Box::new(Note::default())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A plain bean that cannot act as a copy source
#[derive(Debug)]
struct Caption(String);

impl Bean for Caption {
    fn bean_name(&self) -> &'static str {
        "Caption"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![Property::new("text", Some(self.0.as_str()))]
    }
}

/// An entry implementation unrelated to `SyndEntry`
#[derive(Debug, Default)]
struct Post {
    id: Option<String>,
    headline: Option<Note>,
    caption: Option<Caption>,
}

impl Bean for Post {
    fn bean_name(&self) -> &'static str {
        "Post"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        let title = match (&self.headline, &self.caption) {
            (Some(note), _) => PropertyValue::Bean(note),
            (None, Some(caption)) => PropertyValue::Bean(caption),
            (None, None) => PropertyValue::Null,
        };
        vec![Property::new("uri", self.id.as_deref()), Property::new("title", title)]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for Post {
    fn interface(&self) -> Interface {
        Interface::SyndEntry
    }

    fn copy_from(&mut self, _source: &dyn CopyFrom) -> synd_rs::Result<()> {
        unimplemented!("only used as a copy source")
    }

    fn set_property(&mut self, name: &str, _value: Value) -> synd_rs::Result<()> {
        Err(SyndError::UnknownProperty {
            bean: "Post".to_string(),
            property: name.to_string(),
        })
    }

    fn new_instance(&self) -> Box<dyn CopyFrom> {
        Box::new(Post::default())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

fn entry(title: &str) -> SyndEntry {
    let mut entry = SyndEntry::new();
    entry.set_title(Some(title));
    entry.set_uri(Some(&format!("urn:entry:{}", title)));
    entry.set_link(Some("http://example.com/entry"));
    entry.set_description(Some(SyndContent::html("<p>Description</p>")));
    entry.set_published_date(Some(Utc.with_ymd_and_hms(2010, 3, 4, 5, 6, 7).unwrap()));
    entry.set_authors(vec![SyndPerson::new("Alice")]);
    entry.set_categories(vec![SyndCategory::new("news")]);
    entry.links_mut().push(SyndLink::with_rel("http://example.com/entry.atom", "self"));
    entry.modules_mut().push(Box::new(GeoRssModule::new(Geometry::Point(Point::new(
        Position::new(10.0, 20.0),
    )))));
    entry
}

fn feed() -> SyndFeed {
    let mut feed = SyndFeed::new(FeedType::Atom10);
    feed.set_title(Some("Feed"));
    feed.set_uri(Some("urn:feed"));
    feed.set_language(Some("de"));
    feed.set_entries(vec![entry("one"), entry("two")]);
    feed
}

#[test]
fn test_deep_copy_of_feed_tree() {
    let original = feed();
    let copy: SyndFeed = bean::copy(&original).unwrap();

    assert_eq!(copy, original);
    assert_eq!(copy.language(), Some("de"));
    assert_eq!(copy.entries()[1].title(), Some("two"));
    assert_eq!(
        copy.entries()[0]
            .module(georss::URI)
            .and_then(|m| m.as_any().downcast_ref::<GeoRssModule>())
            .and_then(GeoRssModule::geometry)
            .map(Geometry::to_simple)
            .as_deref(),
        Some("10 20")
    );
}

#[test]
fn test_copy_is_independent() {
    let original = feed();
    let mut copy = SyndFeed::default();
    copy.copy_from(&original).unwrap();

    copy.entries_mut()[0].set_title(Some("changed"));
    copy.dc_module_mut().set_language(Some("fr"));

    assert_eq!(original.entries()[0].title(), Some("one"));
    assert_eq!(original.language(), Some("de"));
    assert_ne!(copy, original);
}

#[test]
fn test_copy_replaces_previous_state() {
    let mut target = feed();
    target.set_docs(Some("http://example.com/docs"));

    let mut source = SyndFeed::new(FeedType::Rss20);
    source.set_title(Some("Replacement"));
    target.copy_from(&source).unwrap();

    assert_eq!(target.title(), Some("Replacement"));
    assert_eq!(target.docs(), None);
    assert!(target.entries().is_empty());
    assert_eq!(target, source);
}

#[test]
fn test_hash_follows_equality() {
    let mut set = HashSet::new();
    set.insert(feed());
    set.insert(feed());
    assert_eq!(set.len(), 1);

    let mut other = feed();
    other.set_title(Some("Other"));
    set.insert(other);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_module_order_does_not_matter() {
    let geo: Box<dyn Module> = Box::new(GeoRssModule::new(Geometry::Point(Point::new(
        Position::new(1.0, 2.0),
    ))));
    let mut dc = DcModule::default();
    dc.set_creator(Some("Alice"));
    let dc: Box<dyn Module> = Box::new(dc);

    let mut first = SyndEntry::new();
    first.set_modules(vec![dc.clone(), geo.clone()]);
    let mut second = SyndEntry::new();
    second.set_modules(vec![geo, dc]);

    assert_eq!(first, second);
    assert_eq!(bean::hash_code(&first), bean::hash_code(&second));
}

#[test]
fn test_dump_paths() {
    let dump = bean::dump(&feed());

    assert!(dump.contains("SyndFeed.title.value=Feed\n"), "{}", dump);
    assert!(dump.contains("SyndFeed.entries[0].title.value=one\n"), "{}", dump);
    assert!(dump.contains("SyndFeed.entries[1].links[0].rel=self\n"), "{}", dump);
    assert!(dump.contains("SyndFeed.image=null\n"), "{}", dump);
    // Convenience views over the Dublin Core module are not listed twice
    assert!(!dump.contains("SyndFeed.language="), "{}", dump);
}

#[test]
fn test_display_matches_dump() {
    let entry = entry("one");
    assert_eq!(entry.to_string(), bean::dump(&entry));
}

#[test]
fn test_set_property() {
    let mut feed = SyndFeed::default();

    feed.set_property("feedType", Value::Text("rss_1.0".to_string()))
        .unwrap();
    assert_eq!(feed.feed_type(), Some(FeedType::Rss10));

    let err = feed
        .set_property("feedType", Value::Text("rss_9.9".to_string()))
        .unwrap_err();
    assert!(matches!(err, SyndError::UnsupportedFeedType(_)));

    let err = feed.set_property("noSuchProperty", Value::Null).unwrap_err();
    assert!(matches!(err, SyndError::UnknownProperty { .. }));

    let err = feed.set_property("link", Value::Integer(3)).unwrap_err();
    assert!(matches!(err, SyndError::InvalidPropertyValue { .. }));
}

#[test]
fn test_copy_across_types_fails() {
    let mut content = SyndContent::default();
    let err = content.copy_from(&SyndPerson::new("Alice")).unwrap_err();
    assert!(matches!(err, SyndError::TypeMismatch { .. }));
}

#[test]
fn test_module_lookup_without_modules() {
    let entry = SyndEntry::new();

    let dc = entry
        .module(synd_rs::module::dc::URI)
        .and_then(|m| m.as_any().downcast_ref::<DcModule>())
        .unwrap();
    assert!(dc.is_empty());
    assert!(entry.modules().is_empty());
    assert!(entry.categories().is_empty());
    assert_eq!(entry.author(), "");
    assert!(entry.module("http://example.com/unknown").is_none());
}

#[test]
fn test_copy_from_other_implementation_of_interface() {
    let post = Post {
        id: Some("http://example.com/x".to_string()),
        headline: Some(Note {
            mime: Some("text/html".to_string()),
            body: Some("<b>x</b>".to_string()),
        }),
        caption: None,
    };

    let entry: SyndEntry = bean::copy(&post).unwrap();

    assert_eq!(entry.uri(), Some("http://example.com/x"));
    // Nested values become the registered implementation, not a Note
    let title = entry.title_ex().unwrap();
    assert_eq!(title.content_type(), "text/html");
    assert_eq!(title.value(), Some("<b>x</b>"));
    assert_eq!(title.mode, None);
    assert!(entry.links().is_empty());
}

#[test]
fn test_copy_of_nested_non_copyable_bean_fails() {
    let post = Post {
        id: Some("urn:post".to_string()),
        headline: None,
        caption: Some(Caption("plain".to_string())),
    };

    let err = bean::copy::<SyndEntry>(&post).unwrap_err();
    match err {
        SyndError::NotCopyable(name) => assert_eq!(name, "Caption"),
        other => panic!("Expected NotCopyable, got {:?}", other),
    }
}
