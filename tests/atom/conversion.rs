//! Writing Atom documents from the synd model

use chrono::{TimeZone, Utc};
use synd_rs::{
    FeedType, OutputConfig, SyndCategory, SyndContent, SyndEnclosure, SyndEntry, SyndFeed,
    SyndFeedInput, SyndFeedOutput, SyndLink, SyndPerson, WireFeed,
};

fn sample(feed_type: FeedType) -> SyndFeed {
    let mut feed = SyndFeed::new(feed_type);
    feed.set_uri(Some("urn:feed:sample"));
    feed.set_title_ex(Some(SyndContent::html("Sample &amp; more")));
    feed.set_link(Some("http://example.com/"));
    feed.set_published_date(Some(Utc.with_ymd_and_hms(2020, 5, 1, 10, 0, 0).unwrap()));
    feed.set_authors(vec![SyndPerson {
        name: Some("Alice".to_string()),
        email: Some("alice@example.com".to_string()),
        uri: None,
    }]);

    let mut entry = SyndEntry::new();
    entry.set_uri(Some("urn:entry:1"));
    entry.set_title(Some("First"));
    entry.set_link(Some("http://example.com/1"));
    entry.links_mut().push(SyndLink::with_rel("http://example.com/1/comments", "replies"));
    entry.set_published_date(Some(Utc.with_ymd_and_hms(2020, 4, 30, 0, 0, 0).unwrap()));
    entry.set_updated_date(Some(Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap()));
    entry.set_description(Some(SyndContent::text("Summary")));
    entry.set_contents(vec![SyndContent::with_type(
        "application/xhtml+xml",
        r#"<div xmlns="http://www.w3.org/1999/xhtml"><p>Body</p></div>"#,
    )]);
    entry.set_categories(vec![SyndCategory::with_taxonomy("rust", "http://example.com/tags")]);
    entry.set_enclosures(vec![SyndEnclosure::new("http://example.com/1.ogg", 99, "audio/ogg")]);
    entry.set_author(Some("Bob"));
    feed.entries_mut().push(entry);
    feed
}

fn write(feed: &SyndFeed) -> String {
    SyndFeedOutput::with_config(OutputConfig::compact())
        .output_string(feed)
        .unwrap()
}

#[test]
fn test_atom10_output() {
    let xml = write(&sample(FeedType::Atom10));

    assert!(xml.contains(r#"<title type="html">Sample &amp;amp; more</title>"#));
    assert!(xml.contains("<id>urn:feed:sample</id>"));
    assert!(xml.contains("<updated>2020-05-01T10:00:00Z</updated>"));
    assert!(xml.contains(r#"<link rel="alternate" href="http://example.com/1"/>"#));
    assert!(xml.contains(r#"<link rel="replies" href="http://example.com/1/comments"/>"#));
    assert!(xml.contains(
        r#"<link rel="enclosure" href="http://example.com/1.ogg" type="audio/ogg" length="99"/>"#
    ));
    assert!(xml.contains(r#"<category term="rust" scheme="http://example.com/tags"/>"#));
    assert!(xml.contains(r#"<content type="xhtml"><div xmlns="http://www.w3.org/1999/xhtml"><p>Body</p></div></content>"#));
    assert!(xml.contains("<author><name>Alice</name><email>alice@example.com</email></author>"));
    // The entry author falls back to the Dublin Core creator
    assert!(xml.contains("<author><name>Bob</name></author>"));
}

#[test]
fn test_atom03_output() {
    let xml = write(&sample(FeedType::Atom03));

    assert!(xml.contains(r#"<feed xmlns="http://purl.org/atom/ns#""#));
    assert!(xml.contains(r#"version="0.3""#));
    assert!(xml.contains("<modified>2020-05-01T10:00:00Z</modified>"));
    assert!(xml.contains("<issued>2020-04-30T00:00:00Z</issued>"));
    // Atom 0.3 keeps MIME types and has no categories
    assert!(xml.contains(r#"<title type="text/html">"#));
    assert!(!xml.contains("<category"));
}

#[test]
fn test_atom10_round_trip() {
    let original = sample(FeedType::Atom10);
    let read = SyndFeedInput::new().build(&write(&original)).unwrap();

    assert_eq!(read.uri(), original.uri());
    assert_eq!(read.title(), Some("Sample &amp; more"));
    assert_eq!(read.title_ex().unwrap().content_type(), "text/html");
    assert_eq!(read.published_date(), original.published_date());
    assert_eq!(read.authors(), original.authors());

    let (before, after) = (&original.entries()[0], &read.entries()[0]);
    assert_eq!(after.uri(), before.uri());
    assert_eq!(after.link(), before.link());
    assert_eq!(after.published_date(), before.published_date());
    assert_eq!(after.updated_date(), before.updated_date());
    assert_eq!(after.categories(), before.categories());
    assert_eq!(after.enclosures(), before.enclosures());
    assert_eq!(after.contents(), before.contents());
    assert_eq!(after.description(), before.description());
    assert_eq!(after.find_related_link("replies").and_then(|l| l.href.as_deref()), Some("http://example.com/1/comments"));
}

#[test]
fn test_atom_to_rss() {
    let mut feed = sample(FeedType::Atom10);
    feed.set_feed_type(Some(FeedType::Rss20));

    let WireFeed::Rss(channel) = feed.to_wire().unwrap() else {
        panic!("Expected RSS");
    };
    let item = &channel.items[0];
    assert_eq!(item.link.as_deref(), Some("http://example.com/1"));
    assert_eq!(item.guid.as_ref().and_then(|g| g.value.as_deref()), Some("urn:entry:1"));
    assert!(!item.guid.as_ref().unwrap().perma_link);
    assert_eq!(item.enclosures[0].length, 99);
    assert_eq!(
        item.content.as_ref().and_then(|c| c.value.as_deref()),
        Some(r#"<div xmlns="http://www.w3.org/1999/xhtml"><p>Body</p></div>"#)
    );
}

#[test]
fn test_preserved_wire_feed() {
    let xml = write(&sample(FeedType::Atom10));
    let feed = SyndFeedInput::with_config(synd_rs::InputConfig::preserving())
        .build(&xml)
        .unwrap();

    let wire = feed.wire_feed().and_then(WireFeed::as_atom).unwrap();
    assert_eq!(wire.id.as_deref(), Some("urn:feed:sample"));
    assert!(feed.entries()[0].wire_entry().is_some());
}

#[test]
fn test_atom03_base64_text_to_atom10() {
    let atom03 = r#"<?xml version="1.0" encoding="utf-8"?>
<feed version="0.3" xmlns="http://purl.org/atom/ns#">
  <title>Legacy</title>
  <modified>2003-12-13T18:30:02Z</modified>
  <entry>
    <title>Encoded</title>
    <id>urn:entry:encoded</id>
    <modified>2003-12-13T18:30:02Z</modified>
    <content type="text/plain" mode="base64">SGVsbG8gd29ybGQ=</content>
  </entry>
</feed>"#;

    let mut feed = SyndFeedInput::new().build(atom03).unwrap();
    assert_eq!(feed.entries()[0].contents()[0].value(), Some("Hello world"));

    feed.set_feed_type(Some(FeedType::Atom10));
    let xml = write(&feed);
    assert!(xml.contains(">Hello world</content>"), "{}", xml);

    let read = SyndFeedInput::new().build(&xml).unwrap();
    assert_eq!(read.entries()[0].contents()[0].value(), Some("Hello world"));
}
