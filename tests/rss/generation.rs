//! Writing RSS documents
//!
//! Tests that each version writes only the elements it defines and that the
//! output reads back to the same feed.

use chrono::{TimeZone, Utc};
use synd_rs::{
    FeedType, InputConfig, OutputConfig, SyndCategory, SyndContent, SyndEnclosure, SyndEntry,
    SyndFeed, SyndFeedInput, SyndFeedOutput,
};

fn sample(feed_type: FeedType) -> SyndFeed {
    let mut feed = SyndFeed::new(feed_type);
    feed.set_title(Some("Sample"));
    feed.set_link(Some("http://example.com/"));
    feed.set_description(Some("Sample channel"));
    feed.set_generator(Some("synd-rs"));

    let mut entry = SyndEntry::new();
    entry.set_title(Some("First"));
    entry.set_link(Some("http://example.com/first"));
    entry.set_uri(Some("http://example.com/first"));
    entry.set_description(Some(SyndContent::with_type("text/html", "<b>first</b>")));
    entry.set_published_date(Some(Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap()));
    entry.set_categories(vec![SyndCategory::with_taxonomy("news", "http://example.com/tax")]);
    entry.set_enclosures(vec![SyndEnclosure::new(
        "http://example.com/first.mp3",
        1024,
        "audio/mpeg",
    )]);
    feed.entries_mut().push(entry);
    feed
}

fn write(feed: &SyndFeed) -> String {
    SyndFeedOutput::with_config(OutputConfig::compact())
        .output_string(feed)
        .unwrap()
}

#[test]
fn test_rss091_writes_basic_elements_only() {
    let xml = write(&sample(FeedType::Rss091Userland));

    assert!(xml.contains(r#"version="0.91""#));
    assert!(xml.contains("<title>First</title>"));
    assert!(!xml.contains("<enclosure"));
    assert!(!xml.contains("<pubDate>"));
    assert!(!xml.contains("<generator>"));
    assert!(!xml.contains("<!DOCTYPE"));
}

#[test]
fn test_rss092_adds_enclosure_and_category() {
    let xml = write(&sample(FeedType::Rss092));

    assert!(xml.contains(
        r#"<enclosure url="http://example.com/first.mp3" length="1024" type="audio/mpeg"/>"#
    ));
    assert!(xml.contains(r#"<category domain="http://example.com/tax">news</category>"#));
    assert!(!xml.contains("<pubDate>"));
}

#[test]
fn test_rss093_adds_item_dates_and_description_type() {
    let xml = write(&sample(FeedType::Rss093));

    assert!(xml.contains("<pubDate>Mon, 01 Jan 2001 00:00:00 GMT</pubDate>"));
    assert!(xml.contains(r#"<description type="text/html">&lt;b&gt;first&lt;/b&gt;</description>"#));
    assert!(!xml.contains("<guid"));
}

#[test]
fn test_rss20_guid_and_generator() {
    let xml = write(&sample(FeedType::Rss20));

    assert!(xml.contains("<generator>synd-rs</generator>"));
    assert!(xml.contains("<guid>http://example.com/first</guid>"));
    // The description type attribute only exists in 0.93 and 0.94
    assert!(xml.contains("<description>&lt;b&gt;first&lt;/b&gt;</description>"));
}

#[test]
fn test_rss20_non_permalink_guid() {
    let mut feed = sample(FeedType::Rss20);
    feed.entries_mut()[0].set_uri(Some("urn:item:1"));

    let xml = write(&feed);
    assert!(xml.contains(r#"<guid isPermaLink="false">urn:item:1</guid>"#));
}

#[test]
fn test_rss10_rdf_layout() {
    let xml = write(&sample(FeedType::Rss10));

    assert!(xml.contains(r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#""#));
    assert!(xml.contains(r#"<channel xmlns="http://purl.org/rss/1.0/" rdf:about="http://example.com/">"#));
    assert!(xml.contains(r#"<rdf:li rdf:resource="http://example.com/first"/>"#));
    assert!(xml.contains(r#"<item xmlns="http://purl.org/rss/1.0/" rdf:about="http://example.com/first">"#));

    let read = SyndFeedInput::new().build(&xml).unwrap();
    assert_eq!(read.feed_type(), Some(FeedType::Rss10));
    assert_eq!(read.entries()[0].uri(), Some("http://example.com/first"));
    assert_eq!(read.entries()[0].description().and_then(|d| d.value()), Some("<b>first</b>"));
}

#[test]
fn test_rss090_has_no_about() {
    let xml = write(&sample(FeedType::Rss090));

    assert!(xml.contains(r#"<channel xmlns="http://my.netscape.com/rdf/simple/0.9/">"#));
    assert!(!xml.contains("rdf:about"));
    assert!(!xml.contains("<description>&lt;b&gt;"));
}

#[test]
fn test_every_version_reads_back() {
    for feed_type in FeedType::ALL.into_iter().filter(FeedType::is_rss) {
        let xml = write(&sample(feed_type));
        let read = SyndFeedInput::with_config(InputConfig::lenient())
            .build(&xml)
            .unwrap();

        assert_eq!(read.feed_type(), Some(feed_type), "{}", xml);
        assert_eq!(read.title(), Some("Sample"));
        assert_eq!(read.entries().len(), 1);
        assert_eq!(read.entries()[0].title(), Some("First"));
        assert_eq!(read.entries()[0].link(), Some("http://example.com/first"));
    }
}

#[test]
fn test_rss20_round_trip_keeps_entries() {
    let original = sample(FeedType::Rss20);
    let read = SyndFeedInput::new().build(&write(&original)).unwrap();

    let (before, after) = (&original.entries()[0], &read.entries()[0]);
    assert_eq!(after.uri(), before.uri());
    assert_eq!(after.published_date(), before.published_date());
    assert_eq!(after.categories(), before.categories());
    assert_eq!(after.enclosures(), before.enclosures());
    assert_eq!(after.description().and_then(|d| d.value()), Some("<b>first</b>"));
}
