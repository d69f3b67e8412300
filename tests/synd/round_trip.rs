//! Moving feeds between dialects through the synd model

use chrono::{TimeZone, Utc};
use synd_rs::{
    FeedType, InputConfig, OutputConfig, SyndContent, SyndEntry, SyndFeed, SyndFeedInput,
    SyndFeedOutput,
};

const RSS_20: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Round trip</title>
    <link>http://example.com/</link>
    <description>Dialect hopping</description>
    <item>
      <title>Alpha</title>
      <link>http://example.com/alpha</link>
      <guid>http://example.com/alpha</guid>
      <description>First &amp; foremost</description>
      <pubDate>Sat, 07 Sep 2002 09:42:31 GMT</pubDate>
    </item>
    <item>
      <title>Beta</title>
      <link>http://example.com/beta</link>
      <guid isPermaLink="false">urn:beta</guid>
    </item>
  </channel>
</rss>"#;

fn write(feed: &SyndFeed) -> String {
    SyndFeedOutput::with_config(OutputConfig::compact())
        .output_string(feed)
        .unwrap()
}

fn read(xml: &str) -> SyndFeed {
    SyndFeedInput::with_config(InputConfig::lenient())
        .build(xml)
        .unwrap()
}

#[test]
fn test_rss_to_atom_and_back() {
    let rss = read(RSS_20);

    let mut atom = rss.clone();
    atom.set_feed_type(Some(FeedType::Atom10));
    let atom = read(&write(&atom));
    assert_eq!(atom.feed_type(), Some(FeedType::Atom10));
    assert_eq!(atom.entries().len(), 2);
    assert_eq!(atom.entries()[1].uri(), Some("urn:beta"));

    let mut back = atom.clone();
    back.set_feed_type(Some(FeedType::Rss20));
    let back = read(&write(&back));

    assert_eq!(back.title(), rss.title());
    assert_eq!(back.link(), rss.link());
    for (before, after) in rss.entries().iter().zip(back.entries()) {
        assert_eq!(after.title(), before.title());
        assert_eq!(after.link(), before.link());
        assert_eq!(after.uri(), before.uri());
        assert_eq!(after.published_date(), before.published_date());
        assert_eq!(
            after.description().and_then(|d| d.value()),
            before.description().and_then(|d| d.value())
        );
    }
    assert_eq!(
        back.entries()[0].description().and_then(|d| d.value()),
        Some("First & foremost")
    );
}

#[test]
fn test_every_feed_type_round_trips() {
    for feed_type in FeedType::ALL {
        let mut feed = SyndFeed::new(feed_type);
        feed.set_title(Some("Everywhere"));
        feed.set_link(Some("http://example.com/"));
        feed.set_description(Some("Written in every dialect"));
        feed.set_uri(Some("http://example.com/"));
        feed.set_published_date(Some(Utc.with_ymd_and_hms(2011, 2, 3, 4, 5, 6).unwrap()));

        let mut entry = SyndEntry::new();
        entry.set_title(Some("Entry"));
        entry.set_link(Some("http://example.com/entry"));
        entry.set_uri(Some("http://example.com/entry"));
        entry.set_description(Some(SyndContent::text("Plain")));
        feed.entries_mut().push(entry);

        let xml = write(&feed);
        let read = read(&xml);

        assert_eq!(read.feed_type(), Some(feed_type), "{}", xml);
        assert_eq!(read.title(), Some("Everywhere"), "{}", feed_type);
        assert_eq!(read.entries().len(), 1, "{}", feed_type);
        assert_eq!(read.entries()[0].title(), Some("Entry"), "{}", feed_type);
        assert_eq!(read.entries()[0].link(), Some("http://example.com/entry"), "{}", feed_type);
    }
}

#[test]
fn test_preserved_wire_feed_matches_source_dialect() {
    let feed = SyndFeedInput::with_config(InputConfig::preserving())
        .build(RSS_20)
        .unwrap();

    let channel = feed.wire_feed().and_then(|w| w.as_rss()).unwrap();
    assert_eq!(channel.items.len(), 2);
    assert!(feed.entries()[1].wire_entry().is_some());

    // The preserved view does not take part in equality
    assert_eq!(feed, read(RSS_20));
}
