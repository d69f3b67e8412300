//! Reading Atom 1.0 and Atom 0.3 documents

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use synd_rs::atom::{Content, Feed};
use synd_rs::{FeedType, SyndError, SyndFeedInput, WireFeed, WireFeedInput};

fn atom(xml: &str) -> Feed {
    match WireFeedInput::new().build(xml).unwrap() {
        WireFeed::Atom(feed) => feed,
        other => panic!("Expected Atom, got {}", other.feed_type()),
    }
}

const ATOM_10: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xml:base="http://example.org/" xml:lang="en">
  <title type="text">dive into mark</title>
  <subtitle type="html">A &lt;em&gt;lot&lt;/em&gt; of effort went into making this effortless</subtitle>
  <updated>2005-07-31T12:29:29Z</updated>
  <id>tag:example.org,2003:3</id>
  <link rel="alternate" type="text/html" hreflang="en" href="/"/>
  <link rel="self" type="application/atom+xml" href="http://example.org/feed.atom"/>
  <rights>Copyright (c) 2003, Mark Pilgrim</rights>
  <generator uri="http://www.example.com/" version="1.0">Example Toolkit</generator>
  <icon>/favicon.ico</icon>
  <entry>
    <title>Atom draft-07 snapshot</title>
    <link rel="alternate" type="text/html" href="2005/04/02/atom"/>
    <link rel="enclosure" type="audio/mpeg" length="1337" href="http://example.org/audio/ph34r_my_podcast.mp3"/>
    <id>tag:example.org,2003:3.2397</id>
    <updated>2005-07-31T12:29:29Z</updated>
    <published>2003-12-13T08:29:29-04:00</published>
    <author>
      <name>Mark Pilgrim</name>
      <uri>http://example.org/</uri>
      <email>f8dy@example.com</email>
    </author>
    <contributor><name>Sam Ruby</name></contributor>
    <contributor><name>Joe Gregorio</name></contributor>
    <content type="xhtml" xml:lang="en" xml:base="http://diveintomark.org/">
      <div xmlns="http://www.w3.org/1999/xhtml"><p><i>[Update: The Atom draft is finished.]</i></p></div>
    </content>
  </entry>
</feed>"#;

#[test]
fn test_atom10_feed_metadata() {
    let feed = atom(ATOM_10);

    assert_eq!(feed.feed_type, FeedType::Atom10);
    assert_eq!(feed.encoding.as_deref(), Some("utf-8"));
    assert_eq!(feed.language.as_deref(), Some("en"));
    assert_eq!(feed.id.as_deref(), Some("tag:example.org,2003:3"));
    assert_eq!(feed.title.as_ref().unwrap().content_type.as_deref(), Some(Content::TEXT));
    assert_eq!(
        feed.subtitle.as_ref().unwrap().value.as_deref(),
        Some("A <em>lot</em> of effort went into making this effortless")
    );
    assert_eq!(feed.updated, Some(Utc.with_ymd_and_hms(2005, 7, 31, 12, 29, 29).unwrap()));
    assert_eq!(feed.rights.as_deref(), Some("Copyright (c) 2003, Mark Pilgrim"));
    assert_eq!(feed.icon.as_deref(), Some("/favicon.ico"));

    let generator = feed.generator.as_ref().unwrap();
    assert_eq!(generator.url.as_deref(), Some("http://www.example.com/"));
    assert_eq!(generator.value.as_deref(), Some("Example Toolkit"));

    assert_eq!(feed.alternate_links.len(), 1);
    assert_eq!(feed.alternate_links[0].hreflang.as_deref(), Some("en"));
    assert_eq!(feed.alternate_links[0].href_resolved(), Some("http://example.org/"));
    assert_eq!(feed.other_links[0].rel, "self");
}

#[test]
fn test_atom10_entry() {
    let feed = atom(ATOM_10);
    let entry = &feed.entries[0];

    assert_eq!(entry.id.as_deref(), Some("tag:example.org,2003:3.2397"));
    assert_eq!(
        entry.published,
        Some(Utc.with_ymd_and_hms(2003, 12, 13, 12, 29, 29).unwrap())
    );
    assert_eq!(entry.authors[0].email.as_deref(), Some("f8dy@example.com"));
    assert_eq!(entry.contributors.len(), 2);

    assert_eq!(
        entry.alternate_links[0].href_resolved(),
        Some("http://example.org/2005/04/02/atom")
    );
    let enclosure = &entry.other_links[0];
    assert_eq!(enclosure.rel, "enclosure");
    assert_eq!(enclosure.length, 1337);

    let content = &entry.contents[0];
    assert!(content.is_markup());
    let value = content.value.as_deref().unwrap();
    assert!(value.starts_with("<div xmlns=\"http://www.w3.org/1999/xhtml\">"));
    assert!(value.contains("<i>[Update: The Atom draft is finished.]</i>"));
}

#[test]
fn test_atom10_synd_view() {
    let feed = SyndFeedInput::new().build(ATOM_10).unwrap();

    assert_eq!(feed.feed_type(), Some(FeedType::Atom10));
    assert_eq!(feed.title(), Some("dive into mark"));
    assert_eq!(feed.title_ex().unwrap().content_type(), "text/plain");
    assert_eq!(feed.description_ex().unwrap().content_type(), "text/html");
    assert_eq!(feed.link(), Some("http://example.org/"));
    assert_eq!(feed.copyright(), Some("Copyright (c) 2003, Mark Pilgrim"));
    assert_eq!(feed.language(), Some("en"));
    assert_eq!(feed.links().len(), 2);
    assert_eq!(feed.image().and_then(|i| i.url.as_deref()), Some("/favicon.ico"));

    let entry = &feed.entries()[0];
    assert_eq!(entry.link(), Some("http://example.org/2005/04/02/atom"));
    assert_eq!(entry.author(), "Mark Pilgrim");
    assert_eq!(entry.enclosures().len(), 1);
    assert_eq!(
        entry.enclosures()[0].url.as_deref(),
        Some("http://example.org/audio/ph34r_my_podcast.mp3")
    );
    assert_eq!(entry.links().len(), 1);
    assert_eq!(entry.contents()[0].content_type(), "application/xhtml+xml");
    assert_eq!(
        entry.updated_date(),
        Some(Utc.with_ymd_and_hms(2005, 7, 31, 12, 29, 29).unwrap())
    );
}

const ATOM_03: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed version="0.3" xmlns="http://purl.org/atom/ns#" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <title mode="escaped" type="text/html">dive into &lt;b&gt;mark&lt;/b&gt;</title>
  <tagline>A lot of effort</tagline>
  <link rel="alternate" type="text/html" href="http://diveintomark.org/"/>
  <modified>2004-05-13T18:30:02Z</modified>
  <copyright>Copyright (c) 2004, Mark Pilgrim</copyright>
  <generator url="http://www.movabletype.org/" version="2.64">Movable Type</generator>
  <author><name>Mark Pilgrim</name><url>http://diveintomark.org/</url></author>
  <entry>
    <title>Atom 0.3 snapshot</title>
    <link rel="alternate" type="text/html" href="http://diveintomark.org/2003/12/13/atom03"/>
    <id>tag:diveintomark.org,2003:3.2397</id>
    <issued>2003-12-13T08:29:29-04:00</issued>
    <modified>2003-12-13T18:30:02Z</modified>
    <created>2003-12-13T08:29:29-04:00</created>
    <summary type="text/plain">The summary</summary>
    <content type="text/plain" mode="base64">SGVsbG8gd29ybGQ=</content>
    <dc:subject>Atom</dc:subject>
  </entry>
</feed>"#;

#[test]
fn test_atom03_legacy_names() {
    let feed = atom(ATOM_03);

    assert_eq!(feed.feed_type, FeedType::Atom03);
    assert_eq!(feed.subtitle.as_ref().unwrap().value.as_deref(), Some("A lot of effort"));
    assert_eq!(feed.rights.as_deref(), Some("Copyright (c) 2004, Mark Pilgrim"));
    assert_eq!(feed.updated, Some(Utc.with_ymd_and_hms(2004, 5, 13, 18, 30, 2).unwrap()));
    assert_eq!(
        feed.generator.as_ref().unwrap().url.as_deref(),
        Some("http://www.movabletype.org/")
    );
    assert_eq!(feed.authors[0].uri.as_deref(), Some("http://diveintomark.org/"));

    let title = feed.title.as_ref().unwrap();
    assert_eq!(title.mode.as_deref(), Some(Content::ESCAPED));
    assert_eq!(title.value.as_deref(), Some("dive into <b>mark</b>"));

    let entry = &feed.entries[0];
    assert_eq!(entry.published, Some(Utc.with_ymd_and_hms(2003, 12, 13, 12, 29, 29).unwrap()));
    assert_eq!(entry.created, entry.published);
    assert_eq!(entry.contents[0].value.as_deref(), Some("Hello world"));
}

#[test]
fn test_atom03_synd_view() {
    let feed = SyndFeedInput::new().build(ATOM_03).unwrap();

    assert_eq!(feed.feed_type(), Some(FeedType::Atom03));
    // Atom 0.3 types are MIME types already
    assert_eq!(feed.title_ex().unwrap().content_type(), "text/html");
    assert_eq!(feed.authors()[0].name.as_deref(), Some("Mark Pilgrim"));

    let entry = &feed.entries()[0];
    assert_eq!(entry.uri(), Some("tag:diveintomark.org,2003:3.2397"));
    assert_eq!(entry.description().and_then(|d| d.value()), Some("The summary"));
    assert_eq!(entry.contents()[0].value(), Some("Hello world"));
    assert_eq!(entry.categories().len(), 0);
    assert_eq!(entry.dc_module().subject().and_then(|s| s.value.as_deref()), Some("Atom"));
}

#[test]
fn test_binary_content_in_atom10() {
    let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
        <entry>
            <id>urn:binary</id>
            <content type="application/octet-stream">SGk=</content>
            <content type="image/png" src="http://example.com/a.png"/>
            <content type="application/rss+xml"><rss version="2.0"/></content>
        </entry>
    </feed>"#;
    let entry = &atom(xml).entries[0];

    assert_eq!(entry.contents[0].mode.as_deref(), Some(Content::BASE64));
    assert_eq!(entry.contents[0].value.as_deref(), Some("Hi"));
    assert_eq!(entry.contents[1].mode, None);
    assert_eq!(entry.contents[1].src.as_deref(), Some("http://example.com/a.png"));
    assert_eq!(entry.contents[2].mode, None);
}

#[test]
fn test_foreign_markup_in_atom() {
    let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:x="http://example.com/ext">
        <title>Extended</title>
        <x:rank>1</x:rank>
        <entry><id>urn:e</id><x:rank>2</x:rank></entry>
    </feed>"#;

    let feed = SyndFeedInput::new().build(xml).unwrap();
    assert_eq!(feed.foreign_markup()[0].text(), "1");
    assert_eq!(feed.entries()[0].foreign_markup()[0].text(), "2");
}

#[test]
fn test_entry_source() {
    let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
        <entry>
            <id>urn:copied</id>
            <source>
                <id>urn:original</id>
                <title>Original Feed</title>
                <link href="http://original.example.com/"/>
            </source>
        </entry>
    </feed>"#;

    let feed = SyndFeedInput::new().build(xml).unwrap();
    let source = feed.entries()[0].source().unwrap();
    assert_eq!(source.uri(), Some("urn:original"));
    assert_eq!(source.title(), Some("Original Feed"));
    assert_eq!(source.link(), Some("http://original.example.com/"));
}

#[test]
fn test_unknown_namespace_is_rejected() {
    let xml = r#"<feed xmlns="http://example.com/not-atom"><title>Nope</title></feed>"#;
    assert!(matches!(
        WireFeedInput::new().build(xml),
        Err(SyndError::UnsupportedFeedType(_))
    ));
}
