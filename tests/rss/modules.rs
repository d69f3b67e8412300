//! Extension modules and foreign markup in RSS documents

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use synd_rs::module::georss::{GeoRssModule, Geometry};
use synd_rs::module::{dc, georss, sy, DcModule, DcSubject, SyModule, UpdatePeriod};
use synd_rs::{CopyFrom, FeedType, OutputConfig, SyndFeedInput, SyndFeedOutput};

const RSS_WITH_MODULES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:sy="http://purl.org/rss/1.0/modules/syndication/"
    xmlns:georss="http://www.georss.org/georss"
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:taxo="http://purl.org/rss/1.0/modules/taxonomy/"
    xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>Modules</title>
    <link>http://example.com/</link>
    <dc:publisher>Example Press</dc:publisher>
    <dc:rights>CC-BY</dc:rights>
    <dc:subject>
      <rdf:Description>
        <taxo:taxonomy rdf:resource="http://example.com/taxonomy"/>
        <rdf:value>weather</rdf:value>
      </rdf:Description>
    </dc:subject>
    <sy:updatePeriod>daily</sy:updatePeriod>
    <sy:updateFrequency>4</sy:updateFrequency>
    <sy:updateBase>2000-01-01T12:00+00:00</sy:updateBase>
    <media:rating>nonadult</media:rating>
    <item>
      <title>Storm</title>
      <link>http://example.com/storm</link>
      <dc:creator>Alice</dc:creator>
      <dc:creator>Bob</dc:creator>
      <dc:date>2004-07-01T08:30:00Z</dc:date>
      <georss:point>45.256 -71.92</georss:point>
      <media:thumbnail url="http://example.com/storm.jpg"/>
    </item>
  </channel>
</rss>"#;

fn read() -> synd_rs::SyndFeed {
    SyndFeedInput::new().build(RSS_WITH_MODULES).unwrap()
}

#[test]
fn test_channel_dublin_core() {
    let feed = read();

    let dc = feed.dc_module();
    assert_eq!(dc.publisher(), Some("Example Press"));
    assert_eq!(feed.copyright(), Some("CC-BY"));

    let categories = feed.categories();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name.as_deref(), Some("weather"));
    assert_eq!(categories[0].taxonomy_uri.as_deref(), Some("http://example.com/taxonomy"));
}

#[test]
fn test_channel_syndication() {
    let feed = read();

    let sy = feed
        .module(sy::URI)
        .and_then(|m| m.as_any().downcast_ref::<SyModule>())
        .unwrap();
    assert_eq!(sy.update_period, Some(UpdatePeriod::Daily));
    assert_eq!(sy.update_frequency, Some(4));
    assert_eq!(sy.update_base, Some(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()));
}

#[test]
fn test_item_modules() {
    let feed = read();
    let entry = &feed.entries()[0];

    assert_eq!(entry.author(), "Alice");
    assert_eq!(entry.dc_module().creators, vec!["Alice", "Bob"]);
    assert_eq!(
        entry.published_date(),
        Some(Utc.with_ymd_and_hms(2004, 7, 1, 8, 30, 0).unwrap())
    );

    let geo = entry
        .module(georss::URI)
        .and_then(|m| m.as_any().downcast_ref::<GeoRssModule>())
        .unwrap();
    match geo.geometry() {
        Some(Geometry::Point(point)) => {
            assert_eq!(point.position().latitude, 45.256);
            assert_eq!(point.position().longitude, -71.92);
        }
        other => panic!("Expected point, got {:?}", other),
    }
}

#[test]
fn test_foreign_markup_is_kept() {
    let feed = read();

    assert_eq!(feed.foreign_markup().len(), 1);
    assert_eq!(feed.foreign_markup()[0].name, "rating");
    assert_eq!(feed.entries()[0].foreign_markup()[0].attribute("url"), Some("http://example.com/storm.jpg"));
}

#[test]
fn test_modules_survive_rewrite() {
    let feed = read();
    let xml = SyndFeedOutput::with_config(OutputConfig::compact())
        .output_string(&feed)
        .unwrap();

    assert!(xml.contains("<dc:publisher>Example Press</dc:publisher>"));
    assert!(xml.contains("<sy:updatePeriod>daily</sy:updatePeriod>"));
    assert!(xml.contains("<georss:point>45.256 -71.92</georss:point>"));
    assert!(xml.contains(r#"<media:thumbnail url="http://example.com/storm.jpg"/>"#));

    let again = SyndFeedInput::new().build(&xml).unwrap();
    assert_eq!(again.modules().len(), feed.modules().len());
    assert_eq!(
        again.module(sy::URI).map(|m| m.uri()),
        Some(sy::URI)
    );
    assert_eq!(again.entries()[0].dc_module().creators, vec!["Alice", "Bob"]);
    assert_eq!(again.categories(), feed.categories());
}

#[test]
fn test_modules_move_between_dialects() {
    let mut feed = read();
    feed.set_feed_type(Some(FeedType::Atom10));

    let xml = SyndFeedOutput::new().output_string(&feed).unwrap();
    let atom = SyndFeedInput::new().build(&xml).unwrap();

    assert_eq!(atom.feed_type(), Some(FeedType::Atom10));
    assert_eq!(atom.dc_module().publisher(), Some("Example Press"));
    assert!(atom.entries()[0].module(georss::URI).is_some());
}

#[test]
fn test_module_copy_between_feeds() {
    let feed = read();

    let mut dc = DcModule::default();
    dc.copy_from(feed.dc_module()).unwrap();
    assert_eq!(&dc, feed.dc_module());

    dc.subjects.push(DcSubject::new("extra"));
    assert_ne!(&dc, feed.dc_module());
    assert!(feed.module(dc::URI).is_some());
}
