//! Reading each RSS version
//!
//! Tests for dialect detection and the version specific elements.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use synd_rs::{FeedType, InputConfig, SyndFeedInput, WireFeed, WireFeedInput};

fn channel(xml: &str) -> synd_rs::rss::Channel {
    match WireFeedInput::with_config(InputConfig::lenient())
        .build(xml)
        .unwrap()
    {
        WireFeed::Rss(channel) => channel,
        other => panic!("Expected RSS, got {}", other.feed_type()),
    }
}

const RSS_090: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns="http://my.netscape.com/rdf/simple/0.9/">
  <channel>
    <title>Mozilla Dot Org</title>
    <link>http://www.mozilla.org</link>
    <description>the Mozilla Organization web site</description>
  </channel>
  <image>
    <title>Mozilla</title>
    <url>http://www.mozilla.org/images/moz.gif</url>
    <link>http://www.mozilla.org</link>
  </image>
  <item>
    <title>New Status Updates</title>
    <link>http://www.mozilla.org/status/</link>
  </item>
  <item>
    <title>Bugzilla Reorganized</title>
    <link>http://www.mozilla.org/bugs/</link>
  </item>
  <textinput>
    <title>Search</title>
    <name>q</name>
    <link>http://www.mozilla.org/search</link>
  </textinput>
</rdf:RDF>"#;

#[test]
fn test_rss090_siblings_of_channel() {
    let channel = channel(RSS_090);

    assert_eq!(channel.feed_type, FeedType::Rss090);
    assert_eq!(channel.title.as_deref(), Some("Mozilla Dot Org"));
    assert_eq!(channel.items.len(), 2);
    assert_eq!(channel.items[1].title.as_deref(), Some("Bugzilla Reorganized"));
    assert_eq!(
        channel.image.as_ref().and_then(|i| i.url.as_deref()),
        Some("http://www.mozilla.org/images/moz.gif")
    );
    assert_eq!(
        channel.text_input.as_ref().and_then(|t| t.name.as_deref()),
        Some("q")
    );
}

const RSS_091_NETSCAPE: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<!DOCTYPE rss PUBLIC "-//Netscape Communications//DTD RSS 0.91//EN" "http://my.netscape.com/publish/formats/rss-0.91.dtd">
<rss version="0.91">
  <channel>
    <title>WriteTheWeb</title>
    <link>http://writetheweb.com</link>
    <description>News for web users that write back</description>
    <language>en-us</language>
    <copyright>Copyright 2000, WriteTheWeb team.</copyright>
    <managingEditor>editor@writetheweb.com</managingEditor>
    <webMaster>webmaster@writetheweb.com</webMaster>
    <image>
      <title>WriteTheWeb</title>
      <url>http://writetheweb.com/images/mynetscape88.gif</url>
      <link>http://writetheweb.com</link>
      <width>88</width>
      <height>31</height>
    </image>
    <skipDays><day>Saturday</day><day>Sunday</day></skipDays>
    <item>
      <title>Giving the world a pluggable Gnutella</title>
      <link>http://writetheweb.com/read.php?item=24</link>
      <description>WorldOS is a framework on which to build programs.</description>
    </item>
  </channel>
</rss>"#;

#[test]
fn test_rss091_netscape() {
    let channel = channel(RSS_091_NETSCAPE);

    assert_eq!(channel.feed_type, FeedType::Rss091Netscape);
    assert_eq!(channel.encoding.as_deref(), Some("ISO-8859-1"));
    assert_eq!(channel.language.as_deref(), Some("en-us"));
    assert_eq!(channel.image.as_ref().unwrap().width, Some(88));
    assert_eq!(channel.image.as_ref().unwrap().height, Some(31));
    assert_eq!(channel.skip_days, vec!["Saturday", "Sunday"]);
    assert_eq!(
        channel.items[0].description.as_ref().unwrap().value.as_deref(),
        Some("WorldOS is a framework on which to build programs.")
    );
}

#[test]
fn test_rss091_without_doctype_is_userland() {
    let xml = RSS_091_NETSCAPE
        .lines()
        .filter(|line| !line.starts_with("<!DOCTYPE"))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(channel(&xml).feed_type, FeedType::Rss091Userland);
}

#[test]
fn test_rss092_cloud_source_and_enclosure() {
    let xml = r#"<rss version="0.92">
      <channel>
        <title>Dave Winer: Grateful Dead</title>
        <link>http://www.scripting.com/blog/categories/gratefulDead.html</link>
        <cloud domain="data.ourfavoritesongs.com" port="80" path="/RPC2" registerProcedure="ourFavoriteSongs.rssPleaseNotify" protocol="xml-rpc"/>
        <item>
          <description>It's been a few days since I added a song to the Grateful Dead channel.</description>
          <source url="http://scriptingnews.userland.com/xml/scriptingNews2.xml">Scripting News</source>
          <enclosure url="http://www.scripting.com/mp3s/weatherReportDicksPicsVol7.mp3" length="6182912" type="audio/mpeg"/>
        </item>
      </channel>
    </rss>"#;
    let channel = channel(xml);

    assert_eq!(channel.feed_type, FeedType::Rss092);
    let cloud = channel.cloud.as_ref().unwrap();
    assert_eq!(cloud.domain.as_deref(), Some("data.ourfavoritesongs.com"));
    assert_eq!(cloud.register_procedure.as_deref(), Some("ourFavoriteSongs.rssPleaseNotify"));

    let item = &channel.items[0];
    assert_eq!(item.source.as_ref().unwrap().value.as_deref(), Some("Scripting News"));
    assert_eq!(item.enclosures[0].length, 6_182_912);
    assert_eq!(item.enclosures[0].enclosure_type.as_deref(), Some("audio/mpeg"));
}

fn rss093() -> String {
    let items: String = (0..2)
        .map(|i| {
            let weekday = ["Mon", "Tue"][i];
            format!(
                r#"<item>
                  <title>Item {n}</title>
                  <link>http://example.com/{n}</link>
                  <description type="text/html">&lt;b&gt;Item {n}&lt;/b&gt;</description>
                  <pubDate>{weekday}, 0{n} Jan 2001 00:00:00 GMT</pubDate>
                  <expirationDate>{weekday}, 0{n} Jan 2001 12:00:00 GMT</expirationDate>
                </item>"#,
                n = i + 1,
            )
        })
        .collect();
    format!(
        r#"<rss version="0.93"><channel><title>Dated</title><link>http://example.com/</link>{}</channel></rss>"#,
        items
    )
}

#[test]
fn test_rss093_item_dates_and_description_type() {
    let channel = channel(&rss093());

    assert_eq!(channel.feed_type, FeedType::Rss093);
    for (i, item) in channel.items.iter().enumerate() {
        let day = i as u32 + 1;
        assert_eq!(item.pub_date, Some(Utc.with_ymd_and_hms(2001, 1, day, 0, 0, 0).unwrap()));
        assert_eq!(
            item.expiration_date,
            Some(Utc.with_ymd_and_hms(2001, 1, day, 12, 0, 0).unwrap())
        );
        let description = item.description.as_ref().unwrap();
        assert_eq!(description.description_type.as_deref(), Some("text/html"));
        assert_eq!(description.value, Some(format!("<b>Item {}</b>", day)));
    }
}

#[test]
fn test_rss093_synd_entries() {
    let feed = SyndFeedInput::new().build(&rss093()).unwrap();

    let entry = &feed.entries()[1];
    assert_eq!(entry.published_date(), Some(Utc.with_ymd_and_hms(2001, 1, 2, 0, 0, 0).unwrap()));
    assert_eq!(entry.description().unwrap().content_type(), "text/html");
    assert_eq!(entry.uri(), Some("http://example.com/2"));
}

#[test]
fn test_rss094_and_rss20_detection() {
    let rss094 = r#"<rss version="0.94"><channel><generator>Blogger</generator><ttl>30</ttl></channel></rss>"#;
    let channel094 = channel(rss094);
    assert_eq!(channel094.feed_type, FeedType::Rss094);
    assert_eq!(channel094.generator.as_deref(), Some("Blogger"));
    assert_eq!(channel094.ttl, Some(30));

    let rss201 = r#"<rss version="2.01"><channel/></rss>"#;
    assert_eq!(channel(rss201).feed_type, FeedType::Rss20);
}

#[test]
fn test_rss20_guid_and_author() {
    let xml = r#"<rss version="2.0">
      <channel>
        <title>Liftoff News</title>
        <link>http://liftoff.msfc.nasa.gov/</link>
        <managingEditor>editor@example.com</managingEditor>
        <category domain="Syndic8">1765</category>
        <item>
          <title>Star City</title>
          <guid>http://liftoff.msfc.nasa.gov/2003/06/03.html#item573</guid>
          <author>jane@example.com</author>
          <comments>http://liftoff.msfc.nasa.gov/comments/573</comments>
        </item>
      </channel>
    </rss>"#;

    let feed = SyndFeedInput::new().build(xml).unwrap();
    assert_eq!(feed.feed_type(), Some(FeedType::Rss20));
    assert_eq!(feed.author(), Some("editor@example.com"));
    assert_eq!(feed.categories()[0].name.as_deref(), Some("1765"));
    assert_eq!(feed.categories()[0].taxonomy_uri.as_deref(), Some("Syndic8"));

    // A permalink guid doubles as the entry link
    let entry = &feed.entries()[0];
    assert_eq!(entry.link(), Some("http://liftoff.msfc.nasa.gov/2003/06/03.html#item573"));
    assert_eq!(entry.uri(), entry.link());
    assert_eq!(entry.author(), "jane@example.com");
}

#[test]
fn test_rss10_about_and_content() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        xmlns="http://purl.org/rss/1.0/"
        xmlns:content="http://purl.org/rss/1.0/modules/content/">
      <channel rdf:about="http://www.xml.com/xml/news.rss">
        <title>XML.com</title>
        <link>http://xml.com/pub</link>
        <items><rdf:Seq><rdf:li resource="http://xml.com/pub/2000/08/09/xslt/xslt.html"/></rdf:Seq></items>
      </channel>
      <item rdf:about="http://xml.com/pub/2000/08/09/xslt/xslt.html">
        <title>Processing Inclusions with XSLT</title>
        <link>http://xml.com/pub/2000/08/09/xslt/xslt.html</link>
        <description>Processing document inclusions with general XML tools.</description>
        <content:encoded><![CDATA[<p>Processing <em>inclusions</em></p>]]></content:encoded>
      </item>
    </rdf:RDF>"#;

    let feed = SyndFeedInput::new().build(xml).unwrap();
    assert_eq!(feed.feed_type(), Some(FeedType::Rss10));
    assert_eq!(feed.uri(), Some("http://www.xml.com/xml/news.rss"));

    let entry = &feed.entries()[0];
    assert_eq!(entry.uri(), Some("http://xml.com/pub/2000/08/09/xslt/xslt.html"));
    assert_eq!(entry.contents()[0].value(), Some("<p>Processing <em>inclusions</em></p>"));
    assert_eq!(entry.contents()[0].content_type(), "html");
}
