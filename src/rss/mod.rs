//! RSS dialects
//!
//! Covers the RDF based RSS 0.90 and 1.0 as well as the `<rss version>`
//! family 0.91 (Netscape and UserLand), 0.92, 0.93, 0.94 and 2.0.

mod generator;
mod parser;
mod types;

pub use generator::RssGenerator;
pub use parser::RssParser;
pub use types::{
    Category, Channel, Cloud, Content, Description, Enclosure, Guid, Image, Item, Source,
    TextInput,
};

/// Default namespace of RSS 0.90 documents
pub const RSS090_URI: &str = "http://my.netscape.com/rdf/simple/0.9/";

/// Default namespace of RSS 1.0 documents
pub const RSS10_URI: &str = "http://purl.org/rss/1.0/";

/// RDF syntax namespace, root of RSS 0.90 and 1.0
pub const RDF_URI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Content module namespace, carrier of `content:encoded`
pub const CONTENT_URI: &str = "http://purl.org/rss/1.0/modules/content/";

/// Conventional prefix for [`CONTENT_URI`]
pub const CONTENT_PREFIX: &str = "content";

/// Public identifier that marks a Netscape RSS 0.91 document
pub const NETSCAPE_PUBLIC_ID: &str = "-//Netscape Communications//DTD RSS 0.91//EN";

/// DOCTYPE written for Netscape RSS 0.91
pub const NETSCAPE_DOCTYPE: &str = "rss PUBLIC \"-//Netscape Communications//DTD RSS 0.91//EN\" \"http://my.netscape.com/publish/formats/rss-0.91.dtd\"";
