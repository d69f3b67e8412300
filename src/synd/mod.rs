//! Dialect-independent feed model
//!
//! [`SyndFeed`] and [`SyndEntry`] give one view over every RSS and Atom
//! version. Converting to and from the dialect beans goes through the
//! converters in [`convert`](crate::convert); reading and writing XML goes
//! through [`SyndFeedInput`](crate::SyndFeedInput) and
//! [`SyndFeedOutput`](crate::SyndFeedOutput).

mod category;
mod content;
mod enclosure;
mod entry;
mod feed;
mod image;
mod link;
mod person;
pub mod uri;

pub use category::SyndCategory;
pub use content::{SyndContent, DEFAULT_TYPE};
pub use enclosure::SyndEnclosure;
pub use entry::SyndEntry;
pub use feed::SyndFeed;
pub use image::SyndImage;
pub use link::{SyndLink, DEFAULT_REL};
pub use person::SyndPerson;
