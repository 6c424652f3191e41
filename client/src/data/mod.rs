//! Static placeholder data rendered by the feed, chrome and profile pages.

pub mod fixtures;
