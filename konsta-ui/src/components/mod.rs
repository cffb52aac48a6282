//! Themed components

pub mod block_title;
pub mod link;

pub use block_title::{block_title_classes, BlockTitle, BlockTitleTag};
pub use link::{link_classes, Link, LinkColors, LinkTag};
