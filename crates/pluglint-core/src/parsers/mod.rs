//! Parsers for plugin document formats

pub mod frontmatter;
pub mod json;
