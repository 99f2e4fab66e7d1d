//! atlas-cli
//! =========
//!
//! Command-line interface for the `atlas-core` country and capital dataset.
//!
//! This crate primarily provides a binary (`atlas`). The library target
//! exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! atlas --help
//! atlas stats
//! atlas countries --region Europe --sort-by population --order desc
//! atlas country de
//! atlas capital tokyo
//! atlas top --limit 3
//! ```
//!
//! For programmatic access use the [`atlas-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
