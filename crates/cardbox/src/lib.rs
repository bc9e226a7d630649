//! `cardbox` - A local-first contact-card editor and sharing tool
//!
//! This library provides the core functionality for editing a contact card,
//! serializing it to the vCard 3.0 text format, and sharing it through
//! size-budgeted snapshots addressed by shareable links.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod card;
pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod link;
pub mod logging;
pub mod render;
pub mod storage;
pub mod vcf;

pub use card::{ContactCard, CustomField, PostalAddress, SocialLink, SocialProfiles, Template, Theme};
pub use config::Config;
pub use error::{Error, Result};
pub use link::{LaunchParams, ViewMode};
pub use logging::init_logging;
pub use storage::{SnapshotInfo, SnapshotStore, StoreStats};
