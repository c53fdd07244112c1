//! daybook-core - Core library for Daybook
//!
//! This crate contains the shared models, screen state machines, and the
//! cloud auth/store clients used by all Daybook interfaces.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod resource;
pub mod screen;
pub mod store;

pub use error::{Error, LoadError, Result};
pub use models::{Diary, DiaryId, Entry, EntryId};
pub use resource::Resource;
