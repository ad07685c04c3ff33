//! Domain layer for the character browser.
//!
//! Core types independent of Zellij APIs: the API's data model, locations and
//! routing, and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`character`]: Character, episode and paged-result models
//! - [`location`]: Location parsing, list query encoding and history
//!
//! # Examples
//!
//! ```
//! use charbrowser::domain::{ListQuery, Route};
//!
//! let route = Route::parse("/?page=2&name=rick")?;
//! assert_eq!(route, Route::List(ListQuery::new("rick", 2)));
//! # Ok::<(), charbrowser::BrowserError>(())
//! ```

pub mod character;
pub mod error;
pub mod location;

pub use character::{trailing_segment, Character, Episode, NamedResource, PagedResult};
pub use error::{BrowserError, Result};
pub use location::{ListQuery, Route, Router};
