//! Character API client plumbing.
//!
//! The plugin never performs I/O here: requests are described as
//! [`FetchRequest`] values, executed by the Zellij runtime, and the raw
//! responses come back through [`RawResponse`] for decoding.
//!
//! - [`endpoints`]: URL construction for the character and episode endpoints
//! - [`requests`]: Fetch descriptions and their routing context
//! - [`responses`]: Status checking and JSON decoding

pub mod endpoints;
pub mod requests;
pub mod responses;

pub use endpoints::{ApiEndpoints, DEFAULT_API_URL};
pub use requests::{FetchRequest, RequestContext, URL_KEY};
pub use responses::{ApiResponse, PageInfo, RawResponse};
