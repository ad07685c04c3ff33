//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! - [`viewmodel`]: Display-ready frame description
//! - [`table`]: Stateless table and pagination primitive
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Region renderers
//! - [`helpers`]: Truncation and match highlighting
//! - [`theme`]: Colour schemes and ANSI sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod table;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use table::{build_table, Pager, TableViewModel, CHARACTER_COLUMNS, NO_RESULTS};
pub use theme::Theme;
pub use viewmodel::{
    Body, DetailViewModel, FooterInfo, HeaderInfo, ImageInfo, SearchBarInfo, SpinnerInfo, UIViewModel,
};
