//! Terminal UI for the domain browser.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI output
//! ```
//!
//! - [`virtual_list`]: window, row placement and scroll math for the list
//! - [`layout`]: fixed screen rows shared by rendering and mouse hit testing
//! - [`viewmodel`]: display-ready frame data
//! - [`renderer`] and [`components`]: drawing
//! - [`helpers`] and [`theme`]: escape sequences and formatting

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;
pub mod virtual_list;

pub use layout::ScreenLayout;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{CountInfo, EmptyState, FooterInfo, HeaderInfo, LinkInfo, RowItem, SearchBarInfo, UIViewModel};
pub use virtual_list::{ListGeometry, RowStyle, ScrollState, VirtualWindow};
