//! Pages feature slice.
//!
//! Owns everything between a slug and a finished HTML document: the
//! controller that talks to the CMS (and absorbs its failures), page
//! metadata derivation, and the section dispatcher that renders each typed
//! content block through its matching template.

mod chrome;
mod controller;
mod error;
mod render;

pub use chrome::{PageMeta, SiteChrome};
pub use controller::Pages;
pub use error::{PagesError, PagesErrorExt};
pub use render::Renderer;
