//! Page behaviour around the contact form: navigation menu, header, anchors
//! and the resource filter. All of it is plain state over a small document
//! model; nothing here talks to the network.

mod links;
mod navigation;
mod resources;
mod scroll;

pub use links::{current_page, harden_external_links, highlight_active_link, Anchor};
pub use navigation::{header_shadow, HeaderShadow, NavMenu};
pub use resources::{filter_resources, CardVisibility, FilterButton, ResourceCard};
pub use scroll::scroll_target;

pub const ACTIVE_CLASS: &str = "active";
