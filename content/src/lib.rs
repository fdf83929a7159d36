// portfolio content
//
// everything the page renders that is not markup lives here: the static registry of
// experience, projects, skills and stats, the design tokens, and the embedded site
// configuration.  nothing in this crate is mutated after startup, so all of it can be
// shared by reference without synchronization
pub mod config;
pub mod experience;
pub mod project;
pub mod registry;
pub mod skill;
pub mod stat;
pub mod tag;
pub mod theme;
pub mod validate;

pub use registry::Registry;

// in-page anchors
//
// these are part of the shareable url contract (/#work, /#contact, ...) so they must stay
// stable and unique across the page
pub const ANCHOR_TOP: &str = "top";
pub const ANCHOR_WORK: &str = "work";
pub const ANCHOR_ABOUT: &str = "about";
pub const ANCHOR_EXPERIENCE: &str = "experience";
pub const ANCHOR_CONTACT: &str = "contact";

pub const ANCHOR_REGEX: &str = r"^[a-z][a-z0-9-]{0,31}$";

pub fn anchor_href(anchor: &str) -> String {
    format!("#{anchor}")
}
