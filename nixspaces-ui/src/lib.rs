//! NixSpaces front-end: a static landing view mounted into `#root`.

mod app;
mod mount;

pub use app::{App, TAGLINE, TITLE};
pub use mount::{bootstrap, find_mount_point, ROOT_ID};
