//! Shared layout components

pub mod footer;
pub mod icon;
pub mod navbar;
pub mod outside_click;

pub use footer::Footer;
pub use icon::Icon;
pub use navbar::Navbar;
pub use outside_click::use_pointer_down_outside;
