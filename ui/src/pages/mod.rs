//! Page views
//!
//! Pages with in-page buttons take an `on_navigate` callback instead of
//! reaching into global state.

pub mod about;
pub mod contact;
pub mod home;
pub mod methodology;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use methodology::MethodologyPage;
