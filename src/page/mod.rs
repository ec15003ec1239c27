//! Interactive page behavior
//!
//! Everything the portfolio page does after load: control lookup, the
//! mobile menu, scroll effects, viewport observers, the language toggle and
//! the one-time enhancements, tied together by [`PageSession`].

pub mod controls;
pub mod enhancements;
pub mod events;
pub mod language;
pub mod menu;
pub mod observers;
pub mod scroll;
pub mod session;

pub use controls::Controls;
pub use events::{Effect, PageEvent};
pub use menu::MobileMenu;
pub use observers::Observer;
pub use scroll::LayoutBox;
pub use session::PageSession;
