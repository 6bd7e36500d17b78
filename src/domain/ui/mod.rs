pub mod back_to_top;
pub mod modal;
pub mod nav_toggle;
pub mod navbar;
pub mod page;
pub mod scroll_reveal;
pub mod typing;
