pub mod event_handler;
pub mod main_handlers;
pub mod overlay_handlers;
pub mod popup_handlers;
