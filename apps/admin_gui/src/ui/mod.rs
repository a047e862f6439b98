//! UI layer for the admin GUI: app shell plus table and pagination widgets.

pub mod app;
pub mod widgets;

pub use app::AdminGuiApp;
