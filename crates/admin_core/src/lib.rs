//! Member admin panel core: the members feed loader and the in-memory panel
//! state machine (search, paging, selection, inline edit, delete).

pub mod config;
pub mod error;
pub mod filter;
pub mod pager;
pub mod panel;
pub mod source;

pub use config::{load_settings, Settings};
pub use error::LoadError;
pub use pager::{PageControls, PageNav};
pub use panel::{AdminPanel, DraftField, EditSession, LoadState, ROWS_PER_PAGE};
pub use source::{HttpMemberSource, MemberSource};
