//! UI Components
//!
//! Leptos components of the stash panel.

mod panel_header;
mod tab_bar;
mod stash_list;
mod stash_item;
mod stash_form_fields;
mod create_form;
mod edit_modal;
mod notice;

pub use panel_header::PanelHeader;
pub use tab_bar::TabBar;
pub use stash_list::StashList;
pub use stash_item::StashItem;
pub use stash_form_fields::StashFormFields;
pub use create_form::CreateStashForm;
pub use edit_modal::EditStashModal;
pub use notice::FailureNotice;
