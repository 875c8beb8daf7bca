//! UI components for Typly

pub mod dialogs;
pub mod editor;
pub mod status_bar;
pub mod tabs;
pub mod toolbar;
