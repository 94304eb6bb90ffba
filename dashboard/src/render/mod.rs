//! Presentation state derived from backend data

pub mod form;
pub mod html;
pub mod status;
pub mod terminal;
