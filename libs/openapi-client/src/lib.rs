//! Wire models shared with the Theseus management API

pub mod models;
