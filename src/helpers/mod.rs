//! Helper functions for dates and URLs

pub mod date;
pub mod url;
