//! # Screens
//!
//! The app has a single screen: the screener form and its result table.

pub mod screener;
