//! View-model logic for the chemical watch list.
//!
//! Everything in here is pure and runs on both sides of the wire: the backend
//! uses `merge` to build rows, and the browser client drives `page` (which in
//! turn uses `sort`, `activity`, `form` and `status`).

pub mod activity;
pub mod form;
pub mod merge;
pub mod page;
pub mod sort;
pub mod status;
