pub mod error;
pub mod model;
pub mod requests;
pub mod watch_list;
