pub mod merged;
pub mod product;
pub mod sds_metadata;
pub mod watch_list;
