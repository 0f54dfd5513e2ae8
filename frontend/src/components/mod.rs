pub mod watch_list;
