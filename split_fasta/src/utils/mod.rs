pub mod get_args;
pub mod split_records;
