pub mod execute_mhc;
pub mod get_args;
