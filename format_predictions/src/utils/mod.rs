pub mod format_results;
pub mod get_args;
pub mod prediction_row;
