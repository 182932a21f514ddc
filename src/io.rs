pub mod diagnostics;
pub mod param_parser;
pub mod write_to_csv;
