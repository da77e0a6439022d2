pub mod grader;
pub mod output;
pub mod parser;
pub mod reader;
