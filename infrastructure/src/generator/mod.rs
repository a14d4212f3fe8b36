//! Question generator adapters

mod http;

pub use http::HttpQuestionGenerator;
