//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated multiple-choice question
//! - [`topic::Topic`]: the subject key questions are partitioned by
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod string;
pub mod topic;
