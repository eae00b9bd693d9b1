pub mod classify;
pub mod result;
pub mod similarity;
pub mod tokenize;
pub mod worker;

pub use classify::{classify, Classification};
pub use result::*;
pub use similarity::{similarity, word_set};
pub use tokenize::{normalize_whitespace, tokenize};
pub use worker::{compare_documents, CompareConfig, CompareEngine};
