//! Propositional knowledge about the board.
//!
//! - `Sentence`: `{cells} = count`, shrunk in place as cells become known
//! - `inference`: pairwise subset resolution between sentences
//! - `KnowledgeBase`: safe/mine facts plus active sentences, kept at a fixed
//!   point after every observation

mod base;
pub mod inference;
mod sentence;

pub use base::{KnowledgeBase, KnowledgeSnapshot};
pub use inference::{Deduction, Inferences};
pub use sentence::{Conflict, Sentence};
