//! Issuing continuation authorities.
//!
//! An authority (Block Limit Instruction, BLI) lets a train enter the next
//! block at the wind restriction speed. Each one embeds exactly one advisory
//! (Field Operations Directive, FOD) explaining the restriction to the crew.

mod builder;
mod records;
mod sequence;

pub use builder::{AuthorityBuilder, IssueError, directive_text};
pub use records::{AdvisoryId, AdvisoryMessage, AuthorityId, AuthorityRecord};
pub use sequence::{AtomicSequence, IdSequence};
