//! Wind restriction continuation authority.
//!
//! Answers: "This train is crawling at 10 MPH under a wind warning; may it
//! carry on into the next block without stopping?" and, when it may, issues
//! the Block Limit Instruction and its Field Operations Directive.

pub mod authority;
pub mod config;
pub mod domain;
pub mod rules;
pub mod scenarios;
pub mod web;
