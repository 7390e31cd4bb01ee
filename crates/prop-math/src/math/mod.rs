//! Core math modules.

pub mod stable;
pub mod special;
pub mod binomial;
pub mod chisquare;
pub mod proportion;
