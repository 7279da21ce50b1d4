//! Heuristic opponent built on the core rules: legal-play enumeration plus a
//! policy-driven decision engine for plays and bids.

mod decide;
mod enumerate;

pub use decide::*;
pub use enumerate::*;
