//! Primal to dual mapping (ICN / HICN)

pub mod continuation;
mod growth;
mod mapper;

pub use continuation::{Continuation, negotiate};
pub use mapper::dual_mapper;
