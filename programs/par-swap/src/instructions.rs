#![allow(ambiguous_glob_reexports)]

pub mod initialize;
pub mod swap_a_to_b;
pub mod swap_b_to_a;
pub mod swap_plan;

pub use initialize::*;
pub use swap_a_to_b::*;
pub use swap_b_to_a::*;
pub use swap_plan::*;
