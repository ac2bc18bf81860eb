pub mod a1_notation;
pub mod cell;
pub mod ranges;
