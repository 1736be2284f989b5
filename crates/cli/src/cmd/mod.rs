pub mod output;
pub mod transpile;
