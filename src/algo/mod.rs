mod mincut;

pub use mincut::*;
