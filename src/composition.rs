pub mod assemble;
pub mod model;
