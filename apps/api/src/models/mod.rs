pub mod opportunity;
pub mod recommendation;
pub mod value;
