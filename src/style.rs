pub mod assign;
pub mod intent;
