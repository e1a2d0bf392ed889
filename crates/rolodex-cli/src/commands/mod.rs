pub mod export;
pub mod extract;
