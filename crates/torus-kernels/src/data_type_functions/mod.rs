pub mod astype;
pub mod dense;
