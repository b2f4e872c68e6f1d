pub mod circshift;
pub mod wrap;
