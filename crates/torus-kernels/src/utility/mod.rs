pub mod eliminate_zeros;
pub mod util;
