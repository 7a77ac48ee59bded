mod mask;
mod free_list;

pub use mask::*;
pub use free_list::*;
