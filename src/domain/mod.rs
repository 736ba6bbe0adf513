pub mod nation;
pub mod player;
pub mod stat_table;

pub use nation::*;
pub use player::*;
pub use stat_table::*;
