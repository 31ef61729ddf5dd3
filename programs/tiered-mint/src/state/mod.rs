pub mod access_list;
pub mod buyer_record;
pub mod partnerships;
pub mod sale_state;

pub use access_list::*;
pub use buyer_record::*;
pub use partnerships::*;
pub use sale_state::*;
