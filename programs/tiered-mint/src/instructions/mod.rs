pub mod initialize_sale;
pub mod set_base_uri;
pub mod schedule_presale;
pub mod schedule_sale;
pub mod grant_presale_access;
pub mod revoke_presale_access;
pub mod mint;
pub mod free_mint;
pub mod mint_as_partner;
pub mod create_partnership;
pub mod delete_partnership;
pub mod reserve;
pub mod withdraw;
pub mod emit_sale_quote;
pub mod emit_partnership_quote;
pub mod emit_partner_at;

pub use initialize_sale::*;
pub use set_base_uri::*;
pub use schedule_presale::*;
pub use schedule_sale::*;
pub use grant_presale_access::*;
pub use revoke_presale_access::*;
pub use mint::*;
pub use free_mint::*;
pub use mint_as_partner::*;
pub use create_partnership::*;
pub use delete_partnership::*;
pub use reserve::*;
pub use withdraw::*;
pub use emit_sale_quote::*;
pub use emit_partnership_quote::*;
pub use emit_partner_at::*;
