pub mod fields;
pub mod merchant;
pub mod order;
pub mod payment_link;
pub mod response;

pub use fields::{DataReader, FieldValue, FromData};
pub use merchant::*;
pub use order::*;
pub use payment_link::*;
pub use response::ApiResponse;
