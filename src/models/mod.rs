pub mod context;
pub mod response;

pub use context::AuthContext;
pub use response::{TokenPayload, UserPayload, ValidationResponse};
