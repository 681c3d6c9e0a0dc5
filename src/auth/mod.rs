//! Authentication: register, login, password hashing, session tokens.

mod handlers;
mod jwt;
mod service;

pub use handlers::{login, register};
pub use jwt::{Claims, TokenIssuer};
pub use service::AuthAppService;
