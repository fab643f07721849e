pub mod add;
pub mod chat;
pub mod schema;
pub mod tokens;
