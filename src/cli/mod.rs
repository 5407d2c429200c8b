pub mod schema;
pub mod session;
pub mod submit;
