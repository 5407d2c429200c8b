mod command;
mod notification;
mod schema;
mod types;
mod value_object;

pub use command::*;
pub use notification::*;
pub use schema::*;
pub use types::*;
pub use value_object::*;

pub use enquiry_shared::contact::QueryType;
