pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTusker, Tusker, TuskerUpdate};
pub use repository::{TuskerReadRepository, TuskerWriteRepository};
pub use value_objects::{TuskerId, TuskerName};
