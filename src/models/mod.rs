// Data models mapped onto the relational schema

pub mod achievement;
pub mod connection;
pub mod dashboard;
pub mod goal;
pub mod user;
pub mod workout;

pub use achievement::*;
pub use connection::*;
pub use dashboard::*;
pub use goal::*;
pub use user::*;
pub use workout::*;
