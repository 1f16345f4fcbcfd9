//! Modelos del dominio
//!
//! Structs que mapean a las tablas PostgreSQL.

pub mod car;
pub mod location;

pub use car::Car;
pub use location::Location;
