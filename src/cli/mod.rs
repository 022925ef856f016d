mod root;
pub use root::*;

pub mod navigate;
pub mod price;
pub mod routes;
