mod pattern;
pub use pattern::{Params, RoutePattern};

mod table;
pub use table::{Access, Route, RouteEntry, RouteTable};
