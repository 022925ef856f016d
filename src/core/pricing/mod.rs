mod window;
pub use window::{effective_price, PriceWindow};
pub(crate) use window::{parse_amount, parse_time};

mod plan;
pub use plan::Plan;
