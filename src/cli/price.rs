use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use rust_decimal::Decimal;

use crate::core::pricing::{effective_price, parse_amount, parse_time, Plan};
use crate::{Result, Time};

/// Compute the effective price
#[derive(Args, Debug)]
pub struct PriceCommand {
    /// Regular price
    #[arg(long, required_unless_present = "plan")]
    price: Option<String>,
    /// Discounted price
    #[arg(long, required_unless_present = "plan")]
    discount: Option<String>,
    /// Discount window start (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,
    /// Discount window end (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,
    /// Evaluation instant, defaults to now
    #[arg(long)]
    now: Option<String>,
    /// Billing plan record (JSON) instead of explicit values
    #[arg(long, conflicts_with_all = ["price", "discount", "start", "end"])]
    plan: Option<PathBuf>,
}

impl PriceCommand {
    pub async fn run(self) -> Result<()> {
        println!("{}", self.evaluate().await?);

        Ok(())
    }

    pub async fn evaluate(&self) -> Result<Decimal> {
        let now = match self.now.as_deref() {
            Some(now) => parse_time(now)?,
            None => Utc::now(),
        };

        let price = match self.plan {
            Some(ref path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                Plan::from_json(&raw)?.effective_price(now)
            }
            None => effective_price(
                parse_amount(self.price.as_deref().unwrap_or_default())?,
                parse_amount(self.discount.as_deref().unwrap_or_default())?,
                optional_time(self.start.as_deref())?,
                optional_time(self.end.as_deref())?,
                now,
            ),
        };

        Ok(price)
    }
}

fn optional_time(input: Option<&str>) -> crate::common::Result<Option<Time>> {
    input.map(parse_time).transpose()
}
