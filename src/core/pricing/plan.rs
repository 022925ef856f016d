use rust_decimal::Decimal;
use serde::Deserialize;

use crate::common::{Error, Time};
use crate::core::pricing::window::{
    deserialize_amount, deserialize_optional_amount, deserialize_optional_time, PriceWindow,
};

// Subscription plan record as returned by the billing API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub discount: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub start_date: Option<Time>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub end_date: Option<Time>,
}

impl Plan {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json).map_err(Error::from)?)
    }

    pub fn list_from_json(json: &str) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_str(json).map_err(Error::from)?)
    }

    // Without a discount value the window can never lower the price.
    pub fn window(&self) -> PriceWindow {
        PriceWindow {
            price: self.price,
            discount: self.discount.unwrap_or(self.price),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    pub fn effective_price(&self, now: Time) -> Decimal {
        self.window().effective_price(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::window::parse_time;

    #[test]
    fn parse_backend_record() {
        let plan = Plan::from_json(
            r#"{
                "id": "pro",
                "name": "Pro academy",
                "price": 100,
                "discount": "80.50",
                "startDate": "2024-01-01T00:00:00Z",
                "endDate": "2024-01-31"
            }"#,
        )
        .unwrap();

        assert_eq!(plan.price, Decimal::from(100));
        assert_eq!(plan.discount, Some(Decimal::new(8050, 2)));
        assert_eq!(
            plan.effective_price(parse_time("2024-01-15").unwrap()),
            Decimal::new(8050, 2)
        );
        assert_eq!(
            plan.effective_price(parse_time("2024-02-01").unwrap()),
            Decimal::from(100)
        );
    }

    #[test]
    fn null_dates_are_absent() {
        let plan =
            Plan::from_json(r#"{"id":"basic","price":40,"discount":30,"startDate":null,"endDate":""}"#)
                .unwrap();
        assert_eq!(plan.start_date, None);
        assert_eq!(plan.end_date, None);
        assert_eq!(
            plan.effective_price(parse_time("2024-01-15").unwrap()),
            Decimal::from(40)
        );
    }

    #[test]
    fn non_string_dates_are_absent() {
        let plan = Plan::from_json(
            r#"{"id":"a","price":100,"discount":80,"startDate":1704067200000,"endDate":{"at":"2024-01-31"}}"#,
        )
        .unwrap();
        assert_eq!(plan.start_date, None);
        assert_eq!(plan.end_date, None);
        assert_eq!(
            plan.effective_price(parse_time("2024-01-15").unwrap()),
            Decimal::from(100)
        );

        let plan =
            Plan::from_json(r#"{"id":"b","price":50,"discount":40,"startDate":true,"endDate":"soon"}"#)
                .unwrap();
        assert_eq!(plan.window().start_date, None);
        assert_eq!(plan.window().end_date, None);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        for json in [
            r#"{"id":"a","price":-5}"#,
            r#"{"id":"a","price":100,"discount":"-1"}"#,
        ] {
            assert!(
                matches!(Plan::from_json(json), Err(crate::EdrakError::Json(_))),
                "{}",
                json
            );
        }
        assert_eq!(
            Plan::from_json(r#"{"id":"a","price":0,"discount":null}"#)
                .unwrap()
                .discount,
            None
        );
    }

    #[test]
    fn missing_discount_keeps_price() {
        let plan = Plan::from_json(
            r#"{"id":"free","price":0,"startDate":"2024-01-01","endDate":"2024-12-31"}"#,
        )
        .unwrap();
        assert_eq!(
            plan.effective_price(parse_time("2024-06-01").unwrap()),
            Decimal::ZERO
        );
    }

    #[test]
    fn list_of_plans() {
        let plans = Plan::list_from_json(r#"[{"id":"a","price":1},{"id":"b","price":2}]"#).unwrap();
        assert_eq!(plans.len(), 2);
    }

    #[test]
    fn invalid_record() {
        assert!(matches!(
            Plan::from_json(r#"{"id":"a"}"#),
            Err(crate::EdrakError::Json(_))
        ));
    }
}
