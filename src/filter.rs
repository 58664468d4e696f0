//! Free-text and status filtering of the order collection.

use crate::orders::{Order, OrderStatus};

/// Search criteria for narrowing the order list.
///
/// Unset (or blank) criteria are pass-throughs, so the default filter keeps
/// everything. Applying the same filter twice yields the same result as
/// applying it once, and the result preserves collection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderFilter {
    term: Option<String>,
    status: Option<OrderStatus>,
}

impl OrderFilter {
    /// Builds a filter from an optional search term and status.
    ///
    /// The term matches case-insensitively as a substring of the customer
    /// name, product type, or country. Blank terms are treated as unset.
    #[must_use]
    pub fn new(term: Option<&str>, status: Option<OrderStatus>) -> Self {
        let term = term
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        Self { term, status }
    }

    /// Whether a single order satisfies the criteria.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(term) = &self.term {
            let hit = [&order.customer_name, &order.product_type, &order.country]
                .into_iter()
                .any(|field| field.to_lowercase().contains(term));

            if !hit {
                return false;
            }
        }

        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }

        true
    }

    /// Returns the matching subset, in collection order.
    #[must_use]
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::Date;
    use rust_decimal::dec;

    use crate::orders::OrderDraft;

    use super::*;

    fn order(customer: &str, product: &str, country: &str, status: OrderStatus) -> Order {
        Order::from_draft(OrderDraft {
            date_client: Date::constant(2024, 1, 1),
            date_ali: Date::constant(2024, 1, 2),
            date_estimate: None,
            date_delivered: None,
            product_type: product.to_string(),
            ali_link: String::new(),
            customer_name: customer.to_string(),
            customer_address: String::new(),
            country: country.to_string(),
            sale_price: dec!(20),
            cost_price: dec!(10),
            status,
            notes: String::new(),
        })
    }

    fn sample() -> Vec<Order> {
        vec![
            order("Ada Lovelace", "Mug", "France", OrderStatus::Pending),
            order("Grace Hopper", "Poster", "Spain", OrderStatus::Delivered),
            order("Alan Turing", "Mug", "United Kingdom", OrderStatus::Problem),
        ]
    }

    #[test]
    fn default_filter_keeps_everything() {
        let orders = sample();
        let kept = OrderFilter::default().apply(&orders);

        assert_eq!(kept.len(), orders.len());
    }

    #[test]
    fn term_matches_any_of_the_three_fields_case_insensitively() {
        let orders = sample();

        let by_customer = OrderFilter::new(Some("ada"), None).apply(&orders);
        let by_product = OrderFilter::new(Some("MUG"), None).apply(&orders);
        let by_country = OrderFilter::new(Some("kingdom"), None).apply(&orders);

        assert_eq!(by_customer.len(), 1);
        assert_eq!(by_product.len(), 2);
        assert_eq!(by_country.len(), 1);
    }

    #[test]
    fn blank_term_is_a_pass_through() {
        let orders = sample();
        let kept = OrderFilter::new(Some("   "), None).apply(&orders);

        assert_eq!(kept.len(), orders.len());
    }

    #[test]
    fn status_must_match_exactly() {
        let orders = sample();
        let kept = OrderFilter::new(None, Some(OrderStatus::Delivered)).apply(&orders);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].customer_name, "Grace Hopper");
    }

    #[test]
    fn term_and_status_are_conjunctive() {
        let orders = sample();
        let kept = OrderFilter::new(Some("mug"), Some(OrderStatus::Problem)).apply(&orders);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].customer_name, "Alan Turing");
    }

    #[test]
    fn filtering_is_idempotent_and_preserves_order() {
        let orders = sample();
        let filter = OrderFilter::new(Some("mug"), None);

        let once: Vec<Order> = filter.apply(&orders).into_iter().cloned().collect();
        let twice = filter.apply(&once);

        assert_eq!(once.len(), twice.len());
        assert_eq!(once[0].customer_name, "Ada Lovelace");
        assert_eq!(once[1].customer_name, "Alan Turing");
    }
}
