//! Order Book - committed order lines and receipt aggregation
//!
//! Order lines are append-only: there is no cancellation flow and no
//! mutation after commit. Receipts are a read-only projection for the
//! chef view, resolved against the current menu at display time.

use crate::services::{Cart, MenuService};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use shared::util::{now_millis, snowflake_id};
use shared::{AppError, AppResult, Course, ErrorCode, OrderLine};

/// Chef-facing aggregation of all lines sharing one submission
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub submission_id: i64,
    pub customer_name: String,
    /// UTC millis of the submission
    pub submitted_at: i64,
    pub special_requests: Option<String>,
    /// Resolved lines; lines whose dish was deleted are dropped
    pub items: Vec<ReceiptItem>,
    /// Sum of resolved line totals, 2 decimal places
    pub total: Decimal,
}

/// One resolved line on a receipt
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    pub name: String,
    pub course: Course,
    pub price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Committed order lines
#[derive(Debug, Default)]
pub struct OrderBook {
    lines: Vec<OrderLine>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit the cart as one customer submission
    ///
    /// Produces one line per positive-quantity entry, all sharing one
    /// submission ID, customer name, special-request text and timestamp.
    /// The lines are appended atomically and the cart is cleared. On any
    /// validation failure the order collection and the cart are left
    /// untouched.
    pub fn submit(
        &mut self,
        cart: &mut Cart,
        customer_name: &str,
        special_requests: &str,
    ) -> AppResult<Vec<OrderLine>> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            tracing::warn!("order rejected: customer name missing");
            return Err(AppError::with_message(
                ErrorCode::CustomerNameMissing,
                "Please enter your name",
            ));
        }

        let entries: Vec<(i64, u32)> = cart.entries().filter(|&(_, qty)| qty > 0).collect();
        if entries.is_empty() {
            tracing::warn!("order rejected: cart empty");
            return Err(AppError::with_message(
                ErrorCode::OrderEmpty,
                "Please select at least one item",
            ));
        }

        let submission_id = snowflake_id();
        let submitted_at = now_millis();
        let special_requests = match special_requests.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        let lines: Vec<OrderLine> = entries
            .into_iter()
            .map(|(menu_item, quantity)| OrderLine {
                id: snowflake_id(),
                submission_id,
                menu_item,
                customer_name: customer_name.to_string(),
                quantity,
                special_requests: special_requests.clone(),
                submitted_at,
            })
            .collect();

        self.lines.extend(lines.iter().cloned());
        cart.clear();
        tracing::info!(
            submission_id,
            customer = %customer_name,
            lines = lines.len(),
            "order submitted"
        );
        Ok(lines)
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Group lines into per-submission receipts
    ///
    /// Grouping is by submission ID, so two submissions by the same
    /// customer in the same millisecond stay distinct. Receipts come out
    /// in first-line insertion order. Lines whose dish no longer exists
    /// are dropped from the receipt; the drop is logged so the data loss
    /// stays observable.
    pub fn receipts(&self, menu: &MenuService) -> Vec<Receipt> {
        let mut groups: IndexMap<i64, Receipt> = IndexMap::new();

        for line in &self.lines {
            let receipt = groups.entry(line.submission_id).or_insert_with(|| Receipt {
                submission_id: line.submission_id,
                customer_name: line.customer_name.clone(),
                submitted_at: line.submitted_at,
                special_requests: line.special_requests.clone(),
                items: Vec::new(),
                total: Decimal::ZERO,
            });

            match menu.get(line.menu_item) {
                Some(item) => {
                    let line_total = (item.price * Decimal::from(line.quantity)).round_dp(2);
                    receipt.total += line_total;
                    receipt.items.push(ReceiptItem {
                        name: item.name.clone(),
                        course: item.course,
                        price: item.price,
                        quantity: line.quantity,
                        line_total,
                    });
                }
                None => {
                    tracing::warn!(
                        menu_item = line.menu_item,
                        submission_id = line.submission_id,
                        "order line references a deleted dish, dropped from receipt"
                    );
                }
            }
        }

        groups.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MenuItemDraft;

    fn menu_with(prices: &[(&str, &str)]) -> (MenuService, Vec<i64>) {
        let mut menu = MenuService::new();
        let ids = prices
            .iter()
            .map(|(name, price)| {
                menu.add(&MenuItemDraft::new(*name, "desc", Course::Mains, *price))
                    .unwrap()
                    .id
            })
            .collect();
        (menu, ids)
    }

    #[test]
    fn test_submit_empty_name_fails_and_leaves_state_untouched() {
        let (_, ids) = menu_with(&[("A", "10")]);
        let mut orders = OrderBook::new();
        let mut cart = Cart::new();
        cart.set_quantity(ids[0], 2);

        let err = orders.submit(&mut cart, "   ", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNameMissing);
        assert!(orders.is_empty());
        assert_eq!(cart.quantity(ids[0]), 2);
    }

    #[test]
    fn test_submit_empty_cart_fails() {
        let mut orders = OrderBook::new();
        let mut cart = Cart::new();
        let err = orders.submit(&mut cart, "Alice", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
        assert!(orders.is_empty());
    }

    #[test]
    fn test_submit_creates_one_line_per_entry_with_shared_fields() {
        let (_, ids) = menu_with(&[("A", "10"), ("B", "20")]);
        let mut orders = OrderBook::new();
        let mut cart = Cart::new();
        cart.set_quantity(ids[0], 2);
        cart.set_quantity(ids[1], 1);

        let lines = orders.submit(&mut cart, " Alice ", " no onions ").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(orders.len(), 2);
        assert!(cart.is_empty());

        let first = &lines[0];
        for line in &lines {
            assert_eq!(line.customer_name, "Alice");
            assert_eq!(line.submission_id, first.submission_id);
            assert_eq!(line.submitted_at, first.submitted_at);
            assert_eq!(line.special_requests.as_deref(), Some("no onions"));
            assert!(line.quantity >= 1);
        }
        assert_ne!(lines[0].id, lines[1].id);
    }

    #[test]
    fn test_submit_blank_special_requests_is_none() {
        let (_, ids) = menu_with(&[("A", "10")]);
        let mut orders = OrderBook::new();
        let mut cart = Cart::new();
        cart.set_quantity(ids[0], 1);
        let lines = orders.submit(&mut cart, "Alice", "   ").unwrap();
        assert_eq!(lines[0].special_requests, None);
    }

    #[test]
    fn test_receipts_group_by_submission() {
        let (menu, ids) = menu_with(&[("A", "10.00"), ("B", "5.00")]);
        let mut orders = OrderBook::new();
        let mut cart = Cart::new();

        cart.set_quantity(ids[0], 2);
        cart.set_quantity(ids[1], 3);
        orders.submit(&mut cart, "Alice", "").unwrap();

        cart.set_quantity(ids[0], 1);
        orders.submit(&mut cart, "Bob", "extra hot").unwrap();

        let receipts = orders.receipts(&menu);
        assert_eq!(receipts.len(), 2);

        assert_eq!(receipts[0].customer_name, "Alice");
        assert_eq!(receipts[0].items.len(), 2);
        assert_eq!(receipts[0].total, "35.00".parse().unwrap());
        assert_eq!(receipts[0].special_requests, None);

        assert_eq!(receipts[1].customer_name, "Bob");
        assert_eq!(receipts[1].total, "10.00".parse().unwrap());
        assert_eq!(receipts[1].special_requests.as_deref(), Some("extra hot"));
    }

    #[test]
    fn test_same_customer_same_instant_submissions_stay_distinct() {
        let (menu, ids) = menu_with(&[("A", "10")]);
        let mut orders = OrderBook::new();
        let mut cart = Cart::new();

        // Two commits back to back, very likely within one millisecond
        cart.set_quantity(ids[0], 1);
        orders.submit(&mut cart, "Alice", "").unwrap();
        cart.set_quantity(ids[0], 2);
        orders.submit(&mut cart, "Alice", "").unwrap();

        assert_eq!(orders.receipts(&menu).len(), 2);
    }

    #[test]
    fn test_deleting_dish_keeps_lines_but_drops_them_from_receipts() {
        let (mut menu, ids) = menu_with(&[("A", "10.00"), ("B", "5.00")]);
        let mut orders = OrderBook::new();
        let mut cart = Cart::new();
        cart.set_quantity(ids[0], 1);
        cart.set_quantity(ids[1], 2);
        orders.submit(&mut cart, "Alice", "").unwrap();

        menu.remove(ids[1]).unwrap();

        // The lines survive the delete
        assert_eq!(orders.len(), 2);

        let receipts = orders.receipts(&menu);
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].items.len(), 1);
        assert_eq!(receipts[0].items[0].name, "A");
        assert_eq!(receipts[0].total, "10.00".parse().unwrap());
    }
}
