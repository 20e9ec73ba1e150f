//! Static dashboard data and its accessors.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use stocksense_types::constants::DEFAULT_RECENT_ORDERS;
use stocksense_types::{DashboardOrder, DashboardStats, InvoiceId, OrderStatus, PaymentMethod};

/// Counters and orders backing the dashboard. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    /// Newest first; accessors keep this order.
    pub orders: Vec<DashboardOrder>,
}

impl DashboardData {
    /// The demo figures shown on the StockSense dashboard.
    #[must_use]
    pub fn mock() -> Self {
        let stats = DashboardStats {
            products: 2543,
            low_stock: 23,
            sales_today: Decimal::new(724_500, 0),
            orders: 156,
            products_trend: "+12%".into(),
            low_stock_trend: "-5%".into(),
            sales_trend: "+8.3%".into(),
            orders_trend: "+23".into(),
        };

        let orders = vec![
            order(
                "INV-2024-1001",
                "Juan Dela Cruz",
                "Mandaluyong City",
                3,
                Decimal::new(14_275, 0),
                PaymentMethod::GCash,
                OrderStatus::Completed,
                manila_local(28, 10, 30),
            ),
            order(
                "INV-2024-1002",
                "Maria Santos",
                "Quezon City",
                1,
                Decimal::new(529_999, 2),
                PaymentMethod::Maya,
                OrderStatus::Pending,
                manila_local(28, 9, 15),
            ),
            order(
                "INV-2024-1003",
                "Jose Rizal III",
                "Calamba, Laguna",
                5,
                Decimal::new(3_256_750, 2),
                PaymentMethod::BankTransfer,
                OrderStatus::Processing,
                manila_local(27, 16, 20),
            ),
            order(
                "INV-2024-1004",
                "Ana Marie Reyes",
                "Cebu City",
                2,
                Decimal::new(845_600, 2),
                PaymentMethod::CashOnDelivery,
                OrderStatus::Completed,
                manila_local(27, 14, 45),
            ),
            order(
                "INV-2024-1005",
                "Carlos Mercado",
                "Davao City",
                4,
                Decimal::new(2_493_225, 2),
                PaymentMethod::GCash,
                OrderStatus::Completed,
                manila_local(27, 11, 30),
            ),
        ];

        Self { stats, orders }
    }
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    customer: &str,
    city: &str,
    items: u32,
    total: Decimal,
    payment: PaymentMethod,
    status: OrderStatus,
    date: NaiveDateTime,
) -> DashboardOrder {
    DashboardOrder {
        id: InvoiceId::new(id),
        customer: customer.into(),
        city: city.into(),
        items,
        total,
        payment,
        status,
        date,
    }
}

/// February 2024 wall-clock time in the store's zone.
fn manila_local(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// Read-only view over [`DashboardData`]. Every accessor hands out an owned
/// copy so callers cannot alter the shared figures.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: DashboardData,
}

impl Dashboard {
    #[must_use]
    pub fn new(data: DashboardData) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        self.data.stats.clone()
    }

    /// The first `limit` orders (5 when `None`), in list order.
    #[must_use]
    pub fn recent_orders(&self, limit: Option<usize>) -> Vec<DashboardOrder> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_ORDERS);
        self.data.orders.iter().take(limit).cloned().collect()
    }

    #[must_use]
    pub fn all_orders(&self) -> Vec<DashboardOrder> {
        self.data.orders.clone()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardData::mock())
    }
}
