//! Dashboard model: headline counters and sales orders.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::InvoiceId;

/// Headline counters shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub products: u32,
    pub low_stock: u32,
    pub sales_today: Decimal,
    pub orders: u32,
    pub products_trend: String,
    pub low_stock_trend: String,
    pub sales_trend: String,
    pub orders_trend: String,
}

/// Fulfilment state of a sales order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Completed,
    Pending,
    Processing,
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Processing => "Processing",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "GCash")]
    GCash,
    Maya,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "COD")]
    CashOnDelivery,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GCash => write!(f, "GCash"),
            Self::Maya => write!(f, "Maya"),
            Self::BankTransfer => write!(f, "Bank Transfer"),
            Self::CashOnDelivery => write!(f, "COD"),
        }
    }
}

/// One row of the recent-orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOrder {
    pub id: InvoiceId,
    pub customer: String,
    pub city: String,
    /// Number of line items.
    pub items: u32,
    pub total: Decimal,
    pub payment: PaymentMethod,
    pub status: OrderStatus,
    /// Store-local (Asia/Manila) wall-clock time the order was placed.
    pub date: NaiveDateTime,
}
