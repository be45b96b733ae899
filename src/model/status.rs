//! Order statuses and their presentation metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle stage of a placed order.
///
/// The happy path is linear: `Confirmed -> Preparing -> OutForDelivery -> Delivered`.
/// `Cancelled` is an alternate terminal state reached only through an explicit cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// `Delivered` and `Cancelled` end the lifecycle.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// The next stage on the happy path, or `None` once terminal.
    pub fn successor(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown next to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusIcon {
    CheckCircle,
    Package,
    Truck,
    Home,
    XCircle,
}

impl StatusIcon {
    /// Single-character stand-in used by the text rendering.
    pub fn glyph(self) -> char {
        match self {
            StatusIcon::CheckCircle => '✔',
            StatusIcon::Package => '▣',
            StatusIcon::Truck => '➜',
            StatusIcon::Home => '⌂',
            StatusIcon::XCircle => '✘',
        }
    }
}

/// Color token of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Blue,
    Yellow,
    Orange,
    Green,
    Red,
}

/// Presentation metadata of one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDetail {
    pub label: &'static str,
    pub progress_percent: u8,
    pub color: StatusColor,
    pub icon: StatusIcon,
}

/// Metadata for `status`. Total over the enum: a new status will not compile until it
/// has an entry here.
pub const fn detail_for(status: OrderStatus) -> StatusDetail {
    match status {
        OrderStatus::Confirmed => StatusDetail {
            label: "Order Confirmed",
            progress_percent: 25,
            color: StatusColor::Blue,
            icon: StatusIcon::CheckCircle,
        },
        OrderStatus::Preparing => StatusDetail {
            label: "Preparing Your Order",
            progress_percent: 50,
            color: StatusColor::Yellow,
            icon: StatusIcon::Package,
        },
        OrderStatus::OutForDelivery => StatusDetail {
            label: "Out for Delivery",
            progress_percent: 75,
            color: StatusColor::Orange,
            icon: StatusIcon::Truck,
        },
        OrderStatus::Delivered => StatusDetail {
            label: "Delivered",
            progress_percent: 100,
            color: StatusColor::Green,
            icon: StatusIcon::Home,
        },
        OrderStatus::Cancelled => StatusDetail {
            label: "Order Cancelled",
            progress_percent: 0,
            color: StatusColor::Red,
            icon: StatusIcon::XCircle,
        },
    }
}

/// Driver details are only shown while the order is on the road.
pub fn should_show_driver(status: OrderStatus) -> bool {
    status == OrderStatus::OutForDelivery
}
