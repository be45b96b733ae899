//! # Tracker View
//!
//! [`render`] projects an [`OrderTracking`] into what the tracking card shows. It is a
//! pure function of its input; [`TrackerView`]'s `Display` impl draws the card as text.

use crate::model::{
    detail_for, should_show_driver, OrderId, OrderStatus, OrderTracking, StatusColor, StatusIcon,
};
use chrono::SecondsFormat;
use serde::Serialize;
use std::fmt;

pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";
pub const PROGRESS_STEPS: [&str; 4] = ["Confirmed", "Preparing", "Out for Delivery", "Delivered"];

const PROGRESS_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerView {
    pub order_id: OrderId,
    pub icon: StatusIcon,
    pub label: &'static str,
    pub color: StatusColor,
    /// Hidden for cancelled orders.
    pub progress: Option<u8>,
    /// Hidden once delivered or cancelled.
    pub estimated_delivery: Option<String>,
    pub notice: Option<&'static str>,
    /// Present only while out for delivery.
    pub driver: Option<DriverCard>,
    pub timeline: Vec<TimelineRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverCard {
    pub headline: String,
    pub avatar_url: String,
    pub initials: String,
    pub vehicle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub label: &'static str,
    pub at: String,
}

pub fn render(state: &OrderTracking) -> TrackerView {
    let status = state.current_status;
    let detail = detail_for(status);

    let progress = (status != OrderStatus::Cancelled).then_some(detail.progress_percent);
    let estimated_delivery = if status.is_terminal() {
        None
    } else {
        state.estimated_delivery_time.clone()
    };
    let notice = match status {
        OrderStatus::Delivered => Some("Your order has been delivered. Enjoy!"),
        OrderStatus::Cancelled => Some("This order has been cancelled."),
        _ => None,
    };
    let driver = state
        .driver_info
        .as_ref()
        .filter(|_| should_show_driver(status))
        .map(|driver| DriverCard {
            headline: format!("{} is on the way!", driver.name),
            avatar_url: driver
                .avatar_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
            initials: driver.name.chars().take(2).collect::<String>().to_uppercase(),
            vehicle: driver.vehicle.clone(),
        });
    let timeline = state
        .status_history
        .iter()
        .map(|entry| TimelineRow {
            label: detail_for(entry.status).label,
            at: entry.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
        .collect();

    TrackerView {
        order_id: state.id,
        icon: detail.icon,
        label: detail.label,
        color: detail.color,
        progress,
        estimated_delivery,
        notice,
        driver,
        timeline,
    }
}

impl fmt::Display for TrackerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order Tracking")?;
        writeln!(f, "Order ID: {}", self.order_id)?;
        writeln!(f, "{} {}", self.icon.glyph(), self.label)?;
        if let Some(eta) = &self.estimated_delivery {
            writeln!(f, "Estimated Delivery: {eta}")?;
        }
        if let Some(notice) = self.notice {
            writeln!(f, "{notice}")?;
        }
        if let Some(percent) = self.progress {
            let filled = usize::from(percent) * PROGRESS_BAR_WIDTH / 100;
            writeln!(
                f,
                "[{}{}] {percent}%",
                "#".repeat(filled),
                ".".repeat(PROGRESS_BAR_WIDTH - filled)
            )?;
            writeln!(f, "{}", PROGRESS_STEPS.join(" | "))?;
        }
        if let Some(driver) = &self.driver {
            writeln!(f, "({}) {}", driver.initials, driver.headline)?;
            if let Some(vehicle) = &driver.vehicle {
                writeln!(f, "     {vehicle}")?;
            }
        }
        for row in &self.timeline {
            writeln!(f, "  {} {}", row.at, row.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DriverInfo, EtaMessages, TrackingCreate};
    use chrono::{DateTime, TimeZone, Utc};

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn order(driver: Option<DriverInfo>) -> OrderTracking {
        let params = TrackingCreate {
            estimated_delivery_time: Some("6:15 PM - 6:30 PM".to_string()),
            driver_info: driver,
            confirmed_at: None,
        };
        OrderTracking::confirmed(OrderId(1), params, t(0))
    }

    fn john() -> DriverInfo {
        DriverInfo::new("John Doe").with_vehicle("Bike - SGX 1234A")
    }

    #[test]
    fn driver_visible_only_out_for_delivery() {
        let eta = EtaMessages::default();
        let mut state = order(Some(john()));
        let mut visible = vec![render(&state).driver.is_some()];
        for step in 1..=3 {
            state.advance(t(step * 15), &eta);
            visible.push(render(&state).driver.is_some());
        }
        assert_eq!(visible, vec![false, false, true, false]);
    }

    #[test]
    fn driver_card_fields() {
        let eta = EtaMessages::default();
        let mut state = order(Some(john()));
        state.advance(t(15), &eta);
        state.advance(t(30), &eta);

        let card = render(&state).driver.unwrap();
        assert_eq!(card.headline, "John Doe is on the way!");
        assert_eq!(card.initials, "JO");
        assert_eq!(card.avatar_url, PLACEHOLDER_AVATAR);
        assert_eq!(card.vehicle.as_deref(), Some("Bike - SGX 1234A"));
    }

    #[test]
    fn empty_avatar_falls_back_to_placeholder() {
        let eta = EtaMessages::default();
        let mut state = order(Some(john().with_avatar("")));
        state.advance(t(15), &eta);
        state.advance(t(30), &eta);
        assert_eq!(render(&state).driver.unwrap().avatar_url, PLACEHOLDER_AVATAR);

        let mut state = order(Some(john().with_avatar("https://cdn.example/john.png")));
        state.advance(t(15), &eta);
        state.advance(t(30), &eta);
        assert_eq!(
            render(&state).driver.unwrap().avatar_url,
            "https://cdn.example/john.png"
        );
    }

    #[test]
    fn no_driver_card_without_driver_info() {
        let eta = EtaMessages::default();
        let mut state = order(None);
        state.advance(t(15), &eta);
        state.advance(t(30), &eta);
        assert!(render(&state).driver.is_none());
    }

    #[test]
    fn confirmed_card() {
        let view = render(&order(None));
        assert_eq!(view.label, "Order Confirmed");
        assert_eq!(view.color, StatusColor::Blue);
        assert_eq!(view.progress, Some(25));
        assert_eq!(view.estimated_delivery.as_deref(), Some("6:15 PM - 6:30 PM"));
        assert_eq!(view.notice, None);
        assert_eq!(view.timeline.len(), 1);
        assert_eq!(view.timeline[0].at, "2023-11-14T22:13:20Z");
    }

    #[test]
    fn delivered_hides_eta() {
        let eta = EtaMessages::default();
        let mut state = order(None);
        for step in 1..=3 {
            state.advance(t(step * 15), &eta);
        }
        let view = render(&state);
        assert_eq!(view.progress, Some(100));
        assert_eq!(view.estimated_delivery, None);
        assert_eq!(view.notice, Some("Your order has been delivered. Enjoy!"));
    }

    #[test]
    fn cancelled_hides_progress_and_eta() {
        let mut state = order(Some(john()));
        state.cancel(t(5));
        let view = render(&state);
        assert_eq!(view.label, "Order Cancelled");
        assert_eq!(view.progress, None);
        assert_eq!(view.estimated_delivery, None);
        assert_eq!(view.notice, Some("This order has been cancelled."));
        assert!(view.driver.is_none());
    }

    #[test]
    fn text_rendering() {
        let eta = EtaMessages::default();
        let mut state = order(Some(john()));
        state.advance(t(15), &eta);
        state.advance(t(30), &eta);

        let text = render(&state).to_string();
        assert!(text.starts_with("Order Tracking\nOrder ID: ORD1\n"));
        assert!(text.contains("Out for Delivery\n"));
        assert!(text.contains("Estimated Delivery: In 10-15 minutes"));
        assert!(text.contains("[###############.....] 75%"));
        assert!(text.contains("(JO) John Doe is on the way!"));
        assert!(text.contains("Bike - SGX 1234A"));
        assert_eq!(text.matches('Z').count(), 3, "one timeline row per history entry");
    }
}
