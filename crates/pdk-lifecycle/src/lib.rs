//! Order lifecycle policy for the ParcelDesk admin surface.
//!
//! # Design
//!
//! A delivery order moves through a strictly linear lifecycle. The policy is
//! an explicit state machine with a *total* function from status to at most
//! one successor: [`OrderStatus::next`] returns the single legal next status,
//! or `None` once a terminal status is reached. Callers that need a fallible
//! form use [`OrderStatus::advance`], which returns [`TransitionError`] for
//! terminal statuses.
//!
//! Legality lives here and only here. The API client consults this policy
//! before issuing a status write, and the CLI only ever offers the one legal
//! action per order, so an illegal transition is a programming error rather
//! than something an operator can request.
//!
//! # State diagram
//!
//! ```text
//! PENDING ─► CONFIRMED ─► READY_FOR_PICKUP ─► PICKED_UP ─► IN_TRANSIT ─► DELIVERED (term.)
//!
//!            CANCELLED (term.)        FAILED_DELIVERY (term.)
//! ```
//!
//! `CANCELLED` and `FAILED_DELIVERY` are absorbing states reached only by
//! external systems (the ordering service, the courier backend); the policy
//! offers no transition into or out of them.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// All statuses a delivery order can occupy. Closed set; the wire format is
/// the upstream API's SCREAMING_SNAKE_CASE spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created by the ordering system; not yet accepted by operations.
    Pending,
    /// Accepted; awaiting preparation at the store.
    Confirmed,
    /// Package ready; a courier may collect it.
    ReadyForPickup,
    /// Courier has the package.
    PickedUp,
    /// On the way to the delivery address.
    InTransit,
    /// Handed over to the recipient. **Terminal.**
    Delivered,
    /// Cancelled upstream. **Terminal.**
    Cancelled,
    /// Delivery attempt failed and was closed out upstream. **Terminal.**
    FailedDelivery,
}

impl OrderStatus {
    /// Wire spelling, as sent to and received from the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::ReadyForPickup => "READY_FOR_PICKUP",
            OrderStatus::PickedUp => "PICKED_UP",
            OrderStatus::InTransit => "IN_TRANSIT",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::FailedDelivery => "FAILED_DELIVERY",
        }
    }

    /// Parse the wire spelling (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, ParseStatusError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "READY_FOR_PICKUP" => Ok(OrderStatus::ReadyForPickup),
            "PICKED_UP" => Ok(OrderStatus::PickedUp),
            "IN_TRANSIT" => Ok(OrderStatus::InTransit),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            "FAILED_DELIVERY" => Ok(OrderStatus::FailedDelivery),
            _ => Err(ParseStatusError {
                input: s.trim().to_string(),
            }),
        }
    }

    /// Returns `true` if no further transition is permitted.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::FailedDelivery
        )
    }

    /// The single legal next status, or `None` for terminal statuses.
    ///
    /// Total over the enum: every status maps to exactly one answer, there is
    /// no branching and no skipping.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::ReadyForPickup),
            OrderStatus::ReadyForPickup => Some(OrderStatus::PickedUp),
            OrderStatus::PickedUp => Some(OrderStatus::InTransit),
            OrderStatus::InTransit => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::FailedDelivery => None,
        }
    }

    /// Fallible form of [`next`](Self::next).
    ///
    /// # Errors
    /// Returns [`TransitionError`] when `self` is terminal. The caller must
    /// not have offered the action in the first place; treat the error as a
    /// refusal, not as something to retry.
    pub fn advance(&self) -> Result<OrderStatus, TransitionError> {
        self.next().ok_or(TransitionError { from: *self })
    }

    /// Iterate the remaining lifecycle starting *after* `self`.
    ///
    /// `Pending.sequence_from()` yields CONFIRMED, READY_FOR_PICKUP,
    /// PICKED_UP, IN_TRANSIT, DELIVERED and then stops. Terminal statuses
    /// yield nothing.
    pub fn sequence_from(&self) -> impl Iterator<Item = OrderStatus> {
        std::iter::successors(self.next(), |s| s.next())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Returned when an advance is requested from a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionError {
    /// The terminal status the order was in when the advance was requested.
    pub from: OrderStatus,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no transition permitted from terminal status {}", self.from)
    }
}

impl std::error::Error for TransitionError {}

/// Returned by [`OrderStatus::parse`] for unknown spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    pub input: String,
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid order status '{}'. expected one of: PENDING | CONFIRMED | READY_FOR_PICKUP \
             | PICKED_UP | IN_TRANSIT | DELIVERED | CANCELLED | FAILED_DELIVERY",
            self.input
        )
    }
}

impl std::error::Error for ParseStatusError {}

// ---------------------------------------------------------------------------
// NotificationStatus
// ---------------------------------------------------------------------------

/// Read-state of a payment notification. Transitions one direction only:
/// `UNREAD → READ`, exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    Unread,
    Read,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStatus::Unread => "UNREAD",
            NotificationStatus::Read => "READ",
        }
    }

    /// Apply the mark-as-read transition. Idempotent: marking an already-read
    /// notification is a no-op.
    pub fn mark_read(self) -> NotificationStatus {
        NotificationStatus::Read
    }

    /// `true` when marking read would actually change the record. Callers
    /// use this to skip the network write for an already-read notification.
    pub fn needs_read_write(self) -> bool {
        matches!(self, NotificationStatus::Unread)
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn next_matches_transition_table() {
        assert_eq!(Pending.next(), Some(Confirmed));
        assert_eq!(Confirmed.next(), Some(ReadyForPickup));
        assert_eq!(ReadyForPickup.next(), Some(PickedUp));
        assert_eq!(PickedUp.next(), Some(InTransit));
        assert_eq!(InTransit.next(), Some(Delivered));
        assert_eq!(Delivered.next(), None);
        assert_eq!(Cancelled.next(), None);
        assert_eq!(FailedDelivery.next(), None);
    }

    #[test]
    fn terminal_statuses_are_exactly_the_three() {
        for s in [Pending, Confirmed, ReadyForPickup, PickedUp, InTransit] {
            assert!(!s.is_terminal(), "{s} must not be terminal");
            assert!(s.advance().is_ok());
        }
        for s in [Delivered, Cancelled, FailedDelivery] {
            assert!(s.is_terminal(), "{s} must be terminal");
            let err = s.advance().unwrap_err();
            assert_eq!(err.from, s);
        }
    }

    #[test]
    fn sequence_from_pending_walks_the_full_chain_and_halts() {
        let walked: Vec<OrderStatus> = Pending.sequence_from().collect();
        assert_eq!(
            walked,
            vec![Confirmed, ReadyForPickup, PickedUp, InTransit, Delivered]
        );
    }

    #[test]
    fn sequence_from_terminal_is_empty() {
        assert_eq!(Delivered.sequence_from().count(), 0);
        assert_eq!(Cancelled.sequence_from().count(), 0);
        assert_eq!(FailedDelivery.sequence_from().count(), 0);
    }

    #[test]
    fn advance_from_pending_yields_confirmed() {
        assert_eq!(Pending.advance().unwrap(), Confirmed);
    }

    #[test]
    fn advance_from_delivered_is_refused() {
        let err = Delivered.advance().unwrap_err();
        assert_eq!(err.from, Delivered);
        assert!(err.to_string().contains("DELIVERED"));
    }

    #[test]
    fn wire_spelling_round_trips() {
        for s in [
            Pending,
            Confirmed,
            ReadyForPickup,
            PickedUp,
            InTransit,
            Delivered,
            Cancelled,
            FailedDelivery,
        ] {
            assert_eq!(OrderStatus::parse(s.as_str()).unwrap(), s);
        }
        assert_eq!(OrderStatus::parse("ready_for_pickup").unwrap(), ReadyForPickup);
        assert!(OrderStatus::parse("SHIPPED").is_err());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&ReadyForPickup).unwrap();
        assert_eq!(json, "\"READY_FOR_PICKUP\"");
        let back: OrderStatus = serde_json::from_str("\"FAILED_DELIVERY\"").unwrap();
        assert_eq!(back, FailedDelivery);
    }

    #[test]
    fn mark_read_is_one_directional_and_idempotent() {
        let first = NotificationStatus::Unread.mark_read();
        assert_eq!(first, NotificationStatus::Read);
        // Second application changes nothing.
        assert_eq!(first.mark_read(), NotificationStatus::Read);

        assert!(NotificationStatus::Unread.needs_read_write());
        assert!(!NotificationStatus::Read.needs_read_write());
    }
}
