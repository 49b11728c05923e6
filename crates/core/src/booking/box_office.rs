//! The box office: inventory and ledger behind one lock.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::{
    BookingError, BookingReceipt, Cancellation, Quote, BOOKED_MESSAGE, CANCELLED_MESSAGE,
    REVIEW_MESSAGE,
};
use crate::inventory::{Event, InventoryStore, TicketQuantities};
use crate::ledger::{Order, OrderLedger, ANONYMOUS_USER};
use crate::metrics::{BOOKING_REJECTIONS, ORDERS_TOTAL, TICKETS_REFUNDED, TICKETS_SOLD};
use crate::pricing::PricingQuoter;

struct BoxOfficeState {
    inventory: InventoryStore,
    ledger: OrderLedger,
}

/// Serializes every read and write of the event inventory and order ledger.
///
/// Each operation takes the lock once and holds it for its whole
/// check-quote-mutate sequence, so a booking either commits both the
/// reservation and its order or changes nothing. The lock is never held across
/// an `.await`.
pub struct BoxOffice {
    state: Mutex<BoxOfficeState>,
}

impl BoxOffice {
    pub fn new(event: Event) -> Self {
        Self {
            state: Mutex::new(BoxOfficeState {
                inventory: InventoryStore::new(event),
                ledger: OrderLedger::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BoxOfficeState>, BookingError> {
        self.state.lock().map_err(|_| BookingError::LockPoisoned)
    }

    /// Current event snapshot.
    pub fn event_details(&self) -> Result<Event, BookingError> {
        Ok(self.lock()?.inventory.snapshot())
    }

    /// All recorded orders, oldest first.
    pub fn order_history(&self) -> Result<Vec<Order>, BookingError> {
        Ok(self.lock()?.ledger.history())
    }

    pub fn order_count(&self) -> Result<usize, BookingError> {
        Ok(self.lock()?.ledger.len())
    }

    /// Price a request without committing anything.
    pub fn review(&self, requested: &TicketQuantities) -> Result<Quote, BookingError> {
        match self.try_review(requested) {
            Ok(total_cost) => {
                debug!(total_cost = %total_cost, "Order reviewed");
                Ok(Quote {
                    message: REVIEW_MESSAGE.to_string(),
                    total_cost,
                })
            }
            Err(e) => Err(rejected("review", e)),
        }
    }

    fn try_review(&self, requested: &TicketQuantities) -> Result<Decimal, BookingError> {
        let state = self.lock()?;
        state.inventory.ensure_available(requested)?;
        let total_cost = PricingQuoter::new(&state.inventory).quote(requested)?;
        Ok(total_cost)
    }

    /// Check, price, reserve and record an order as one atomic step.
    pub fn book(&self, requested: TicketQuantities) -> Result<BookingReceipt, BookingError> {
        match self.try_book(requested) {
            Ok(order) => {
                for (name, quantity) in order.quantities.iter() {
                    TICKETS_SOLD
                        .with_label_values(&[name])
                        .inc_by(u64::from(quantity));
                }
                ORDERS_TOTAL.inc();
                info!(
                    order_id = order.id,
                    tickets = order.quantities.total(),
                    total_cost = %order.total_cost,
                    "Tickets booked"
                );
                Ok(BookingReceipt {
                    message: BOOKED_MESSAGE.to_string(),
                    total_cost: order.total_cost,
                    order,
                })
            }
            Err(e) => Err(rejected("book", e)),
        }
    }

    fn try_book(&self, requested: TicketQuantities) -> Result<Order, BookingError> {
        let mut guard = self.lock()?;
        let BoxOfficeState { inventory, ledger } = &mut *guard;

        inventory.ensure_available(&requested)?;
        let total_cost = PricingQuoter::new(inventory).quote(&requested)?;
        inventory.reserve(&requested)?;

        let order = Order {
            id: ledger.next_id(),
            username: ANONYMOUS_USER.to_string(),
            quantities: requested,
            total_cost,
            purchase_time: Utc::now(),
        };
        if let Err(e) = ledger.append(order.clone()) {
            // Put the reservation back so the failed booking leaves no trace
            for (name, quantity) in order.quantities.iter() {
                inventory.refund(name, quantity)?;
            }
            return Err(e.into());
        }
        Ok(order)
    }

    /// Return tickets to a category. Not linked to any recorded order.
    pub fn cancel(&self, category: &str, quantity: u32) -> Result<Cancellation, BookingError> {
        let result = self
            .lock()
            .and_then(|mut state| Ok(state.inventory.refund(category, quantity)?));

        match result {
            Ok(()) => {
                TICKETS_REFUNDED
                    .with_label_values(&[category])
                    .inc_by(u64::from(quantity));
                info!(category, quantity, "Tickets cancelled");
                Ok(Cancellation {
                    message: CANCELLED_MESSAGE.to_string(),
                    category: category.to_string(),
                    quantity,
                })
            }
            Err(e) => Err(rejected("cancel", e)),
        }
    }
}

fn rejected(operation: &str, err: BookingError) -> BookingError {
    BOOKING_REJECTIONS
        .with_label_values(&[operation, err.reason()])
        .inc();
    warn!(operation, reason = err.reason(), "Request rejected: {}", err);
    err
}
