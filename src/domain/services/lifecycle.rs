use crate::domain::models::actor::Actor;
use crate::domain::models::reservation::{PaymentStatus, ReservationStatus};
use crate::domain::models::reservation::ReservationStatus::{Cancelled, CheckedIn, CheckedOut, Confirmed, Pending};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Initiator {
    AdminOnly,
    GuestOrAdmin,
}

const STATUS_EDGES: &[(ReservationStatus, ReservationStatus, Initiator)] = &[
    (Pending, Confirmed, Initiator::AdminOnly),
    (Pending, Cancelled, Initiator::GuestOrAdmin),
    (Confirmed, Cancelled, Initiator::GuestOrAdmin),
    (Confirmed, CheckedIn, Initiator::AdminOnly),
    (CheckedIn, CheckedOut, Initiator::AdminOnly),
];

const PAYMENT_EDGES: &[(PaymentStatus, PaymentStatus)] = &[
    (PaymentStatus::Unpaid, PaymentStatus::Paid),
    (PaymentStatus::Paid, PaymentStatus::Refunded),
];

fn permits(initiator: Initiator, actor: &Actor) -> bool {
    match initiator {
        Initiator::AdminOnly => actor.is_admin(),
        Initiator::GuestOrAdmin => true,
    }
}

pub fn ensure_not_terminal(status: ReservationStatus) -> Result<(), AppError> {
    if status.is_terminal() {
        return Err(AppError::TerminalStateViolation(format!(
            "Reservation is already {}", status.as_str()
        )));
    }
    Ok(())
}

/// Field edits (dates, guests, requests). Guests may only edit stays that have
/// not started; admins may edit anything that is not terminal.
pub fn ensure_editable(actor: &Actor, status: ReservationStatus) -> Result<(), AppError> {
    ensure_not_terminal(status)?;
    if !actor.is_admin() && !matches!(status, Pending | Confirmed) {
        return Err(AppError::ForbiddenTransition(format!(
            "Guests cannot modify a reservation that is {}", status.as_str()
        )));
    }
    Ok(())
}

pub fn ensure_status_transition(
    actor: &Actor,
    from: ReservationStatus,
    to: ReservationStatus,
) -> Result<(), AppError> {
    ensure_not_terminal(from)?;

    let edge = STATUS_EDGES.iter().find(|(f, t, _)| *f == from && *t == to);
    match edge {
        Some((_, _, initiator)) if permits(*initiator, actor) => Ok(()),
        Some(_) => Err(AppError::ForbiddenTransition(format!(
            "Only staff can move a reservation from {} to {}", from.as_str(), to.as_str()
        ))),
        None => Err(AppError::ForbiddenTransition(format!(
            "Cannot move a reservation from {} to {}", from.as_str(), to.as_str()
        ))),
    }
}

/// Returns `Ok(false)` when `to` is already the current payment status, so that
/// repeated gateway callbacks are harmless.
pub fn ensure_payment_transition(
    actor: &Actor,
    from: PaymentStatus,
    to: PaymentStatus,
) -> Result<bool, AppError> {
    if from == to {
        return Ok(false);
    }
    if !actor.is_admin() {
        return Err(AppError::ForbiddenTransition("Guests cannot change payment status".into()));
    }
    if PAYMENT_EDGES.contains(&(from, to)) {
        Ok(true)
    } else {
        Err(AppError::ForbiddenTransition(format!(
            "Cannot change payment status from {} to {}", from.as_str(), to.as_str()
        )))
    }
}
