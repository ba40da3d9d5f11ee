use thiserror::Error;

/// Client-side validation failures in the booking flow.
///
/// The display text of each variant is the exact Spanish message shown to
/// the guest.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Selecciona fechas válidas")]
    MissingDates,

    #[error("El check-out debe ser posterior al check-in")]
    CheckoutNotAfterCheckin,

    #[error("Selecciona una habitación antes de reservar")]
    NoRoomSelected,
}
