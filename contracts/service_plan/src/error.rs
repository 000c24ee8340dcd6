use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Plan already published
    AlreadyInitialized = 1,
    /// Plan not published yet
    NotInitialized = 2,

    // ============================================
    // PLAN ERRORS (20-29)
    // ============================================
    /// Billing period must be at least one second
    InvalidPeriod = 20,
    /// Price must not be negative
    InvalidPrice = 21,
}
