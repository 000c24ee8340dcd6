use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    NotHolder = 3,
    NotOperator = 6,

    // Pass errors
    PassNotFound = 4,
    TransferRestricted = 5,
    Overflow = 7,
}
