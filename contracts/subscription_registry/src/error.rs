use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Registry already initialized
    AlreadyInitialized = 1,
    /// Registry not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the registry owner
    NotAuthorized = 10,

    // ============================================
    // SERVICE ERRORS (20-29)
    // ============================================
    /// Service address has no contract behind it
    InvalidServiceAddress = 20,
    /// Service contract does not answer the plan query with a usable plan
    InvalidServiceContract = 21,

    // ============================================
    // SUBSCRIPTION ERRORS (30-39)
    // ============================================
    /// Account already holds an active subscription to the service
    AlreadySubscribed = 30,
    /// Account holds no subscription to the service
    AccountNotSubscribed = 31,
    /// Current period is already paid; payment not due yet
    SubscriptionIsActive = 32,

    // ============================================
    // AMOUNT/BALANCE ERRORS (40-49)
    // ============================================
    /// Payer balance is below the required amount
    InsufficientFunds = 40,
    /// Asset contract rejected a balance query or transfer
    TransferFailed = 41,
    /// Amount must be positive
    InvalidAmount = 42,
    /// Fee rate above 10_000 basis points
    InvalidFeeRate = 43,
    /// Arithmetic overflow in a payment computation
    Overflow = 44,

    // ============================================
    // COLLABORATOR ERRORS (50-59)
    // ============================================
    /// Credential issuer refused to issue an access pass
    CredentialIssueFailed = 50,

    // ============================================
    // OPERATIONAL ERRORS (60-69)
    // ============================================
    /// Registry is paused
    ContractPaused = 60,
    /// A mutating call for the same (service, account) is already running
    Reentrant = 61,
}
