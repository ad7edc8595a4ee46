use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// The entrypoint is not open in the active sale phase (Error code: -4).
    WrongPhase,
    /// Requested zero tokens (Error code: -5).
    InvalidBatchSize,
    /// Purchase would take the requester over the per-phase ceiling
    /// (Error code: -6).
    QuotaExceeded,
    /// Attached amount differs from count times the unit price (Error code: -7).
    IncorrectPayment,
    /// Batch would exceed the total supply cap (Error code: -8).
    CapacityExceeded,
    /// Per-caller ceiling must be positive (Error code: -9).
    InvalidQuota,
    /// Total supply cap must be positive (Error code: -10).
    InvalidSupplyCap,
    /// Failed to invoke a contract (Error code: -11).
    InvokeContractError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
