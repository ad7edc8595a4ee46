use super::*;
use core::ops::RangeInclusive;

/// Issuance counter. The next token ID is always `minted + 1`.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct SupplyCounter {
    /// Number of tokens issued so far, which is also the highest issued ID.
    minted: u32,
    /// Upper bound on `minted`, fixed at init.
    cap: u32,
}

impl SupplyCounter {
    pub fn new(cap: u32) -> ContractResult<Self> {
        ensure!(cap > 0, CustomContractError::InvalidSupplyCap.into());
        Ok(Self { minted: 0, cap })
    }

    #[inline(always)]
    pub fn minted(&self) -> u32 {
        self.minted
    }

    #[inline(always)]
    pub fn cap(&self) -> u32 {
        self.cap
    }

    pub fn remaining(&self) -> u32 {
        self.cap - self.minted
    }

    /// Draws `count` fresh consecutive IDs.
    ///
    /// Results in an error, leaving the counter untouched, if
    /// - `count` is zero
    /// - the batch would take the counter past the cap
    pub fn reserve(&mut self, count: u32) -> ContractResult<RangeInclusive<u32>> {
        ensure!(count > 0, CustomContractError::InvalidBatchSize.into());
        ensure!(
            count <= self.remaining(),
            CustomContractError::CapacityExceeded.into()
        );

        let first = self.minted + 1;
        self.minted += count;
        Ok(first..=self.minted)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_zero_cap_rejected() {
        claim_eq!(
            SupplyCounter::new(0),
            Err(CustomContractError::InvalidSupplyCap.into())
        );
    }

    #[concordium_test]
    fn test_reserve_is_sequential() {
        let mut supply = SupplyCounter::new(10).expect_report("Valid cap");

        let first = supply.reserve(2).expect_report("Reserve within cap");
        claim_eq!(first, 1..=2);

        let second = supply.reserve(3).expect_report("Reserve within cap");
        claim_eq!(second, 3..=5);

        claim_eq!(supply.minted(), 5);
        claim_eq!(supply.remaining(), 5);
    }

    #[concordium_test]
    fn test_reserve_fills_cap_exactly() {
        let mut supply = SupplyCounter::new(3).expect_report("Valid cap");

        claim_eq!(supply.reserve(3), Ok(1..=3));
        claim_eq!(supply.remaining(), 0);
        claim_eq!(
            supply.reserve(1),
            Err(CustomContractError::CapacityExceeded.into())
        );
    }

    #[concordium_test]
    fn test_failed_reserve_keeps_counter() {
        let mut supply = SupplyCounter::new(4).expect_report("Valid cap");
        supply.reserve(3).expect_report("Reserve within cap");

        claim_eq!(
            supply.reserve(2),
            Err(CustomContractError::CapacityExceeded.into())
        );
        claim_eq!(
            supply.reserve(0),
            Err(CustomContractError::InvalidBatchSize.into())
        );
        claim_eq!(supply.minted(), 3);

        // The remaining slot is still available.
        claim_eq!(supply.reserve(1), Ok(4..=4));
    }

    #[concordium_test]
    fn test_large_request_does_not_overflow() {
        let mut supply = SupplyCounter::new(u32::MAX).expect_report("Valid cap");
        supply.reserve(10).expect_report("Reserve within cap");

        claim_eq!(
            supply.reserve(u32::MAX),
            Err(CustomContractError::CapacityExceeded.into())
        );
        claim_eq!(supply.minted(), 10);
    }
}
