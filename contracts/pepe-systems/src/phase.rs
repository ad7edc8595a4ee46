use super::*;

/// Sale mode gating which purchase entrypoint is open.
/// Serialized as `0 = Inactive`, `1 = Presale`, `2 = Public`.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub enum SalePhase {
    Inactive,
    Presale,
    Public,
}

/// Per-phase purchase ceiling and price.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct PhaseLimits {
    /// Maximum number of tokens a single address may buy in the phase.
    pub max_per_caller: u32,
    /// Price of one token.
    pub unit_price: Amount,
}

impl PhaseLimits {
    /// Exact payment for `count` tokens, or `None` if it does not fit in an
    /// `Amount`.
    pub fn price_for(&self, count: u32) -> Option<Amount> {
        self.unit_price
            .micro_ccd
            .checked_mul(u64::from(count))
            .map(Amount::from_micro_ccd)
    }

    /// Whether `count` more tokens fit under the ceiling for someone who has
    /// already claimed `claimed`.
    pub fn allows(&self, claimed: u32, count: u32) -> bool {
        claimed
            .checked_add(count)
            .map_or(false, |total| total <= self.max_per_caller)
    }
}

/// A single administrative change to the sale configuration.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub enum ConfigUpdate {
    /// Switch the active phase.
    SaleStatus(SalePhase),
    /// Per-caller ceiling during the presale.
    PresaleMaxMint(u32),
    /// Per-caller ceiling during the public sale.
    PublicMaxMint(u32),
    /// Presale unit price.
    LowFee(Amount),
    /// Public sale unit price.
    BaseFee(Amount),
}

/// Active phase together with the limits of both selling phases.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct SaleConfig {
    phase: SalePhase,
    presale: PhaseLimits,
    public: PhaseLimits,
}

impl SaleConfig {
    /// Creates an inactive sale with the given limits.
    pub fn new(presale: PhaseLimits, public: PhaseLimits) -> ContractResult<Self> {
        ensure!(
            presale.max_per_caller > 0 && public.max_per_caller > 0,
            CustomContractError::InvalidQuota.into()
        );

        Ok(Self {
            phase: SalePhase::Inactive,
            presale,
            public,
        })
    }

    #[inline(always)]
    pub fn current_phase(&self) -> SalePhase {
        self.phase
    }

    /// Limits of a selling phase. `Inactive` has none.
    pub fn limits_for(&self, phase: SalePhase) -> Option<PhaseLimits> {
        match phase {
            SalePhase::Inactive => None,
            SalePhase::Presale => Some(self.presale),
            SalePhase::Public => Some(self.public),
        }
    }

    /// Applies an update. Ceilings must stay positive; any phase may follow
    /// any other.
    pub fn apply(&mut self, update: &ConfigUpdate) -> ContractResult<()> {
        match *update {
            ConfigUpdate::SaleStatus(phase) => self.phase = phase,
            ConfigUpdate::PresaleMaxMint(max) => {
                ensure!(max > 0, CustomContractError::InvalidQuota.into());
                self.presale.max_per_caller = max;
            }
            ConfigUpdate::PublicMaxMint(max) => {
                ensure!(max > 0, CustomContractError::InvalidQuota.into());
                self.public.max_per_caller = max;
            }
            ConfigUpdate::LowFee(price) => self.presale.unit_price = price,
            ConfigUpdate::BaseFee(price) => self.public.unit_price = price,
        }

        Ok(())
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    fn limits(max_per_caller: u32, micro_ccd: u64) -> PhaseLimits {
        PhaseLimits {
            max_per_caller,
            unit_price: Amount::from_micro_ccd(micro_ccd),
        }
    }

    #[concordium_test]
    fn test_new_config_is_inactive() {
        let config = SaleConfig::new(limits(2, 30_000), limits(3, 40_000))
            .expect_report("Valid limits");

        claim_eq!(config.current_phase(), SalePhase::Inactive);
        claim_eq!(config.limits_for(SalePhase::Inactive), None);
        claim_eq!(config.limits_for(SalePhase::Presale), Some(limits(2, 30_000)));
        claim_eq!(config.limits_for(SalePhase::Public), Some(limits(3, 40_000)));
    }

    #[concordium_test]
    fn test_new_config_rejects_zero_ceiling() {
        claim_eq!(
            SaleConfig::new(limits(0, 30_000), limits(3, 40_000)),
            Err(CustomContractError::InvalidQuota.into())
        );
    }

    #[concordium_test]
    fn test_updates_visible_on_next_read() {
        let mut config = SaleConfig::new(limits(1, 1), limits(1, 1))
            .expect_report("Valid limits");

        let updates = [
            ConfigUpdate::SaleStatus(SalePhase::Presale),
            ConfigUpdate::PresaleMaxMint(2),
            ConfigUpdate::LowFee(Amount::from_micro_ccd(30_000)),
            ConfigUpdate::PublicMaxMint(5),
            ConfigUpdate::BaseFee(Amount::from_micro_ccd(40_000)),
        ];
        for update in updates.iter() {
            claim_eq!(config.apply(update), Ok(()));
        }

        claim_eq!(config.current_phase(), SalePhase::Presale);
        claim_eq!(config.limits_for(SalePhase::Presale), Some(limits(2, 30_000)));
        claim_eq!(config.limits_for(SalePhase::Public), Some(limits(5, 40_000)));

        claim_eq!(
            config.apply(&ConfigUpdate::SaleStatus(SalePhase::Inactive)),
            Ok(())
        );
        claim_eq!(config.current_phase(), SalePhase::Inactive);
    }

    #[concordium_test]
    fn test_zero_ceiling_update_rejected() {
        let mut config = SaleConfig::new(limits(2, 1), limits(2, 1))
            .expect_report("Valid limits");

        claim_eq!(
            config.apply(&ConfigUpdate::PublicMaxMint(0)),
            Err(CustomContractError::InvalidQuota.into())
        );
        claim_eq!(config.limits_for(SalePhase::Public), Some(limits(2, 1)));
    }

    #[concordium_test]
    fn test_price_for() {
        let presale = limits(2, 30_000);

        claim_eq!(presale.price_for(2), Some(Amount::from_micro_ccd(60_000)));
        claim_eq!(limits(1, u64::MAX).price_for(2), None);
    }

    #[concordium_test]
    fn test_allows() {
        let presale = limits(2, 30_000);

        claim!(presale.allows(0, 2));
        claim!(presale.allows(1, 1));
        claim!(!presale.allows(1, 2));
        claim!(!presale.allows(u32::MAX, 1));
    }
}
