use super::*;

/// Key of a quota entry. Claims are counted separately for every phase.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct QuotaKey {
    pub requester: Address,
    pub phase: SalePhase,
}

/// Number of tokens each address has bought in each phase.
///
/// Ceilings are enforced by the caller before `record_claim`.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct QuotaLedger<S: HasStateApi> {
    claims: StateMap<QuotaKey, u32, S>,
}

impl<S: HasStateApi> QuotaLedger<S> {
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            claims: state_builder.new_map(),
        }
    }

    /// Tokens bought by `requester` in `phase`, zero if none.
    pub fn claimed(&self, requester: &Address, phase: SalePhase) -> u32 {
        self.claims
            .get(&QuotaKey {
                requester: *requester,
                phase,
            })
            .map_or(0, |claimed| *claimed)
    }

    pub fn record_claim(&mut self, requester: &Address, phase: SalePhase, count: u32) {
        self.claims
            .entry(QuotaKey {
                requester: *requester,
                phase,
            })
            .and_modify(|claimed| *claimed += count)
            .or_insert(count);
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADDRESS_0: Address = Address::Account(AccountAddress([0u8; 32]));
    const ADDRESS_1: Address = Address::Account(AccountAddress([1u8; 32]));

    #[concordium_test]
    fn test_unknown_requester_has_no_claims() {
        let mut state_builder = TestStateBuilder::new();
        let ledger = QuotaLedger::new(&mut state_builder);

        claim_eq!(ledger.claimed(&ADDRESS_0, SalePhase::Presale), 0);
        claim_eq!(ledger.claimed(&ADDRESS_0, SalePhase::Public), 0);
    }

    #[concordium_test]
    fn test_claims_accumulate_per_phase() {
        let mut state_builder = TestStateBuilder::new();
        let mut ledger = QuotaLedger::new(&mut state_builder);

        ledger.record_claim(&ADDRESS_0, SalePhase::Presale, 1);
        ledger.record_claim(&ADDRESS_0, SalePhase::Presale, 2);
        ledger.record_claim(&ADDRESS_0, SalePhase::Public, 4);
        ledger.record_claim(&ADDRESS_1, SalePhase::Presale, 1);

        claim_eq!(ledger.claimed(&ADDRESS_0, SalePhase::Presale), 3);
        claim_eq!(ledger.claimed(&ADDRESS_0, SalePhase::Public), 4);
        claim_eq!(ledger.claimed(&ADDRESS_1, SalePhase::Presale), 1);
        claim_eq!(ledger.claimed(&ADDRESS_1, SalePhase::Public), 0);
    }
}
