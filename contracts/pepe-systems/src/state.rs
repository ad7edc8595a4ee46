use super::*;
use core::ops::RangeInclusive;

/// A purchase after the entrypoint parameter has been reduced to a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleRequest {
    /// The address paying and whose quota is consumed.
    pub requester: Address,
    /// The address receiving the tokens.
    pub destination: Address,
    /// Number of tokens requested.
    pub count: u32,
    /// Phase the entrypoint belongs to.
    pub phase: SalePhase,
}

/// The state for each address.
#[derive(Serial, DeserialWithState, Deletable)]
#[concordium(state_parameter = "S")]
pub struct AddressState<S: HasStateApi> {
    /// Number of tokens currently held by this address.
    pub token_count: u32,
    /// The address which are currently enabled as operators for this address.
    pub operators: StateSet<Address, S>,
}

impl<S: HasStateApi> AddressState<S> {
    fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            token_count: 0,
            operators: state_builder.new_set(),
        }
    }
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Addresses allowed to mint the reserve and configure the sale.
    pub authority: Authority<S>,
    /// Active phase, ceilings and prices.
    pub config: SaleConfig,
    /// Issued token count and cap.
    pub supply: SupplyCounter,
    /// Tokens bought per address and phase.
    pub quotas: QuotaLedger<S>,
    /// Current owner of every issued token.
    pub owners: StateMap<ContractTokenId, Address, S>,
    /// The state for each address.
    pub holders: StateMap<Address, AddressState<S>, S>,
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates an inactive sale with no tokens, administered by `origin`.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        params: InitParams,
        origin: AccountAddress,
    ) -> ContractResult<Self> {
        Ok(State {
            authority: Authority::new(state_builder, Address::Account(origin)),
            config: SaleConfig::new(params.presale, params.public)?,
            supply: SupplyCounter::new(params.supply_cap)?,
            quotas: QuotaLedger::new(state_builder),
            owners: state_builder.new_map(),
            holders: state_builder.new_map(),
        })
    }

    /// Sells `request.count` tokens to `request.destination`.
    ///
    /// Checks run in this order and the first failure is returned with the
    /// state untouched:
    /// - the active phase is `request.phase`, otherwise `WrongPhase`
    /// - the count is positive, otherwise `InvalidBatchSize`
    /// - the requester stays within the phase ceiling, otherwise `QuotaExceeded`
    /// - `payment` is exactly count times the unit price, otherwise
    ///   `IncorrectPayment`
    /// - the batch fits under the supply cap, otherwise `CapacityExceeded`
    ///
    /// Returns the issued token IDs.
    pub fn purchase(
        &mut self,
        request: &SaleRequest,
        payment: Amount,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<RangeInclusive<u32>> {
        ensure!(
            self.config.current_phase() == request.phase,
            CustomContractError::WrongPhase.into()
        );
        let limits = self
            .config
            .limits_for(request.phase)
            .ok_or(CustomContractError::WrongPhase)?;

        ensure!(
            request.count > 0,
            CustomContractError::InvalidBatchSize.into()
        );

        let claimed = self.quotas.claimed(&request.requester, request.phase);
        ensure!(
            limits.allows(claimed, request.count),
            CustomContractError::QuotaExceeded.into()
        );

        ensure!(
            limits.price_for(request.count) == Some(payment),
            CustomContractError::IncorrectPayment.into()
        );

        let token_ids = self.issue(request.destination, request.count, state_builder)?;
        self.quotas
            .record_claim(&request.requester, request.phase, request.count);

        Ok(token_ids)
    }

    /// Mints `count` tokens to `destination` without phase, payment or quota
    /// checks. Authorization is up to the caller.
    pub fn mint_reserve(
        &mut self,
        destination: Address,
        count: u32,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<RangeInclusive<u32>> {
        self.issue(destination, count, state_builder)
    }

    /// Reserves the next `count` IDs and records `destination` as their owner.
    fn issue(
        &mut self,
        destination: Address,
        count: u32,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<RangeInclusive<u32>> {
        let token_ids = self.supply.reserve(count)?;

        self.holders
            .entry(destination)
            .or_insert_with(|| AddressState::empty(state_builder))
            .token_count += count;

        for token_id in token_ids.clone() {
            self.owners.insert(TokenIdU32(token_id), destination);
        }

        Ok(token_ids)
    }

    #[inline(always)]
    pub fn minted(&self) -> u32 {
        self.supply.minted()
    }

    /// Owner of an issued token.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.owners
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Number of tokens currently held by `address`.
    pub fn token_count(&self, address: &Address) -> u32 {
        self.holders
            .get(address)
            .map_or(0, |address_state| address_state.token_count)
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let owner = self.owner_of(token_id)?;
        Ok(if owner == *address {
            ContractTokenAmount::from(1)
        } else {
            ContractTokenAmount::from(0)
        })
    }

    /// Check if a given address is an operator of a given owner address.
    pub fn is_operator(&self, address: &Address, owner: &Address) -> bool {
        self.holders
            .get(owner)
            .map(|address_state| address_state.operators.contains(address))
            .unwrap_or(false)
    }

    /// Update the state with a transfer of some token.
    /// Results in an error if the token ID does not exist in the state or if
    /// the from address does not hold the token.
    pub fn transfer(
        &mut self,
        transfer: &Transfer<ContractTokenId, ContractTokenAmount>,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<()> {
        let owner = self.owner_of(&transfer.token_id)?;

        // A zero transfer does not modify the state.
        if transfer.amount == ContractTokenAmount::from(0) {
            return Ok(());
        }

        ensure!(
            transfer.amount == ContractTokenAmount::from(1) && owner == transfer.from,
            ContractError::InsufficientFunds
        );

        let to_address = transfer.to.address();

        if let Some(mut from_state) = self.holders.get_mut(&transfer.from) {
            from_state.token_count -= 1;
        }

        self.holders
            .entry(to_address)
            .or_insert_with(|| AddressState::empty(state_builder))
            .token_count += 1;

        self.owners.insert(transfer.token_id, to_address);

        Ok(())
    }

    /// Update the state adding a new operator for a given address.
    /// Succeeds even if the `operator` is already an operator for the
    /// `address`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        let mut owner_state = self
            .holders
            .entry(*owner)
            .or_insert_with(|| AddressState::empty(state_builder));
        owner_state.operators.insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        if let Some(mut owner_state) = self.holders.get_mut(owner) {
            owner_state.operators.remove(operator);
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ADDRESS_2: Address = Address::Account(AccountAddress([2u8; 32]));

    const LOW_FEE: u64 = 30_000;
    const BASE_FEE: u64 = 40_000;

    fn init_params(supply_cap: u32) -> InitParams {
        InitParams {
            supply_cap,
            presale: PhaseLimits {
                max_per_caller: 2,
                unit_price: Amount::from_micro_ccd(LOW_FEE),
            },
            public: PhaseLimits {
                max_per_caller: 3,
                unit_price: Amount::from_micro_ccd(BASE_FEE),
            },
        }
    }

    fn initial_state(
        state_builder: &mut TestStateBuilder,
        supply_cap: u32,
        phase: SalePhase,
    ) -> State<TestStateApi> {
        let mut state = State::new(state_builder, init_params(supply_cap), ACCOUNT_0)
            .expect_report("Failed to create state");
        state
            .config
            .apply(&ConfigUpdate::SaleStatus(phase))
            .expect_report("Failed to set phase");
        state
    }

    fn request(requester: Address, count: u32, phase: SalePhase) -> SaleRequest {
        SaleRequest {
            requester,
            destination: requester,
            count,
            phase,
        }
    }

    fn fee(micro_ccd: u64, count: u64) -> Amount {
        Amount::from_micro_ccd(micro_ccd * count)
    }

    /// Ids 1..=minted are owned, the next one is not, and per-address counts
    /// add up to the minted total.
    fn claim_conservation(state: &State<TestStateApi>, holders: &[Address]) {
        for token_id in 1..=state.minted() {
            claim!(state.owner_of(&TokenIdU32(token_id)).is_ok());
        }
        claim_eq!(
            state.owner_of(&TokenIdU32(state.minted() + 1)),
            Err(ContractError::InvalidTokenId)
        );

        let held: u32 = holders.iter().map(|h| state.token_count(h)).sum();
        claim_eq!(held, state.minted());
    }

    #[concordium_test]
    fn test_purchase_issues_sequential_ids() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Presale);

        let mut delegated = request(ADDRESS_0, 2, SalePhase::Presale);
        delegated.destination = ADDRESS_1;

        let ids = state
            .purchase(&delegated, fee(LOW_FEE, 2), &mut state_builder)
            .expect_report("Purchase should succeed");

        claim_eq!(ids, 1..=2);
        claim_eq!(state.owner_of(&TokenIdU32(1)), Ok(ADDRESS_1));
        claim_eq!(state.owner_of(&TokenIdU32(2)), Ok(ADDRESS_1));
        claim_eq!(state.token_count(&ADDRESS_1), 2);
        claim_eq!(state.token_count(&ADDRESS_0), 0);

        // Quota is charged to the requester, not the destination.
        claim_eq!(state.quotas.claimed(&ADDRESS_0, SalePhase::Presale), 2);
        claim_eq!(state.quotas.claimed(&ADDRESS_1, SalePhase::Presale), 0);
    }

    #[concordium_test]
    fn test_purchase_wrong_phase() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Presale);

        let result = state.purchase(
            &request(ADDRESS_0, 1, SalePhase::Public),
            fee(BASE_FEE, 1),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::WrongPhase.into()));

        state
            .config
            .apply(&ConfigUpdate::SaleStatus(SalePhase::Inactive))
            .expect_report("Failed to set phase");
        let result = state.purchase(
            &request(ADDRESS_0, 1, SalePhase::Presale),
            fee(LOW_FEE, 1),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::WrongPhase.into()));

        // Even a request naming the inactive phase is not sold.
        let result = state.purchase(
            &request(ADDRESS_0, 1, SalePhase::Inactive),
            Amount::zero(),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::WrongPhase.into()));
        claim_eq!(state.minted(), 0);
    }

    #[concordium_test]
    fn test_purchase_zero_count() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Public);

        let result = state.purchase(
            &request(ADDRESS_0, 0, SalePhase::Public),
            Amount::zero(),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::InvalidBatchSize.into()));
    }

    #[concordium_test]
    fn test_purchase_quota_is_cumulative() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Public);

        state
            .purchase(
                &request(ADDRESS_0, 2, SalePhase::Public),
                fee(BASE_FEE, 2),
                &mut state_builder,
            )
            .expect_report("First purchase should succeed");

        let result = state.purchase(
            &request(ADDRESS_0, 2, SalePhase::Public),
            fee(BASE_FEE, 2),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::QuotaExceeded.into()));
        claim_eq!(state.quotas.claimed(&ADDRESS_0, SalePhase::Public), 2);
        claim_eq!(state.minted(), 2);

        // Filling the ceiling exactly is fine.
        claim_eq!(
            state.purchase(
                &request(ADDRESS_0, 1, SalePhase::Public),
                fee(BASE_FEE, 1),
                &mut state_builder,
            ),
            Ok(3..=3)
        );
        claim_eq!(state.quotas.claimed(&ADDRESS_0, SalePhase::Public), 3);
    }

    #[concordium_test]
    fn test_purchase_payment_must_be_exact() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Presale);

        for payment in [50_000u64, 70_000, 0].iter() {
            let result = state.purchase(
                &request(ADDRESS_0, 2, SalePhase::Presale),
                Amount::from_micro_ccd(*payment),
                &mut state_builder,
            );
            claim_eq!(result, Err(CustomContractError::IncorrectPayment.into()));
        }

        claim_eq!(state.minted(), 0);
        claim_eq!(state.quotas.claimed(&ADDRESS_0, SalePhase::Presale), 0);
        claim_eq!(state.token_count(&ADDRESS_0), 0);
    }

    #[concordium_test]
    fn test_purchase_check_order() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 1, SalePhase::Presale);

        // Wrong phase wins over a wrong payment.
        let result = state.purchase(
            &request(ADDRESS_0, 1, SalePhase::Public),
            Amount::zero(),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::WrongPhase.into()));

        // Quota wins over payment and capacity.
        let result = state.purchase(
            &request(ADDRESS_0, 3, SalePhase::Presale),
            Amount::zero(),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::QuotaExceeded.into()));

        // Payment wins over capacity.
        let result = state.purchase(
            &request(ADDRESS_0, 2, SalePhase::Presale),
            Amount::zero(),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::IncorrectPayment.into()));

        let result = state.purchase(
            &request(ADDRESS_0, 2, SalePhase::Presale),
            fee(LOW_FEE, 2),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::CapacityExceeded.into()));
        claim_eq!(state.quotas.claimed(&ADDRESS_0, SalePhase::Presale), 0);
    }

    #[concordium_test]
    fn test_quota_is_kept_per_phase() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Presale);

        state
            .purchase(
                &request(ADDRESS_0, 2, SalePhase::Presale),
                fee(LOW_FEE, 2),
                &mut state_builder,
            )
            .expect_report("Presale purchase should succeed");

        state
            .config
            .apply(&ConfigUpdate::SaleStatus(SalePhase::Public))
            .expect_report("Failed to set phase");
        claim_eq!(
            state.purchase(
                &request(ADDRESS_0, 3, SalePhase::Public),
                fee(BASE_FEE, 3),
                &mut state_builder,
            ),
            Ok(3..=5)
        );

        // Back in presale the earlier claims still count.
        state
            .config
            .apply(&ConfigUpdate::SaleStatus(SalePhase::Presale))
            .expect_report("Failed to set phase");
        let result = state.purchase(
            &request(ADDRESS_0, 1, SalePhase::Presale),
            fee(LOW_FEE, 1),
            &mut state_builder,
        );
        claim_eq!(result, Err(CustomContractError::QuotaExceeded.into()));

        // A raised ceiling is honoured on the next call.
        state
            .config
            .apply(&ConfigUpdate::PresaleMaxMint(3))
            .expect_report("Failed to raise ceiling");
        claim_eq!(
            state.purchase(
                &request(ADDRESS_0, 1, SalePhase::Presale),
                fee(LOW_FEE, 1),
                &mut state_builder,
            ),
            Ok(6..=6)
        );
    }

    #[concordium_test]
    fn test_mint_reserve_skips_sale_checks() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Inactive);

        claim_eq!(
            state.mint_reserve(ADDRESS_1, 5, &mut state_builder),
            Ok(1..=5)
        );
        claim_eq!(state.token_count(&ADDRESS_1), 5);
        claim_eq!(state.quotas.claimed(&ADDRESS_1, SalePhase::Presale), 0);
        claim_eq!(state.quotas.claimed(&ADDRESS_1, SalePhase::Public), 0);

        claim_eq!(
            state.mint_reserve(ADDRESS_1, 0, &mut state_builder),
            Err(CustomContractError::InvalidBatchSize.into())
        );
    }

    #[concordium_test]
    fn test_mint_reserve_respects_cap() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 3, SalePhase::Public);

        state
            .purchase(
                &request(ADDRESS_0, 2, SalePhase::Public),
                fee(BASE_FEE, 2),
                &mut state_builder,
            )
            .expect_report("Purchase should succeed");

        claim_eq!(
            state.mint_reserve(ADDRESS_1, 2, &mut state_builder),
            Err(CustomContractError::CapacityExceeded.into())
        );
        claim_eq!(state.minted(), 2);

        // Reserve ids continue after the sold ones.
        claim_eq!(state.mint_reserve(ADDRESS_1, 1, &mut state_builder), Ok(3..=3));
        claim_conservation(&state, &[ADDRESS_0, ADDRESS_1]);
    }

    #[concordium_test]
    fn test_transfer_moves_ownership() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Inactive);
        state
            .mint_reserve(ADDRESS_0, 2, &mut state_builder)
            .expect_report("Reserve should succeed");

        let transfer = Transfer {
            token_id: TokenIdU32(2),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_0,
            to: Receiver::from_account(ACCOUNT_1),
            data: AdditionalData::empty(),
        };
        claim_eq!(state.transfer(&transfer, &mut state_builder), Ok(()));

        claim_eq!(state.owner_of(&TokenIdU32(2)), Ok(ADDRESS_1));
        claim_eq!(state.token_count(&ADDRESS_0), 1);
        claim_eq!(state.token_count(&ADDRESS_1), 1);
        claim_eq!(
            state.balance(&TokenIdU32(2), &ADDRESS_1),
            Ok(ContractTokenAmount::from(1))
        );
        claim_eq!(
            state.balance(&TokenIdU32(2), &ADDRESS_0),
            Ok(ContractTokenAmount::from(0))
        );

        // The previous owner no longer holds it.
        claim_eq!(
            state.transfer(&transfer, &mut state_builder),
            Err(ContractError::InsufficientFunds)
        );
        claim_conservation(&state, &[ADDRESS_0, ADDRESS_1]);
    }

    #[concordium_test]
    fn test_holder_counts_follow_transfers() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Inactive);
        state
            .mint_reserve(ADDRESS_0, 3, &mut state_builder)
            .expect_report("Reserve should succeed");

        // Sending a token to its own owner leaves the count unchanged.
        let to_self = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_0,
            to: Receiver::from_account(ACCOUNT_0),
            data: AdditionalData::empty(),
        };
        claim_eq!(state.transfer(&to_self, &mut state_builder), Ok(()));
        claim_eq!(state.token_count(&ADDRESS_0), 3);

        for token_id in 1..=3 {
            let transfer = Transfer {
                token_id: TokenIdU32(token_id),
                amount: ContractTokenAmount::from(1),
                from: ADDRESS_0,
                to: Receiver::from_account(ACCOUNT_1),
                data: AdditionalData::empty(),
            };
            claim_eq!(state.transfer(&transfer, &mut state_builder), Ok(()));
        }
        claim_eq!(state.token_count(&ADDRESS_0), 0);
        claim_eq!(state.token_count(&ADDRESS_1), 3);

        // A zero amount transfer moves nothing.
        let zero = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(0),
            from: ADDRESS_1,
            to: Receiver::from_account(ACCOUNT_0),
            data: AdditionalData::empty(),
        };
        claim_eq!(state.transfer(&zero, &mut state_builder), Ok(()));
        claim_eq!(state.token_count(&ADDRESS_1), 3);
        claim_conservation(&state, &[ADDRESS_0, ADDRESS_1]);
    }

    #[concordium_test]
    fn test_transfer_unknown_token() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Inactive);

        let transfer = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_0,
            to: Receiver::from_account(ACCOUNT_1),
            data: AdditionalData::empty(),
        };
        claim_eq!(
            state.transfer(&transfer, &mut state_builder),
            Err(ContractError::InvalidTokenId)
        );
    }

    #[concordium_test]
    fn test_operators() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 100, SalePhase::Inactive);

        state.add_operator(&ADDRESS_0, &ADDRESS_2, &mut state_builder);
        claim!(state.is_operator(&ADDRESS_2, &ADDRESS_0));
        claim!(!state.is_operator(&ADDRESS_0, &ADDRESS_2));

        state.remove_operator(&ADDRESS_0, &ADDRESS_2);
        claim!(!state.is_operator(&ADDRESS_2, &ADDRESS_0));

        // Removing from an unknown owner is a no-op.
        state.remove_operator(&ADDRESS_1, &ADDRESS_2);
    }

    #[concordium_test]
    fn test_mixed_sequence_conserves_supply() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder, 9, SalePhase::Presale);

        let _ = state.purchase(
            &request(ADDRESS_0, 2, SalePhase::Presale),
            fee(LOW_FEE, 2),
            &mut state_builder,
        );
        let _ = state.purchase(
            &request(ADDRESS_1, 1, SalePhase::Presale),
            fee(LOW_FEE, 2),
            &mut state_builder,
        );
        let _ = state.mint_reserve(ADDRESS_2, 3, &mut state_builder);
        state
            .config
            .apply(&ConfigUpdate::SaleStatus(SalePhase::Public))
            .expect_report("Failed to set phase");
        let _ = state.purchase(
            &request(ADDRESS_1, 3, SalePhase::Public),
            fee(BASE_FEE, 3),
            &mut state_builder,
        );
        let _ = state.purchase(
            &request(ADDRESS_0, 2, SalePhase::Public),
            fee(BASE_FEE, 2),
            &mut state_builder,
        );

        // 2 + 3 + 3 issued; the overpaid and the over-cap calls left no trace.
        claim_eq!(state.minted(), 8);
        claim_eq!(state.token_count(&ADDRESS_0), 2);
        claim_eq!(state.token_count(&ADDRESS_1), 3);
        claim_eq!(state.token_count(&ADDRESS_2), 3);
        claim_eq!(state.quotas.claimed(&ADDRESS_0, SalePhase::Public), 0);
        claim_conservation(&state, &[ADDRESS_0, ADDRESS_1, ADDRESS_2]);
    }
}
