use super::*;
use core::convert::TryFrom;

/// List of supported standards by this contract address.
const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 2] =
    [CIS0_STANDARD_IDENTIFIER, CIS2_STANDARD_IDENTIFIER];

/// Initialize an inactive sale with no tokens. The account creating the
/// instance becomes the first admin.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The supply cap is zero.
/// - Any of the per-caller ceilings is zero.
#[init(contract = "PepeSystems", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;

    // Construct the initial contract state.
    let state = State::new(state_builder, params, ctx.init_origin())?;
    Ok(state)
}

/// Number of tokens requested through a list of advisory token IDs.
fn advisory_count(token_ids: &[ContractTokenId]) -> ContractResult<u32> {
    u32::try_from(token_ids.len())
        .map_err(|_| ContractError::from(CustomContractError::InvalidBatchSize))
}

fn execute_purchase<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    request: &SaleRequest,
    payment: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let (state, state_builder) = host.state_and_builder();
    let token_ids = state.purchase(request, payment, state_builder)?;

    log_issued(logger, token_ids, request.destination)
}

/// Presale purchase on behalf of `destination`, paid and counted against the
/// sender's presale quota.
/// Logs a `Mint` event for each issued token.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The active phase is not `Presale`.
/// - No token IDs are given.
/// - The sender would exceed the presale ceiling.
/// - The attached amount is not exactly the low fee times the number of tokens.
/// - The supply cap would be exceeded.
/// - Fails to log Mint events.
#[receive(
    contract = "PepeSystems",
    name = "presaleDelegationPurchase",
    parameter = "DelegationPurchaseParams",
    mutable,
    enable_logger,
    payable
)]
fn presale_delegation_purchase<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: DelegationPurchaseParams = ctx.parameter_cursor().get()?;

    let request = SaleRequest {
        requester: ctx.sender(),
        destination: params.destination,
        count: advisory_count(&params.token_ids)?,
        phase: SalePhase::Presale,
    };

    execute_purchase(host, &request, amount, logger)
}

/// Presale purchase for the sender.
/// Rejects under the same conditions as `presaleDelegationPurchase`.
#[receive(
    contract = "PepeSystems",
    name = "presaleOwnershipPurchase",
    parameter = "OwnershipPurchaseParams",
    mutable,
    enable_logger,
    payable
)]
fn presale_ownership_purchase<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: OwnershipPurchaseParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let request = SaleRequest {
        requester: sender,
        destination: sender,
        count: advisory_count(&params.token_ids)?,
        phase: SalePhase::Presale,
    };

    execute_purchase(host, &request, amount, logger)
}

/// Public sale purchase of `count` tokens.
/// Logs a `Mint` event for each issued token.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The active phase is not `Public`.
/// - `count` is zero.
/// - The sender would exceed the public sale ceiling.
/// - The attached amount is not exactly the base fee times `count`.
/// - The supply cap would be exceeded.
/// - Fails to log Mint events.
#[receive(
    contract = "PepeSystems",
    name = "publicPurchase",
    parameter = "PublicPurchaseParams",
    mutable,
    enable_logger,
    payable
)]
fn public_purchase<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: PublicPurchaseParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let request = SaleRequest {
        requester: sender,
        destination: params.destination.unwrap_or(sender),
        count: params.count,
        phase: SalePhase::Public,
    };

    execute_purchase(host, &request, amount, logger)
}

/// Mint tokens from the team reserve in any phase, free of charge and without
/// touching any quota.
/// Logs a `Mint` event for each issued token.
///
/// It rejects if:
/// - The sender is not an admin.
/// - Fails to parse parameter.
/// - `count` is zero.
/// - The supply cap would be exceeded.
/// - Fails to log Mint events.
#[receive(
    contract = "PepeSystems",
    name = "mintTeamReserve",
    parameter = "MintReserveParams",
    mutable,
    enable_logger
)]
fn mint_team_reserve<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        host.state().authority.has_admin_rights(&ctx.sender()),
        ContractError::Unauthorized
    );

    // Parse the parameter.
    let params: MintReserveParams = ctx.parameter_cursor().get()?;

    let (state, state_builder) = host.state_and_builder();
    let token_ids = state.mint_reserve(params.destination, params.count, state_builder)?;

    log_issued(logger, token_ids, params.destination)
}

/// Change the sale phase, a per-caller ceiling or a unit price.
/// Logs a `ConfigUpdated` event.
///
/// It rejects if:
/// - The sender is not a sale manager or admin.
/// - Fails to parse parameter.
/// - A ceiling is set to zero.
/// - Fails to log event.
#[receive(
    contract = "PepeSystems",
    name = "updateConfig",
    parameter = "ConfigUpdate",
    mutable,
    enable_logger
)]
fn update_config<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state_mut();
    ensure!(
        state.authority.has_sale_manager_rights(&ctx.sender()),
        ContractError::Unauthorized
    );

    // Parse the parameter.
    let update: ConfigUpdate = ctx.parameter_cursor().get()?;
    state.config.apply(&update)?;

    logger.log(&SaleEvent::ConfigUpdated(&update))?;

    Ok(())
}

/// View the sale configuration together with the issuance counters.
#[receive(
    contract = "PepeSystems",
    name = "viewConfig",
    return_value = "SaleConfigView"
)]
fn view_config<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SaleConfigView> {
    let state = host.state();
    Ok(SaleConfigView {
        config: state.config,
        minted: state.supply.minted(),
        supply_cap: state.supply.cap(),
    })
}

/// Number of tokens issued so far.
#[receive(contract = "PepeSystems", name = "mintedTokens", return_value = "u32")]
fn minted_tokens<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().minted())
}

/// Maximum number of tokens that can ever be issued.
#[receive(contract = "PepeSystems", name = "totalSupplyCap", return_value = "u32")]
fn total_supply_cap<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().supply.cap())
}

/// Tokens bought by an address in a phase.
#[receive(
    contract = "PepeSystems",
    name = "claimed",
    parameter = "ClaimedQuery",
    return_value = "u32"
)]
fn claimed<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    // Parse the parameter.
    let query: ClaimedQuery = ctx.parameter_cursor().get()?;
    Ok(host.state().quotas.claimed(&query.requester, query.phase))
}

/// Current owner of a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token has not been issued.
#[receive(
    contract = "PepeSystems",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().owner_of(&token_id)
}

/// Number of tokens held by an address.
#[receive(
    contract = "PepeSystems",
    name = "balanceOfAddress",
    parameter = "Address",
    return_value = "u32"
)]
fn balance_of_address<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    // Parse the parameter.
    let address: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().token_count(&address))
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Produces an action which sends a message to each contract which are the
/// receiver of a transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the owner of the token, or an operator for this
///       specific `from` address.
///     - The token is not owned by the `from`.
/// - Fails to log event.
/// - Any of the messages sent to contracts receiving a transfer choose to
///   reject.
#[receive(
    contract = "PepeSystems",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    for transfer in transfers {
        let (state, state_builder) = host.state_and_builder();
        // Authenticate the sender for this transfer
        ensure!(
            transfer.from == sender || state.is_operator(&sender, &transfer.from),
            ContractError::Unauthorized
        );

        let to_address = transfer.to.address();
        // Update the contract state
        state.transfer(&transfer, state_builder)?;

        // Log transfer event
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id,
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        // If the receiver is a contract, we add sending it a message to the list of
        // actions.
        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )?;
        }
    }
    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    contract = "PepeSystems",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    for param in params {
        // Update the operator in the state.
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        // Log the appropriate event
        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "PepeSystems",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    // Parse the parameter.
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for address being an operator of owner.
        let is_operator = state.is_operator(&query.address, &query.owner);
        response.push(is_operator);
    }

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "PepeSystems",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    // Parse the parameter.
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for balance.
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the supported standards or addresses for a implementation given list of
/// standard identifiers.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "PepeSystems",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    // Parse the parameter.
    let params: SupportsQueryParams = ctx.parameter_cursor().get()?;

    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    for std_id in params.queries {
        if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
            response.push(SupportResult::Support);
        } else {
            response.push(SupportResult::NoSupport);
        }
    }

    Ok(SupportsQueryResponse::from(response))
}

/// Add or remove an admin or sale manager.
/// Logs an `AuthorityUpdated` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender lacks the rights for the role being changed.
/// - Fails to log event.
#[receive(
    contract = "PepeSystems",
    name = "updateAuthority",
    parameter = "AuthorityUpdateParams",
    mutable,
    enable_logger
)]
fn update_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: AuthorityUpdateParams = ctx.parameter_cursor().get()?;

    host.state_mut()
        .authority
        .handle_update(ctx.sender(), &params)?;

    logger.log(&SaleEvent::AuthorityUpdated(&params))?;

    Ok(())
}

/// Page through the admins or the sale managers.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "PepeSystems",
    name = "viewAuthority",
    parameter = "AuthorityViewParams",
    return_value = "Vec<Address>"
)]
fn view_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<Address>> {
    let params: AuthorityViewParams = ctx.parameter_cursor().get()?;
    Ok(host.state().authority.handle_view(params))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADMIN_ACCOUNT: AccountAddress = AccountAddress([0u8; 32]);
    const ADMIN: Address = Address::Account(ADMIN_ACCOUNT);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);
    const ACCOUNT_2: AccountAddress = AccountAddress([2u8; 32]);
    const ADDRESS_2: Address = Address::Account(ACCOUNT_2);
    const RECEIVER_CONTRACT: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };

    /// 0.03 CCD
    const LOW_FEE: u64 = 30_000;
    /// 0.04 CCD
    const BASE_FEE: u64 = 40_000;

    type Host = TestHost<State<TestStateApi>>;

    /// Deploys the contract as `ADMIN` with a ceiling of one token per phase
    /// and free tokens.
    fn new_host() -> Host {
        new_host_with_cap(10_000)
    }

    fn new_host_with_cap(supply_cap: u32) -> Host {
        let params = InitParams {
            supply_cap,
            presale: PhaseLimits {
                max_per_caller: 1,
                unit_price: Amount::zero(),
            },
            public: PhaseLimits {
                max_per_caller: 1,
                unit_price: Amount::zero(),
            },
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN_ACCOUNT).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder)
            .expect_report("Failed during init_PepeSystems");

        TestHost::new(state, state_builder)
    }

    fn configure(host: &mut Host, updates: &[ConfigUpdate]) {
        for update in updates {
            let bytes = to_bytes(update);
            let mut ctx = TestReceiveContext::empty();
            ctx.set_sender(ADMIN).set_parameter(&bytes);
            let mut logger = TestLogger::init();

            let result = update_config(&ctx, host, &mut logger);
            claim_eq!(result, Ok(()));
        }
    }

    fn presale_host() -> Host {
        let mut host = new_host();
        configure(
            &mut host,
            &[
                ConfigUpdate::SaleStatus(SalePhase::Presale),
                ConfigUpdate::PresaleMaxMint(2),
                ConfigUpdate::LowFee(Amount::from_micro_ccd(LOW_FEE)),
            ],
        );
        host
    }

    fn public_host() -> Host {
        let mut host = new_host();
        configure(
            &mut host,
            &[
                ConfigUpdate::SaleStatus(SalePhase::Public),
                ConfigUpdate::PublicMaxMint(2),
                ConfigUpdate::BaseFee(Amount::from_micro_ccd(BASE_FEE)),
            ],
        );
        host
    }

    fn token_ids(ids: &[u32]) -> Vec<ContractTokenId> {
        ids.iter().map(|id| TokenIdU32(*id)).collect()
    }

    fn mint_event(token_id: u32, owner: Address) -> Vec<u8> {
        to_bytes(&Cis2Event::Mint(MintEvent {
            token_id: TokenIdU32(token_id),
            amount: ContractTokenAmount::from(1),
            owner,
        }))
    }

    fn owner_of_token(host: &Host, token_id: u32) -> ContractResult<Address> {
        let bytes = to_bytes(&TokenIdU32(token_id));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        owner_of(&ctx, host)
    }

    fn token_count(host: &Host, address: Address) -> u32 {
        let bytes = to_bytes(&address);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        balance_of_address(&ctx, host)
            .expect_report("Failed to query balanceOfAddress")
    }

    fn minted(host: &Host) -> u32 {
        minted_tokens(&TestReceiveContext::empty(), host)
            .expect_report("Failed to query mintedTokens")
    }

    fn claimed_in(host: &Host, requester: Address, phase: SalePhase) -> u32 {
        let bytes = to_bytes(&ClaimedQuery { requester, phase });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        claimed(&ctx, host).expect_report("Failed to query claimed")
    }

    fn reserve(
        host: &mut Host,
        sender: Address,
        destination: Address,
        count: u32,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&MintReserveParams { destination, count });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        mint_team_reserve(&ctx, host, &mut logger)
    }

    /// Test initialization succeeds with an inactive sale.
    #[concordium_test]
    fn test_init() {
        let host = new_host();

        let view = view_config(&TestReceiveContext::empty(), &host)
            .expect_report("Failed to query viewConfig");
        claim_eq!(view.config.current_phase(), SalePhase::Inactive);
        claim_eq!(view.minted, 0);
        claim_eq!(view.supply_cap, 10_000);
        claim!(host.state().authority.has_admin_rights(&ADMIN));
    }

    /// Test initialization fails without supply.
    #[concordium_test]
    fn test_init_zero_supply_cap() {
        let params = InitParams {
            supply_cap: 0,
            presale: PhaseLimits {
                max_per_caller: 1,
                unit_price: Amount::zero(),
            },
            public: PhaseLimits {
                max_per_caller: 1,
                unit_price: Amount::zero(),
            },
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN_ACCOUNT).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let result = init(&ctx, &mut state_builder);
        claim!(result.is_err(), "Init with zero supply cap should fail");
    }

    /// Two presale tokens bought for another address at 0.03 CCD each.
    #[concordium_test]
    fn test_presale_delegation_purchase() {
        let mut host = presale_host();

        let params = DelegationPurchaseParams {
            destination: ADDRESS_1,
            token_ids: token_ids(&[1, 2]),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADMIN).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = presale_delegation_purchase(
            &ctx,
            &mut host,
            Amount::from_micro_ccd(60_000),
            &mut logger,
        );
        claim_eq!(result, Ok(()));

        // Check the logs
        claim_eq!(
            logger.logs,
            vec![mint_event(1, ADDRESS_1), mint_event(2, ADDRESS_1)],
            "Expected one Mint event per token in ascending order"
        );

        // Check the state
        claim_eq!(owner_of_token(&host, 1), Ok(ADDRESS_1));
        claim_eq!(owner_of_token(&host, 2), Ok(ADDRESS_1));
        claim_eq!(token_count(&host, ADDRESS_1), 2);
        claim_eq!(minted(&host), 2);
        claim_eq!(claimed_in(&host, ADMIN, SalePhase::Presale), 2);
    }

    /// Two presale tokens bought by the sender for itself.
    #[concordium_test]
    fn test_presale_ownership_purchase() {
        let mut host = presale_host();

        let params = OwnershipPurchaseParams {
            token_ids: token_ids(&[1, 2]),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = presale_ownership_purchase(
            &ctx,
            &mut host,
            Amount::from_micro_ccd(60_000),
            &mut logger,
        );
        claim_eq!(result, Ok(()));

        claim_eq!(
            logger.logs,
            vec![mint_event(1, ADDRESS_1), mint_event(2, ADDRESS_1)]
        );
        claim_eq!(owner_of_token(&host, 1), Ok(ADDRESS_1));
        claim_eq!(owner_of_token(&host, 2), Ok(ADDRESS_1));
        claim_eq!(token_count(&host, ADDRESS_1), 2);
        claim_eq!(minted(&host), 2);
    }

    /// Passed token IDs are only counted, never used for numbering.
    #[concordium_test]
    fn test_advisory_token_ids_ignored() {
        let mut host = presale_host();
        reserve(&mut host, ADMIN, ADMIN, 3)
            .expect_report("Reserve should succeed");

        let params = OwnershipPurchaseParams {
            token_ids: token_ids(&[1, 1]),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = presale_ownership_purchase(
            &ctx,
            &mut host,
            Amount::from_micro_ccd(60_000),
            &mut logger,
        );
        claim_eq!(result, Ok(()));

        claim_eq!(
            logger.logs,
            vec![mint_event(4, ADDRESS_1), mint_event(5, ADDRESS_1)]
        );
        claim_eq!(owner_of_token(&host, 1), Ok(ADMIN));
    }

    /// An empty list of token IDs buys nothing.
    #[concordium_test]
    fn test_presale_empty_token_ids() {
        let mut host = presale_host();

        let params = OwnershipPurchaseParams {
            token_ids: Vec::new(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = presale_ownership_purchase(&ctx, &mut host, Amount::zero(), &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::InvalidBatchSize.into())
        );
        claim!(logger.logs.is_empty());
    }

    /// Two public tokens at 0.04 CCD each.
    #[concordium_test]
    fn test_public_purchase() {
        let mut host = public_host();

        let params = PublicPurchaseParams {
            count: 2,
            destination: None,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = public_purchase(&ctx, &mut host, Amount::from_micro_ccd(80_000), &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            logger.logs,
            vec![mint_event(1, ADDRESS_1), mint_event(2, ADDRESS_1)]
        );
        claim_eq!(owner_of_token(&host, 1), Ok(ADDRESS_1));
        claim_eq!(owner_of_token(&host, 2), Ok(ADDRESS_1));
        claim_eq!(token_count(&host, ADDRESS_1), 2);
        claim_eq!(minted(&host), 2);
    }

    /// Public tokens can be sent to a chosen destination; the quota stays with
    /// the payer.
    #[concordium_test]
    fn test_public_purchase_with_destination() {
        let mut host = public_host();

        let params = PublicPurchaseParams {
            count: 1,
            destination: Some(ADDRESS_2),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = public_purchase(
            &ctx,
            &mut host,
            Amount::from_micro_ccd(BASE_FEE),
            &mut logger,
        );
        claim_eq!(result, Ok(()));

        claim_eq!(owner_of_token(&host, 1), Ok(ADDRESS_2));
        claim_eq!(claimed_in(&host, ADDRESS_1, SalePhase::Public), 1);
        claim_eq!(claimed_in(&host, ADDRESS_2, SalePhase::Public), 0);
    }

    /// Team reserve during the presale ignores phase, payment and quota.
    #[concordium_test]
    fn test_mint_team_reserve() {
        let mut host = presale_host();

        let bytes = to_bytes(&MintReserveParams {
            destination: ADDRESS_1,
            count: 2,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADMIN).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = mint_team_reserve(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            logger.logs,
            vec![mint_event(1, ADDRESS_1), mint_event(2, ADDRESS_1)]
        );
        claim_eq!(owner_of_token(&host, 1), Ok(ADDRESS_1));
        claim_eq!(owner_of_token(&host, 2), Ok(ADDRESS_1));
        claim_eq!(token_count(&host, ADDRESS_1), 2);
        claim_eq!(minted(&host), 2);
        claim_eq!(claimed_in(&host, ADDRESS_1, SalePhase::Presale), 0);
    }

    /// Only admins can mint the reserve.
    #[concordium_test]
    fn test_mint_team_reserve_not_authorized() {
        let mut host = presale_host();

        let result = reserve(&mut host, ADDRESS_1, ADDRESS_1, 2);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(minted(&host), 0);
    }

    /// Paying 0.05 CCD for two presale tokens fails and changes nothing.
    #[concordium_test]
    fn test_incorrect_payment() {
        let mut host = presale_host();

        let params = DelegationPurchaseParams {
            destination: ADDRESS_1,
            token_ids: token_ids(&[1, 2]),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADMIN).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = presale_delegation_purchase(
            &ctx,
            &mut host,
            Amount::from_micro_ccd(50_000),
            &mut logger,
        );
        claim_eq!(
            result,
            Err(CustomContractError::IncorrectPayment.into())
        );

        claim_eq!(minted(&host), 0);
        claim!(logger.logs.is_empty(), "No event should be logged");
        claim_eq!(owner_of_token(&host, 1), Err(ContractError::InvalidTokenId));
        claim_eq!(claimed_in(&host, ADMIN, SalePhase::Presale), 0);
    }

    /// Each entrypoint only opens in its own phase.
    #[concordium_test]
    fn test_phase_gating() {
        let mut host = presale_host();

        let bytes = to_bytes(&PublicPurchaseParams {
            count: 1,
            destination: None,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = public_purchase(&ctx, &mut host, Amount::zero(), &mut logger);
        claim_eq!(result, Err(CustomContractError::WrongPhase.into()));

        configure(&mut host, &[ConfigUpdate::SaleStatus(SalePhase::Public)]);

        let bytes = to_bytes(&OwnershipPurchaseParams {
            token_ids: token_ids(&[1]),
        });
        ctx.set_parameter(&bytes);

        let result = presale_ownership_purchase(
            &ctx,
            &mut host,
            Amount::from_micro_ccd(LOW_FEE),
            &mut logger,
        );
        claim_eq!(result, Err(CustomContractError::WrongPhase.into()));
        claim!(logger.logs.is_empty());
        claim_eq!(minted(&host), 0);
    }

    /// A second purchase over the ceiling is rejected.
    #[concordium_test]
    fn test_quota_exceeded() {
        let mut host = presale_host();

        let bytes = to_bytes(&OwnershipPurchaseParams {
            token_ids: token_ids(&[1, 2]),
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = presale_ownership_purchase(
            &ctx,
            &mut host,
            Amount::from_micro_ccd(60_000),
            &mut logger,
        );
        claim_eq!(result, Ok(()));

        let bytes = to_bytes(&OwnershipPurchaseParams {
            token_ids: token_ids(&[3]),
        });
        ctx.set_parameter(&bytes);
        let result = presale_ownership_purchase(
            &ctx,
            &mut host,
            Amount::from_micro_ccd(LOW_FEE),
            &mut logger,
        );
        claim_eq!(result, Err(CustomContractError::QuotaExceeded.into()));
        claim_eq!(claimed_in(&host, ADDRESS_1, SalePhase::Presale), 2);
        claim_eq!(minted(&host), 2);
    }

    /// Sale managers can configure; other addresses cannot.
    #[concordium_test]
    fn test_update_config_authority() {
        let mut host = new_host();

        let update = ConfigUpdate::SaleStatus(SalePhase::Presale);
        let bytes = to_bytes(&update);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_config(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(host.state().config.current_phase(), SalePhase::Inactive);

        // Promote ADDRESS_1 to sale manager.
        let params = AuthorityUpdateParams {
            role: AuthorityRole::SaleManager,
            kind: AuthorityUpdateKind::Add,
            address: ADDRESS_1,
        };
        let authority_bytes = to_bytes(&params);
        let mut admin_ctx = TestReceiveContext::empty();
        admin_ctx.set_sender(ADMIN).set_parameter(&authority_bytes);
        let result = update_authority(&admin_ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(logger.logs, vec![to_bytes(&SaleEvent::AuthorityUpdated(&params))]);

        let result = update_config(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(host.state().config.current_phase(), SalePhase::Presale);
        claim_eq!(logger.logs.len(), 2);
        claim_eq!(logger.logs[1], to_bytes(&SaleEvent::ConfigUpdated(&update)));

        // Managers still cannot mint the reserve.
        claim_eq!(
            reserve(&mut host, ADDRESS_1, ADDRESS_1, 1),
            Err(ContractError::Unauthorized)
        );
    }

    /// A zero ceiling is refused.
    #[concordium_test]
    fn test_update_config_zero_ceiling() {
        let mut host = new_host();

        let bytes = to_bytes(&ConfigUpdate::PresaleMaxMint(0));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADMIN).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_config(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::InvalidQuota.into()));
        claim!(logger.logs.is_empty());
    }

    /// The reserve stops at the supply cap.
    #[concordium_test]
    fn test_capacity_exceeded() {
        let mut host = new_host_with_cap(5);

        reserve(&mut host, ADMIN, ADDRESS_1, 4)
            .expect_report("Reserve should succeed");
        claim_eq!(
            reserve(&mut host, ADMIN, ADDRESS_1, 2),
            Err(CustomContractError::CapacityExceeded.into())
        );
        claim_eq!(minted(&host), 4);

        reserve(&mut host, ADMIN, ADDRESS_2, 1)
            .expect_report("Last token should be mintable");
        claim_eq!(owner_of_token(&host, 5), Ok(ADDRESS_2));
        claim_eq!(owner_of_token(&host, 6), Err(ContractError::InvalidTokenId));
    }

    /// A batch larger than the event log allows rejects the call.
    #[concordium_test]
    fn test_batch_over_log_limit() {
        let mut host = new_host();

        claim_eq!(
            reserve(&mut host, ADMIN, ADDRESS_1, 65),
            Err(CustomContractError::LogFull.into())
        );
    }

    /// Test transfer succeeds, when `from` is the sender.
    #[concordium_test]
    fn test_transfer_account() {
        let mut host = new_host();
        reserve(&mut host, ADMIN, ADDRESS_1, 1)
            .expect_report("Reserve should succeed");

        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);

        // and parameter.
        let transfer = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_1,
            to: Receiver::from_account(ACCOUNT_2),
            data: AdditionalData::empty(),
        };
        let parameter = TransferParams::from(vec![transfer]);
        let parameter_bytes = to_bytes(&parameter);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();

        // Call the contract function.
        let result: ContractResult<()> = super::transfer(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // Check the logs.
        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                from: ADDRESS_1,
                to: ADDRESS_2,
                token_id: TokenIdU32(1),
                amount: ContractTokenAmount::from(1),
            })),
            "Incorrect event emitted"
        );

        claim_eq!(owner_of_token(&host, 1), Ok(ADDRESS_2));
        claim_eq!(token_count(&host, ADDRESS_1), 0);
        claim_eq!(token_count(&host, ADDRESS_2), 1);
        claim_eq!(minted(&host), 1);
    }

    /// Test transfer token fails, when sender is neither the owner or an
    /// operator of the owner.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut host = new_host();
        reserve(&mut host, ADMIN, ADDRESS_1, 1)
            .expect_report("Reserve should succeed");

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_2);

        let transfer = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_1,
            to: Receiver::from_account(ACCOUNT_2),
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&TransferParams::from(vec![transfer]));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();

        let result: ContractResult<()> = super::transfer(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(owner_of_token(&host, 1), Ok(ADDRESS_1));
    }

    /// Test an operator can transfer on behalf of the owner, and the
    /// operator is reported by `operatorOf`.
    #[concordium_test]
    fn test_operator_transfer() {
        let mut host = new_host();
        reserve(&mut host, ADMIN, ADDRESS_1, 1)
            .expect_report("Reserve should succeed");

        // ADDRESS_1 makes ADDRESS_2 an operator.
        let update = UpdateOperator {
            update: OperatorUpdate::Add,
            operator: ADDRESS_2,
        };
        let update_bytes = to_bytes(&UpdateOperatorParams(vec![update]));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&update_bytes);
        let mut logger = TestLogger::init();

        let result = update_operator(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs[0],
            to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                    UpdateOperatorEvent {
                        owner: ADDRESS_1,
                        operator: ADDRESS_2,
                        update: OperatorUpdate::Add,
                    }
                )
            ),
            "Incorrect event emitted"
        );

        let query_bytes = to_bytes(&OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: ADDRESS_1,
                    address: ADDRESS_2,
                },
                OperatorOfQuery {
                    owner: ADDRESS_2,
                    address: ADDRESS_1,
                },
            ],
        });
        let mut query_ctx = TestReceiveContext::empty();
        query_ctx.set_parameter(&query_bytes);
        let response = operator_of(&query_ctx, &host)
            .expect_report("Failed to query operatorOf");
        claim_eq!(response.0, vec![true, false]);

        // ADDRESS_2 moves the token to itself.
        let transfer = Transfer {
            token_id: TokenIdU32(1),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_1,
            to: Receiver::from_account(ACCOUNT_2),
            data: AdditionalData::empty(),
        };
        let transfer_bytes = to_bytes(&TransferParams::from(vec![transfer]));
        let mut transfer_ctx = TestReceiveContext::empty();
        transfer_ctx
            .set_sender(ADDRESS_2)
            .set_parameter(&transfer_bytes);

        let result: ContractResult<()> = super::transfer(&transfer_ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(owner_of_token(&host, 1), Ok(ADDRESS_2));
    }

    /// CIS-2 balances are 0 or 1 and unknown tokens are rejected.
    #[concordium_test]
    fn test_balance_of() {
        let mut host = new_host();
        reserve(&mut host, ADMIN, ADDRESS_1, 1)
            .expect_report("Reserve should succeed");

        let bytes = to_bytes(&ContractBalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: TokenIdU32(1),
                    address: ADDRESS_1,
                },
                BalanceOfQuery {
                    token_id: TokenIdU32(1),
                    address: ADDRESS_2,
                },
            ],
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);

        let response = balance_of(&ctx, &host)
            .expect_report("Failed to query balanceOf");
        claim_eq!(
            response.0,
            vec![ContractTokenAmount::from(1), ContractTokenAmount::from(0)]
        );

        let bytes = to_bytes(&ContractBalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: TokenIdU32(2),
                address: ADDRESS_1,
            }],
        });
        ctx.set_parameter(&bytes);
        claim_eq!(
            balance_of(&ctx, &host).map(|response| response.0),
            Err(ContractError::InvalidTokenId)
        );
    }

    fn contract_transfer_bytes(token_id: u32) -> Vec<u8> {
        let transfer = Transfer {
            token_id: TokenIdU32(token_id),
            amount: ContractTokenAmount::from(1),
            from: ADDRESS_1,
            to: Receiver::from_contract(
                RECEIVER_CONTRACT,
                OwnedEntrypointName::new_unchecked("onReceivingCIS2".into()),
            ),
            data: AdditionalData::empty(),
        };
        to_bytes(&TransferParams::from(vec![transfer]))
    }

    /// Test transfer to a contract notifies the receiving contract.
    #[concordium_test]
    fn test_transfer_to_contract() {
        let mut host = new_host();
        reserve(&mut host, ADMIN, ADDRESS_1, 1)
            .expect_report("Reserve should succeed");

        host.setup_mock_entrypoint(
            RECEIVER_CONTRACT,
            OwnedEntrypointName::new_unchecked("onReceivingCIS2".into()),
            MockFn::new(|parameter, _amount, _balance, _state| {
                let params =
                    OnReceivingCis2Params::<ContractTokenId, ContractTokenAmount>::deserial(
                        &mut Cursor::new(parameter),
                    )
                    .map_err(|_| CallContractError::Trap)?;
                if params.token_id != TokenIdU32(1)
                    || params.amount != ContractTokenAmount::from(1)
                    || params.from != ADDRESS_1
                {
                    return Err(CallContractError::Trap);
                }
                Ok((false, Some(())))
            }),
        );

        let bytes = contract_transfer_bytes(1);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result: ContractResult<()> = super::transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            logger.logs,
            vec![to_bytes(&Cis2Event::Transfer(TransferEvent {
                from: ADDRESS_1,
                to: Address::Contract(RECEIVER_CONTRACT),
                token_id: TokenIdU32(1),
                amount: ContractTokenAmount::from(1),
            }))]
        );
        claim_eq!(
            owner_of_token(&host, 1),
            Ok(Address::Contract(RECEIVER_CONTRACT))
        );
        claim_eq!(token_count(&host, ADDRESS_1), 0);
        claim_eq!(token_count(&host, Address::Contract(RECEIVER_CONTRACT)), 1);
    }

    /// Test transfer fails when the receiving contract rejects the token.
    #[concordium_test]
    fn test_transfer_to_rejecting_contract() {
        let mut host = new_host();
        reserve(&mut host, ADMIN, ADDRESS_1, 1)
            .expect_report("Reserve should succeed");

        host.setup_mock_entrypoint(
            RECEIVER_CONTRACT,
            OwnedEntrypointName::new_unchecked("onReceivingCIS2".into()),
            MockFn::new(|_parameter, _amount, _balance, _state| {
                Err(CallContractError::<()>::Trap)
            }),
        );

        let bytes = contract_transfer_bytes(1);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result: ContractResult<()> = super::transfer(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::InvokeContractError.into())
        );
    }

    fn view_members(host: &Host, role: AuthorityRole) -> Vec<Address> {
        let bytes = to_bytes(&AuthorityViewParams {
            role,
            skip: 0,
            show: 10,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        view_authority(&ctx, host).expect_report("Failed to query viewAuthority")
    }

    /// Roles granted through `updateAuthority` show up in `viewAuthority`.
    #[concordium_test]
    fn test_view_authority() {
        let mut host = new_host();

        claim_eq!(view_members(&host, AuthorityRole::Admin), vec![ADMIN]);
        claim!(view_members(&host, AuthorityRole::SaleManager).is_empty());

        let bytes = to_bytes(&AuthorityUpdateParams {
            role: AuthorityRole::SaleManager,
            kind: AuthorityUpdateKind::Add,
            address: ADDRESS_2,
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADMIN).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(update_authority(&ctx, &mut host, &mut logger), Ok(()));

        claim_eq!(view_members(&host, AuthorityRole::SaleManager), vec![ADDRESS_2]);
        claim_eq!(view_members(&host, AuthorityRole::Admin), vec![ADMIN]);
    }

    /// CIS-0 and CIS-2 are supported, anything else is not.
    #[concordium_test]
    fn test_supports() {
        let host = new_host();

        let bytes = to_bytes(&SupportsQueryParams {
            queries: vec![
                StandardIdentifierOwned::new_unchecked(String::from("CIS-0")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-2")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-1")),
            ],
        });
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);

        let response = supports(&ctx, &host).expect_report("Failed to query supports");
        claim_eq!(
            to_bytes(&response),
            to_bytes(&SupportsQueryResponse::from(vec![
                SupportResult::Support,
                SupportResult::Support,
                SupportResult::NoSupport,
            ]))
        );
    }
}
