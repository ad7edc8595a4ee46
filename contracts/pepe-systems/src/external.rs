use super::*;

/// Init parameter. The sale starts `Inactive`.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Maximum number of tokens that can ever be issued.
    pub supply_cap: u32,
    /// Ceiling and low fee for the presale.
    pub presale: PhaseLimits,
    /// Ceiling and base fee for the public sale.
    pub public: PhaseLimits,
}

/// Presale purchase on behalf of another address.
/// Only the number of `token_ids` matters: tokens are always issued with the
/// next free IDs.
#[derive(Debug, Serialize, SchemaType)]
pub struct DelegationPurchaseParams {
    /// Receiver of the tokens.
    pub destination: Address,
    /// Advisory token IDs, one per requested token.
    pub token_ids: Vec<ContractTokenId>,
}

/// Presale purchase for the sender.
/// Only the number of `token_ids` matters.
#[derive(Debug, Serialize, SchemaType)]
pub struct OwnershipPurchaseParams {
    /// Advisory token IDs, one per requested token.
    pub token_ids: Vec<ContractTokenId>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct PublicPurchaseParams {
    /// Number of tokens to buy.
    pub count: u32,
    /// Receiver of the tokens, the sender if omitted.
    pub destination: Option<Address>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct MintReserveParams {
    /// Receiver of the tokens.
    pub destination: Address,
    /// Number of tokens to mint.
    pub count: u32,
}

/// Parameter of the `claimed` view.
#[derive(Debug, Serialize, SchemaType)]
pub struct ClaimedQuery {
    pub requester: Address,
    pub phase: SalePhase,
}

#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct SaleConfigView {
    /// Active phase and the limits of both selling phases.
    pub config: SaleConfig,
    /// Tokens issued so far.
    pub minted: u32,
    pub supply_cap: u32,
}
