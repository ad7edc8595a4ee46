use super::*;

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum SaleEvent<'e> {
    /// The sale configuration was changed
    ConfigUpdated(&'e ConfigUpdate),
    /// An address was added to or removed from a role
    AuthorityUpdated(&'e AuthorityUpdateParams),
}

impl<'e> Serial for SaleEvent<'e> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            SaleEvent::ConfigUpdated(update) => {
                out.write_u8(CONFIG_UPDATED_TAG)?;
                update.serial(out)
            }
            SaleEvent::AuthorityUpdated(update) => {
                out.write_u8(AUTHORITY_UPDATED_TAG)?;
                update.serial(out)
            }
        }
    }
}

/// Logs one `Mint` event per issued token, in ascending token ID order.
pub fn log_issued(
    logger: &mut impl HasLogger,
    token_ids: core::ops::RangeInclusive<u32>,
    owner: Address,
) -> ContractResult<()> {
    for token_id in token_ids {
        logger.log(&Cis2Event::Mint(MintEvent {
            token_id: TokenIdU32(token_id),
            amount: ContractTokenAmount::from(1),
            owner,
        }))?;
    }

    Ok(())
}
