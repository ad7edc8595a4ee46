//! A phased NFT sale contract using the Concordium Token Standard CIS2.
//!
//! # Description
//! Tokens are numbered sequentially from 1 up to a supply cap fixed when the
//! instance is initialized. They are sold in two phases:
//!
//! - `Presale`: `presaleDelegationPurchase` and `presaleOwnershipPurchase`,
//!   priced at the low fee.
//! - `Public`: `publicPurchase`, priced at the base fee.
//!
//! Every purchase must attach exactly `count * unit price` and stays within a
//! per-caller ceiling that is tracked separately for each phase. Admins can
//! mint the team reserve at any time without paying and without consuming
//! anyone's quota. Every issued token is logged as a CIS2 `Mint` event, in
//! ascending token ID order.
//!
//! Sale managers switch phases and adjust fees and ceilings through
//! `updateConfig`. Issued tokens follow the usual CIS2 `transfer` and
//! `updateOperator` rules.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, external::*, phase::*, quota::*, state::*, supply::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod contract;
mod events;
mod external;
mod phase;
mod quota;
mod state;
mod supply;
