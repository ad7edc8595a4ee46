//! Errors, type aliases, event tags and the role store shared by the
//! PepeSystems sale contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{authority::*, constants::*, errors::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod authority;
mod constants;
mod errors;
mod types;
