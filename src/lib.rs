//! Shared transaction-description model for a cross-chain swap system.
//!
//! A detector on the source chain produces a [`TxSwapInfo`]; a build step
//! turns it into a [`BuildTxArgs`] carrying exactly one chain-family
//! [`extras`](AllExtras) variant for the destination chain. The signer and
//! rebroadcast pipeline then read and assign nonce/fee values through the
//! chain-agnostic accessors on [`BuildTxArgs`] without knowing which family
//! is active. Building, signing, broadcasting and confirmation polling all
//! live in collaborators that exchange these structures.

pub mod args;
pub mod extras;
pub mod swap;

pub use args::BuildTxArgs;
pub use extras::{
    AllExtras, BtcExtraArgs, BtcOutPoint, EthExtraArgs, P2shAddressInfo, RippleExtra, TerraExtra,
};
pub use swap::{SwapInfo, SwapTxType, SwapType, TxStatus, TxSwapInfo};
