use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Direction of a swap relative to the bridged chain pair.
///
/// Encodes as its bare ordinal. Ordinals outside the defined set are kept
/// as [`SwapType::Unknown`] so decoding a newer peer's payload never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum SwapType {
    #[default]
    NoSwap,
    SwapIn,
    SwapOut,
    Unknown(u32),
}

impl From<u32> for SwapType {
    fn from(ordinal: u32) -> Self {
        match ordinal {
            0 => SwapType::NoSwap,
            1 => SwapType::SwapIn,
            2 => SwapType::SwapOut,
            other => SwapType::Unknown(other),
        }
    }
}

impl From<SwapType> for u32 {
    fn from(swap_type: SwapType) -> Self {
        match swap_type {
            SwapType::NoSwap => 0,
            SwapType::SwapIn => 1,
            SwapType::SwapOut => 2,
            SwapType::Unknown(other) => other,
        }
    }
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapType::NoSwap => write!(f, "noswap"),
            SwapType::SwapIn => write!(f, "swapin"),
            SwapType::SwapOut => write!(f, "swapout"),
            SwapType::Unknown(ordinal) => write!(f, "unknown swap type {ordinal}"),
        }
    }
}

impl SwapType {
    pub fn is_zero(&self) -> bool {
        u32::from(*self) == 0
    }
}

/// Strategy used to build the outbound transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum SwapTxType {
    #[default]
    SwapInTx,
    SwapOutTx,
    P2shSwapInTx,
    Unknown(u32),
}

impl From<u32> for SwapTxType {
    fn from(ordinal: u32) -> Self {
        match ordinal {
            0 => SwapTxType::SwapInTx,
            1 => SwapTxType::SwapOutTx,
            2 => SwapTxType::P2shSwapInTx,
            other => SwapTxType::Unknown(other),
        }
    }
}

impl From<SwapTxType> for u32 {
    fn from(tx_type: SwapTxType) -> Self {
        match tx_type {
            SwapTxType::SwapInTx => 0,
            SwapTxType::SwapOutTx => 1,
            SwapTxType::P2shSwapInTx => 2,
            SwapTxType::Unknown(other) => other,
        }
    }
}

impl fmt::Display for SwapTxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapTxType::SwapInTx => write!(f, "swapintx"),
            SwapTxType::SwapOutTx => write!(f, "swapouttx"),
            SwapTxType::P2shSwapInTx => write!(f, "p2shswapintx"),
            SwapTxType::Unknown(ordinal) => write!(f, "unknown swaptx type {ordinal}"),
        }
    }
}

impl SwapTxType {
    pub fn is_zero(&self) -> bool {
        u32::from(*self) == 0
    }
}

/// One transfer observed on the source chain, as reported by the detector.
/// Immutable after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxSwapInfo {
    #[serde(rename = "pairid")]
    pub pair_id: String,
    pub hash: String,
    pub height: u64,
    pub timestamp: u64,
    pub from: String,
    #[serde(rename = "txto")]
    pub tx_to: String,
    pub to: String,
    /// Chain-crossing anchor address the transfer is bound to.
    pub bind: String,
    pub value: U256,
}

/// Point-in-time inclusion status of a transaction.
///
/// The polling collaborator replaces the whole value on every refresh so
/// confirmations, height and hash always come from a single chain query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxStatus {
    /// Chain-specific receipt shape, opaque to this layer and decoded
    /// lazily by the collaborator that understands the chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<serde_json::Value>,
    pub confirmations: u64,
    pub block_height: u64,
    pub block_hash: String,
    pub block_time: u64,
}

/// Identity and classification of one logical swap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapInfo {
    #[serde(rename = "pairid", default, skip_serializing_if = "String::is_empty")]
    pub pair_id: String,
    #[serde(rename = "swapid", default, skip_serializing_if = "String::is_empty")]
    pub swap_id: String,
    #[serde(rename = "swaptype", default, skip_serializing_if = "SwapType::is_zero")]
    pub swap_type: SwapType,
    #[serde(rename = "txtype", default, skip_serializing_if = "SwapTxType::is_zero")]
    pub tx_type: SwapTxType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identifier: String,
    /// Set when this build retries a prior failed attempt.
    #[serde(default, skip_serializing_if = "is_false")]
    pub reswapping: bool,
}

impl SwapInfo {
    pub fn is_swapin(&self) -> bool {
        self.swap_type == SwapType::SwapIn
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
