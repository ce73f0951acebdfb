use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Chain-family-specific fields attached to one build attempt.
///
/// At most one of the four leaves is populated, matching the destination
/// chain family. The type does not enforce this; the build step validates
/// it before the args are handed downstream, and the accessors on
/// [`BuildTxArgs`](crate::BuildTxArgs) tolerate ill-formed instances by
/// picking the first populated leaf in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllExtras {
    /// Number of replacement attempts made for this swap so far.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub replace_num: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btc_extra: Option<BtcExtraArgs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth_extra: Option<EthExtraArgs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ripple_extra: Option<RippleExtra>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terra_extra: Option<TerraExtra>,
}

/// Account-chain (Ethereum-like) build fields. `None` means not yet
/// assigned; the signer fills nonce and fee fields in later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthExtraArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_tip_cap: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_fee_cap: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
}

/// Ledger-sequence chain build fields, Ripple flavor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RippleExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
}

/// Ledger-sequence chain build fields, Terra flavor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerraExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
}

/// UTXO-chain build fields. There is no nonce here; the transaction
/// consumes the listed previous outputs instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BtcExtraArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_fee_per_kb: Option<i64>,
    /// Internal-only, never encoded.
    #[serde(skip)]
    pub change_address: Option<String>,
    /// Order is significant: it matches input ordering in the constructed
    /// transaction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_out_points: Vec<BtcOutPoint>,
}

/// Reference to a spent UTXO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BtcOutPoint {
    pub hash: String,
    pub index: u32,
}

/// Deposit-script binding produced by the script-generation collaborator
/// for peg-in swaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2shAddressInfo {
    pub bind_address: String,
    pub p2sh_address: String,
    pub redeem_script: String,
    pub redeem_script_disasm: String,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}
