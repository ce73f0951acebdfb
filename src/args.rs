use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::extras::AllExtras;
use crate::swap::SwapInfo;

/// Full instruction set for constructing one outbound transaction.
///
/// `from`/`to` are the effective addresses after any safety or compliance
/// substitution; `origin_from`/`origin_tx_to` keep what was observed on the
/// source chain. One instance represents one build attempt; a replacement
/// attempt is a new instance whose extras carry the bumped replace counter.
///
/// The accessors below are the chain-agnostic view over the extras variant:
/// they never fail, degrading to a zero value or a no-op when the state
/// they need is absent. Callers that require well-formed extras must
/// validate before handing the args downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTxArgs {
    #[serde(rename = "swapInfo", default)]
    pub swap_info: SwapInfo,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub to: String,
    #[serde(rename = "originFrom", default, skip_serializing_if = "String::is_empty")]
    pub origin_from: String,
    #[serde(rename = "originTxTo", default, skip_serializing_if = "String::is_empty")]
    pub origin_tx_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    #[serde(rename = "originValue", default, skip_serializing_if = "Option::is_none")]
    pub origin_value: Option<U256>,
    /// Value actually swapped, after fees.
    #[serde(rename = "swapvalue", default, skip_serializing_if = "Option::is_none")]
    pub swap_value: Option<U256>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<AllExtras>,
}

impl BuildTxArgs {
    /// Replace-attempt counter, 0 when no extras are attached.
    pub fn replace_num(&self) -> u64 {
        self.extra.as_ref().map_or(0, |extra| extra.replace_num)
    }

    /// Reduced copy carrying only swap identity and extras, for
    /// collaborators that need build context without the payload fields.
    pub fn extra_args(&self) -> BuildTxArgs {
        BuildTxArgs {
            swap_info: self.swap_info.clone(),
            extra: self.extra.clone(),
            ..BuildTxArgs::default()
        }
    }

    /// Gas price of the account-chain variant, `None` for every other
    /// variant or when extras are absent.
    pub fn tx_gas_price(&self) -> Option<U256> {
        self.extra.as_ref()?.eth_extra.as_ref()?.gas_price
    }

    pub fn set_tx_gas_price(&mut self, gas_price: U256) {
        match self.extra.as_mut().and_then(|extra| extra.eth_extra.as_mut()) {
            Some(eth) => eth.gas_price = Some(gas_price),
            None => trace!(%gas_price, "set_tx_gas_price ignored: no account-chain extras"),
        }
    }

    /// The per-sender ordering value, whatever the active chain family
    /// calls it: account-chain nonce, then Ripple sequence, then Terra
    /// sequence. 0 when none is assigned.
    pub fn tx_nonce(&self) -> u64 {
        let Some(extra) = self.extra.as_ref() else {
            return 0;
        };
        if let Some(nonce) = extra.eth_extra.as_ref().and_then(|eth| eth.nonce) {
            return nonce;
        }
        if let Some(sequence) = extra.ripple_extra.as_ref().and_then(|ripple| ripple.sequence) {
            return u64::from(sequence);
        }
        if let Some(sequence) = extra.terra_extra.as_ref().and_then(|terra| terra.sequence) {
            return sequence;
        }
        0
    }

    /// Writes the ordering value into the first populated variant, checked
    /// in the same fixed order `tx_nonce` reads them. No-op when extras are
    /// absent or only the UTXO variant is populated.
    pub fn set_tx_nonce(&mut self, nonce: u64) {
        let Some(extra) = self.extra.as_mut() else {
            trace!(nonce, "set_tx_nonce ignored: no extras attached");
            return;
        };
        if let Some(eth) = extra.eth_extra.as_mut() {
            eth.nonce = Some(nonce);
        } else if let Some(ripple) = extra.ripple_extra.as_mut() {
            ripple.sequence = Some(nonce as u32);
        } else if let Some(terra) = extra.terra_extra.as_mut() {
            terra.sequence = Some(nonce);
        } else {
            trace!(nonce, "set_tx_nonce ignored: no sequencing-capable extras");
        }
    }

    pub fn set_replace_num(&mut self, replace_num: u64) {
        if let Some(extra) = self.extra.as_mut() {
            extra.replace_num = replace_num;
        }
    }
}
