//! Request and response shapes for monero-wallet-rpc methods.
//!
//! Amounts are atomic units. Optional request fields are left off the wire
//! when unset so the wallet applies its own defaults.

use serde::{Deserialize, Serialize};

use crate::rpc::skip::{is_false, is_zero};

/// Account (`major`) and subaddress (`minor`) index pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Index {
    pub major: u64,
    pub minor: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDaemonRequest {
    /// Daemon URL to connect to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Untrusted daemons disable some wallet methods.
    #[serde(skip_serializing_if = "is_false")]
    pub trusted: bool,
    /// `disabled`, `enabled` or `autodetect`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_support: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_private_key_path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_certificate_path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_ca_file: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ssl_allowed_fingerprints: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub ssl_allow_any_cert: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceRequest {
    pub account_index: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address_indices: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubaddressBalance {
    pub account_index: u64,
    pub address_index: u64,
    pub address: String,
    pub balance: u64,
    pub unlocked_balance: u64,
    pub label: String,
    pub num_unspent_outputs: u64,
    pub blocks_to_unlock: u64,
    pub time_to_unlock: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBalanceResponse {
    pub balance: u64,
    pub unlocked_balance: u64,
    pub multisig_import_needed: bool,
    pub per_subaddress: Vec<SubaddressBalance>,
    pub blocks_to_unlock: u64,
    pub time_to_unlock: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressRequest {
    pub account_index: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address_index: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubaddressInfo {
    pub address: String,
    pub label: String,
    pub address_index: u64,
    pub used: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAddressResponse {
    /// Primary address of the account.
    pub address: String,
    pub addresses: Vec<SubaddressInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressIndexRequest {
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAddressIndexResponse {
    pub index: Index,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddressRequest {
    pub account_index: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAddressResponse {
    pub address: String,
    pub address_index: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAddressRequest {
    pub index: Index,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAddressRequest {
    pub address: String,
    #[serde(skip_serializing_if = "is_false")]
    pub any_net_type: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_openalias: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateAddressResponse {
    pub valid: bool,
    pub integrated: bool,
    pub subaddress: bool,
    pub nettype: String,
    pub openalias_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountsRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubaddressAccount {
    pub account_index: u64,
    pub balance: u64,
    pub base_address: String,
    pub label: String,
    pub tag: String,
    pub unlocked_balance: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAccountsResponse {
    pub subaddress_accounts: Vec<SubaddressAccount>,
    pub total_balance: u64,
    pub total_unlocked_balance: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAccountResponse {
    pub account_index: u64,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAccountRequest {
    pub account_index: u64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountTag {
    pub tag: String,
    pub label: String,
    pub accounts: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAccountTagsResponse {
    pub account_tags: Vec<AccountTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAccountsRequest {
    pub tag: String,
    pub accounts: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntagAccountsRequest {
    pub accounts: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAccountTagDescriptionRequest {
    pub tag: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetHeightResponse {
    pub height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Destination {
    pub amount: u64,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub destinations: Vec<Destination>,
    #[serde(skip_serializing_if = "is_zero")]
    pub account_index: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subaddr_indices: Vec<u64>,
    /// 0-3; 0 lets the wallet pick.
    #[serde(skip_serializing_if = "is_zero")]
    pub priority: u64,
    pub mixin: u64,
    pub ring_size: u64,
    pub unlock_time: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_key: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    pub get_tx_hex: bool,
    pub get_tx_metadata: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferResponse {
    pub amount: u64,
    pub fee: u64,
    pub multisig_txset: String,
    pub tx_blob: String,
    pub tx_hash: String,
    pub tx_key: String,
    pub tx_metadata: String,
    pub unsigned_txset: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSplitRequest {
    pub destinations: Vec<Destination>,
    #[serde(skip_serializing_if = "is_zero")]
    pub account_index: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subaddr_indices: Vec<u64>,
    pub mixin: u64,
    pub ring_size: u64,
    pub unlock_time: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_key: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub priority: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    pub get_tx_hex: bool,
    pub new_algorithm: bool,
    pub get_tx_metadata: bool,
}

/// Result of the transfer/sweep family that may produce several transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferSetResponse {
    pub tx_hash_list: Vec<String>,
    pub tx_key_list: Vec<String>,
    pub amount_list: Vec<u64>,
    pub fee_list: Vec<u64>,
    pub tx_blob_list: Vec<String>,
    pub tx_metadata_list: Vec<String>,
    pub multisig_txset: String,
    pub unsigned_txset: String,
}

pub type TransferSplitResponse = TransferSetResponse;
pub type SweepDustResponse = TransferSetResponse;
pub type SweepAllResponse = TransferSetResponse;
pub type SweepSingleResponse = TransferSetResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignTransferRequest {
    pub unsigned_txset: String,
    #[serde(skip_serializing_if = "is_false")]
    pub export_raw: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignTransferResponse {
    pub signed_txset: String,
    pub tx_hash_list: Vec<String>,
    pub tx_raw_list: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransferRequest {
    pub tx_data_hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxHashListResponse {
    pub tx_hash_list: Vec<String>,
}

pub type SubmitTransferResponse = TxHashListResponse;
pub type SubmitMultisigResponse = TxHashListResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepDustRequest {
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_keys: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_hex: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_metadata: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepAllRequest {
    /// Destination address.
    pub address: String,
    pub account_index: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subaddr_indices: Vec<u64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub priority: u64,
    pub mixin: u64,
    pub ring_size: u64,
    pub unlock_time: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_keys: bool,
    /// Only sweep outputs below this amount.
    #[serde(skip_serializing_if = "is_zero")]
    pub below_amount: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_hex: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_metadata: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSingleRequest {
    pub address: String,
    pub account_index: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subaddr_indices: Vec<u64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub priority: u64,
    pub mixin: u64,
    pub ring_size: u64,
    pub unlock_time: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_keys: bool,
    /// Key image of the output to sweep.
    pub key_image: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub below_amount: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_hex: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub get_tx_metadata: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayTxRequest {
    /// Transaction metadata from a `do_not_relay` transfer.
    pub hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayTxResponse {
    pub tx_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPaymentsRequest {
    pub payment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub payment_id: String,
    pub tx_hash: String,
    pub amount: u64,
    pub block_height: u64,
    pub unlock_time: u64,
    pub subaddr_index: Index,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentsResponse {
    pub payments: Vec<Payment>,
}

pub type GetPaymentsResponse = PaymentsResponse;
pub type GetBulkPaymentsResponse = PaymentsResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBulkPaymentsRequest {
    pub payment_ids: Vec<String>,
    pub min_block_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTransfersRequest {
    /// `all`, `available` or `unavailable`.
    pub transfer_type: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub account_index: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subaddr_indices: Vec<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomingTransfer {
    pub amount: u64,
    pub global_index: u64,
    pub key_image: String,
    pub spent: bool,
    pub subaddr_index: Index,
    pub tx_hash: String,
    pub tx_size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomingTransfersResponse {
    pub transfers: Vec<IncomingTransfer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryKeyRequest {
    /// `mnemonic`, `view_key` or `spend_key`.
    pub key_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryKeyResponse {
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeIntegratedAddressRequest {
    /// Defaults to the wallet's primary address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub standard_address: String,
    /// 16 hex chars; a random one is generated when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakeIntegratedAddressResponse {
    pub integrated_address: String,
    pub payment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitIntegratedAddressRequest {
    pub integrated_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitIntegratedAddressResponse {
    pub is_subaddress: bool,
    pub payment_id: String,
    pub standard_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTxNotesRequest {
    pub txids: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTxNotesRequest {
    pub txids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTxNotesResponse {
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAttributeRequest {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAttributeRequest {
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAttributeResponse {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTxKeyRequest {
    pub txid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTxKeyResponse {
    pub tx_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTxKeyRequest {
    pub txid: String,
    pub tx_key: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckTxKeyResponse {
    pub confirmations: u64,
    pub in_pool: bool,
    pub received: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTxProofRequest {
    pub txid: String,
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Signature returned by the proof generators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureResponse {
    pub signature: String,
}

pub type GetTxProofResponse = SignatureResponse;
pub type GetSpendProofResponse = SignatureResponse;
pub type GetReserveProofResponse = SignatureResponse;
pub type SignResponse = SignatureResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTxProofRequest {
    pub txid: String,
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckTxProofResponse {
    pub confirmations: u64,
    pub good: bool,
    pub in_pool: bool,
    pub received: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSpendProofRequest {
    pub txid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSpendProofRequest {
    pub txid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub signature: String,
}

/// Verdict returned by the proof/signature checkers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoodResponse {
    pub good: bool,
}

pub type CheckSpendProofResponse = GoodResponse;
pub type VerifyResponse = GoodResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetReserveProofRequest {
    /// Prove the whole wallet balance instead of one account.
    pub all: bool,
    pub account_index: u64,
    pub amount: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReserveProofRequest {
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckReserveProofResponse {
    pub good: bool,
    pub spent: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransfersRequest {
    #[serde(rename = "in", skip_serializing_if = "is_false")]
    pub incoming: bool,
    #[serde(rename = "out", skip_serializing_if = "is_false")]
    pub outgoing: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub pending: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub failed: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub pool: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub filter_by_height: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_height: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_height: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub account_index: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subaddr_indices: Vec<u64>,
}

/// A wallet transfer entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    pub address: String,
    pub amount: u64,
    pub amounts: Vec<u64>,
    pub confirmations: u64,
    pub destinations: Vec<Destination>,
    pub double_spend_seen: bool,
    pub fee: u64,
    pub height: u64,
    pub locked: bool,
    pub note: String,
    pub payment_id: String,
    pub subaddr_index: Index,
    pub suggested_confirmations_threshold: u64,
    pub timestamp: u64,
    pub txid: String,
    /// `in`, `out`, `pending`, `failed` or `pool`.
    #[serde(rename = "type")]
    pub transfer_type: String,
    pub unlock_time: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTransfersResponse {
    #[serde(rename = "in")]
    pub incoming: Vec<Transfer>,
    #[serde(rename = "out")]
    pub outgoing: Vec<Transfer>,
    pub pending: Vec<Transfer>,
    pub failed: Vec<Transfer>,
    pub pool: Vec<Transfer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransferByTxidRequest {
    pub txid: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub account_index: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTransferByTxidResponse {
    pub transfer: Transfer,
    pub transfers: Vec<Transfer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeTransferRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unsigned_txset: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub multisig_txset: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    pub address: String,
    pub amount: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferDescription {
    pub amount_in: u64,
    pub amount_out: u64,
    pub recipients: Vec<Recipient>,
    pub change_address: String,
    pub change_amount: u64,
    pub fee: u64,
    pub payment_id: String,
    pub ring_size: u64,
    pub unlock_time: u64,
    pub dummy_outputs: u64,
    pub extra: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeTransferResponse {
    pub desc: Vec<TransferDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub data: String,
    pub address: String,
    pub signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutputsRequest {
    /// Export every output, not only those new since the last export.
    #[serde(skip_serializing_if = "is_false")]
    pub all: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOutputsResponse {
    pub outputs_data_hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutputsRequest {
    pub outputs_data_hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOutputsResponse {
    pub num_imported: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignedKeyImage {
    pub key_image: String,
    pub signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportKeyImagesRequest {
    #[serde(skip_serializing_if = "is_false")]
    pub all: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportKeyImagesResponse {
    pub offset: u64,
    pub signed_key_images: Vec<SignedKeyImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportKeyImagesRequest {
    pub signed_key_images: Vec<SignedKeyImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportKeyImagesResponse {
    pub height: u64,
    pub spent: u64,
    pub unspent: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeUriRequest {
    pub address: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub amount: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recipient_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tx_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakeUriResponse {
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseUriRequest {
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentUri {
    pub address: String,
    pub amount: u64,
    pub payment_id: String,
    pub recipient_name: String,
    pub tx_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseUriResponse {
    pub uri: PaymentUri,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressBookRequest {
    pub entries: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBookEntry {
    pub address: String,
    pub description: String,
    pub index: u64,
    pub payment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAddressBookResponse {
    pub entries: Vec<AddressBookEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAddressBookRequest {
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddAddressBookResponse {
    pub index: u64,
}

/// Each `set_*` flag selects whether the matching field is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditAddressBookRequest {
    pub index: u64,
    pub set_address: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    pub set_description: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub set_payment_id: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAddressBookRequest {
    pub index: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    #[serde(skip_serializing_if = "is_zero")]
    pub start_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshResponse {
    pub blocks_fetched: u64,
    pub received_money: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRefreshRequest {
    #[serde(skip_serializing_if = "is_false")]
    pub enable: bool,
    /// Seconds between refreshes.
    #[serde(skip_serializing_if = "is_zero")]
    pub period: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartMiningRequest {
    pub threads_count: u64,
    pub do_background_mining: bool,
    pub ignore_battery: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetLanguagesResponse {
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWalletRequest {
    pub filename: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Seed language, e.g. `English`.
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFromKeysRequest {
    #[serde(skip_serializing_if = "is_zero")]
    pub restore_height: u64,
    pub filename: String,
    pub address: String,
    /// Omit for a view-only wallet.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub spendkey: String,
    pub viewkey: String,
    pub password: String,
    pub autosave_current: bool,
}

/// Address and status text of a freshly created or restored wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateFromKeysResponse {
    pub address: String,
    pub info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWalletRequest {
    pub filename: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreDeterministicWalletRequest {
    #[serde(rename = "filename")]
    pub name: String,
    pub password: String,
    /// Mnemonic phrase.
    pub seed: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub restore_height: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub seed_offset: String,
    pub autosave_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreDeterministicWalletResponse {
    pub address: String,
    pub info: String,
    pub seed: String,
    pub was_deprecated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeWalletPasswordRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub old_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub new_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsMultisigResponse {
    pub multisig: bool,
    pub ready: bool,
    pub threshold: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareMultisigResponse {
    pub multisig_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeMultisigRequest {
    pub multisig_info: Vec<String>,
    pub threshold: u64,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakeMultisigResponse {
    pub address: String,
    pub multisig_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportMultisigInfoResponse {
    pub info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMultisigInfoRequest {
    pub info: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportMultisigInfoResponse {
    pub n_outputs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeMultisigRequest {
    pub multisig_info: Vec<String>,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalizeMultisigResponse {
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignMultisigRequest {
    pub tx_data_hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignMultisigResponse {
    pub tx_data_hex: String,
    pub tx_hash_list: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitMultisigRequest {
    pub tx_data_hex: String,
}

/// RPC version; major in the high 16 bits, minor in the low 16.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVersionResponse {
    pub version: u64,
}

impl GetVersionResponse {
    pub fn major(&self) -> u64 {
        self.version >> 16
    }

    pub fn minor(&self) -> u64 {
        self.version & 0xffff
    }
}
