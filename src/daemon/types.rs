//! Request and response shapes for monerod's JSON-RPC methods.
//!
//! Amounts are atomic units (see [`crate::units`]). Response structs decode
//! missing fields as zero values.

use serde::{Deserialize, Serialize};

use crate::rpc::skip::{is_false, is_zero};

/// Block header information, shared by the header lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockHeader {
    /// Block size in bytes.
    pub block_size: u64,
    /// Number of blocks succeeding this block on the chain.
    pub depth: u64,
    pub difficulty: u64,
    pub hash: String,
    pub height: u64,
    pub major_version: u64,
    pub minor_version: u64,
    pub nonce: u64,
    /// Transactions in the block, not counting the coinbase.
    pub num_txes: u64,
    /// True when the block is not part of the longest chain.
    pub orphan_status: bool,
    pub prev_hash: String,
    /// Newly generated atomic units rewarded to the miner.
    pub reward: u64,
    /// Unix time the block was recorded.
    pub timestamp: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateBlocksRequest {
    #[serde(skip_serializing_if = "is_zero")]
    pub amount_of_blocks: u64,
    /// Address receiving the coinbase rewards.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub wallet_address: String,
    #[serde(rename = "prev_block", skip_serializing_if = "String::is_empty")]
    pub previous_block: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub starting_nonce: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateBlocksResponse {
    pub blocks: Vec<String>,
    pub height: u64,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockCountResponse {
    /// Blocks in the longest chain seen by the node.
    pub count: u64,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockTemplateRequest {
    /// Address receiving the coinbase if the block is mined.
    pub wallet_address: String,
    pub reserve_size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockTemplateResponse {
    pub blocktemplate_blob: String,
    pub blockhashing_blob: String,
    pub difficulty: u64,
    pub expected_reward: u64,
    pub height: u64,
    pub prev_hash: String,
    pub reserved_offset: u64,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitBlockResponse {
    pub status: String,
}

/// Shared shape of the three block header lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockHeaderResponse {
    pub block_header: BlockHeader,
    pub untrusted: bool,
}

pub type GetLastBlockHeaderResponse = BlockHeaderResponse;
pub type GetBlockHeaderByHashResponse = BlockHeaderResponse;
pub type GetBlockHeaderByHeightResponse = BlockHeaderResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockHeaderByHashRequest {
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockHeaderByHeightRequest {
    pub height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockHeadersRangeRequest {
    pub start_height: u64,
    pub end_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockHeadersRangeResponse {
    pub headers: Vec<BlockHeader>,
    pub untrusted: bool,
}

/// Look a block up by height, or by hash when `hash` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBlockRequest {
    pub height: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBlockResponse {
    /// Hex blob of the block.
    pub blob: String,
    pub block_header: BlockHeader,
    /// JSON-formatted block details, as a string.
    pub json: String,
    pub untrusted: bool,
}

/// A peer connection as reported by `get_connections`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub address: String,
    pub avg_download: u64,
    pub avg_upload: u64,
    pub connection_id: String,
    pub current_download: u64,
    pub current_upload: u64,
    pub height: u64,
    pub host: String,
    pub incoming: bool,
    pub ip: String,
    pub live_time: u64,
    pub local_ip: bool,
    pub localhost: bool,
    pub peer_id: String,
    pub port: String,
    pub recv_count: u64,
    pub recv_idle_time: u64,
    pub send_count: u64,
    pub send_idle_time: u64,
    pub state: String,
    pub support_flags: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetConnectionsResponse {
    pub connections: Vec<Connection>,
}

/// General node and network state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetInfoResponse {
    pub adjusted_time: u64,
    pub alt_blocks_count: u64,
    pub block_size_limit: u64,
    pub block_size_median: u64,
    pub block_weight_limit: u64,
    pub block_weight_median: u64,
    pub bootstrap_daemon_address: String,
    pub busy_syncing: bool,
    pub credits: u64,
    pub cumulative_difficulty: u64,
    pub cumulative_difficulty_top64: u64,
    pub database_size: u64,
    pub difficulty: u64,
    pub difficulty_top64: u64,
    pub free_space: u64,
    pub grey_peerlist_size: u64,
    pub height: u64,
    pub height_without_bootstrap: u64,
    pub incoming_connections_count: u64,
    pub mainnet: bool,
    /// One of `mainnet`, `stagenet` or `testnet`.
    pub nettype: String,
    pub offline: bool,
    pub outgoing_connections_count: u64,
    pub rpc_connections_count: u64,
    pub stagenet: bool,
    pub start_time: u64,
    pub synchronized: bool,
    pub target: u64,
    pub target_height: u64,
    pub testnet: bool,
    pub top_block_hash: String,
    pub top_hash: String,
    pub tx_count: u64,
    pub tx_pool_size: u64,
    pub untrusted: bool,
    pub update_available: bool,
    pub version: String,
    pub was_bootstrap_ever_used: bool,
    pub white_peerlist_size: u64,
    /// 128-bit cumulative difficulty as a hex string.
    pub wide_cumulative_difficulty: String,
    /// 128-bit network difficulty as a hex string.
    pub wide_difficulty: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardForkInfoResponse {
    pub earliest_height: u64,
    pub enabled: bool,
    /// 0: likely a fork, 1: update needed, 2: everything looks good.
    pub state: u64,
    pub threshold: u64,
    pub version: u64,
    pub votes: u64,
    pub voting: u64,
    pub window: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ban {
    /// Host in A.B.C.D form.
    pub host: String,
    /// IP address in integer form.
    pub ip: u64,
    pub ban: bool,
    pub seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBansRequest {
    pub bans: Vec<Ban>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBansResponse {
    pub bans: Vec<Ban>,
}

/// Empty `txids` flushes the whole pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlushTxpoolRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub txids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOutputHistogramRequest {
    pub amounts: Vec<u64>,
    pub min_count: u64,
    pub max_count: u64,
    pub unlocked: bool,
    pub recent_cutoff: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Histogram {
    pub amount: u64,
    pub total_instances: u64,
    pub unlocked_instances: u64,
    pub recent_instances: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOutputHistogramResponse {
    pub histogram: Vec<Histogram>,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVersionResponse {
    pub untrusted: bool,
    pub version: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCoinbaseTxSumRequest {
    pub height: u64,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCoinbaseTxSumResponse {
    pub emission_amount: u64,
    pub fee_amount: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFeeEstimateRequest {
    #[serde(skip_serializing_if = "is_zero")]
    pub grace_blocks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFeeEstimateResponse {
    /// Estimated fee per byte.
    pub fee: u64,
    /// Final fee should be rounded up to a multiple of this.
    pub quantization_mask: u64,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chain {
    pub block_hash: String,
    pub difficulty: u64,
    pub height: u64,
    pub length: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAlternateChainsResponse {
    pub chains: Vec<Chain>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayTxRequest {
    pub txids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub info: Connection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Span {
    pub connection_id: String,
    pub nblocks: u64,
    pub rate: u64,
    pub remote_address: String,
    pub size: u64,
    pub speed: u64,
    pub start_block_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncInfoResponse {
    pub height: u64,
    pub peers: Vec<Peer>,
    /// Absent once the node is fully synced.
    pub spans: Vec<Span>,
    pub target_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxBacklogEntry {
    pub blob_size: u64,
    pub fee: u64,
    pub time_in_pool: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTxpoolBacklogResponse {
    pub backlog: Vec<TxBacklogEntry>,
    pub untrusted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOutputDistributionRequest {
    pub amounts: Vec<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub cumulative: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub from_height: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub to_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    pub amount: u64,
    pub base: u64,
    pub distribution: Vec<u64>,
    pub start_height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOutputDistributionResponse {
    pub distributions: Vec<Distribution>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_block_request_sends_hash_under_its_own_name() {
        let req = GetBlockRequest {
            height: 0,
            hash: "e22cf75f".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"height": 0, "hash": "e22cf75f"})
        );
        assert_eq!(
            serde_json::to_value(GetBlockRequest { height: 912345, ..Default::default() }).unwrap(),
            json!({"height": 912345})
        );
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        assert_eq!(
            serde_json::to_value(GenerateBlocksRequest::default()).unwrap(),
            json!({})
        );
        assert_eq!(
            serde_json::to_value(FlushTxpoolRequest::default()).unwrap(),
            json!({})
        );
        let dist = GetOutputDistributionRequest {
            amounts: vec![0],
            cumulative: true,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(dist).unwrap(),
            json!({"amounts": [0], "cumulative": true})
        );
    }

    #[test]
    fn test_generate_blocks_uses_wire_name_for_previous_block() {
        let req = GenerateBlocksRequest {
            previous_block: "abc".into(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(req).unwrap(), json!({"prev_block": "abc"}));
    }

    #[test]
    fn test_missing_response_fields_default() {
        let res: GetInfoResponse = serde_json::from_value(json!({"height": 10, "nettype": "testnet"})).unwrap();
        assert_eq!(res.height, 10);
        assert_eq!(res.nettype, "testnet");
        assert!(!res.synchronized);
        assert!(res.version.is_empty());
    }
}
