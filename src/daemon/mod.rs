//! monerod chain-service facade.
//!
//! # Data Flow
//! ```text
//! Daemon::get_info()
//!     → Transport::call("get_info", None)
//!     → GetInfoResponse
//! ```
//!
//! Only methods on monerod's `/json_rpc` endpoint are covered; the
//! "other" RPC routes (`/get_height`, `/get_transactions`, ...) use a
//! different envelope.

pub mod types;

use std::sync::Arc;

use crate::rpc::Transport;

pub use types::*;

/// Typed access to monerod's JSON-RPC methods.
#[derive(Debug, Clone)]
pub struct Daemon {
    transport: Arc<Transport>,
}

impl Daemon {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    rpc_methods! {
        /// Mine blocks on a regtest/fakechain daemon.
        fn generate_blocks(req: GenerateBlocksRequest) -> GenerateBlocksResponse = "generateblocks";
        /// Number of blocks in the longest chain known to the node.
        fn get_block_count() -> GetBlockCountResponse = "get_block_count";
        /// Look up a block's hash by its height.
        fn on_get_block_hash(heights: [u64]) -> String = "on_get_block_hash";
        /// Get a block template on which to mine a new block.
        fn get_block_template(req: GetBlockTemplateRequest) -> GetBlockTemplateResponse = "get_block_template";
        /// Submit mined block blobs to the network.
        fn submit_block(blobs: [String]) -> SubmitBlockResponse = "submit_block";
        fn get_last_block_header() -> GetLastBlockHeaderResponse = "get_last_block_header";
        fn get_block_header_by_hash(req: GetBlockHeaderByHashRequest) -> GetBlockHeaderByHashResponse = "get_block_header_by_hash";
        fn get_block_header_by_height(req: GetBlockHeaderByHeightRequest) -> GetBlockHeaderByHeightResponse = "get_block_header_by_height";
        /// Headers for an inclusive range of heights.
        fn get_block_headers_range(req: GetBlockHeadersRangeRequest) -> GetBlockHeadersRangeResponse = "get_block_headers_range";
        /// Full block information by height or hash.
        fn get_block(req: GetBlockRequest) -> GetBlockResponse = "get_block";
        /// Incoming and outgoing peer connections.
        fn get_connections() -> GetConnectionsResponse = "get_connections";
        /// General node and network state.
        fn get_info() -> GetInfoResponse = "get_info";
        /// Hard fork voting and readiness.
        fn hard_fork_info() -> HardForkInfoResponse = "hard_fork_info";
        /// Ban or unban peers by IP.
        fn set_bans(req: SetBansRequest) = "set_bans";
        fn get_bans() -> GetBansResponse = "get_bans";
        /// Flush transactions from the pool; all of them when `txids` is empty.
        fn flush_txpool(req: FlushTxpoolRequest) = "flush_txpool";
        /// Histogram of output amounts on chain. RingCT outputs count as amount 0.
        fn get_output_histogram(req: GetOutputHistogramRequest) -> GetOutputHistogramResponse = "get_output_histogram";
        fn get_version() -> GetVersionResponse = "get_version";
        /// Coinbase and fee amounts for `count` blocks from `height`.
        fn get_coinbase_tx_sum(req: GetCoinbaseTxSumRequest) -> GetCoinbaseTxSumResponse = "get_coinbase_tx_sum";
        /// Fee estimate per byte.
        fn get_fee_estimate(req: GetFeeEstimateRequest) -> GetFeeEstimateResponse = "get_fee_estimate";
        /// Alternative chains seen by the node.
        fn get_alternate_chains() -> GetAlternateChainsResponse = "get_alternate_chains";
        /// Relay transactions by id.
        fn relay_tx(req: RelayTxRequest) = "relay_tx";
        /// Synchronisation state with peers.
        fn sync_info() -> SyncInfoResponse = "sync_info";
        fn get_txpool_backlog() -> GetTxpoolBacklogResponse = "get_txpool_backlog";
        fn get_output_distribution(req: GetOutputDistributionRequest) -> GetOutputDistributionResponse = "get_output_distribution";
    }
}
