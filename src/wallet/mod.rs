//! monero-wallet-rpc facade.
//!
//! # Data Flow
//! ```text
//! Wallet::get_balance(&GetBalanceRequest)
//!     → Transport::call("get_balance", Some(req))
//!     → GetBalanceResponse
//! ```
//!
//! # Design Decisions
//! - Methods the wallet answers with an empty object return `()`
//! - One facade covers every wallet file the RPC process can open; file
//!   management methods (`open_wallet`, `close_wallet`, ...) live here too

pub mod types;

use std::sync::Arc;

use crate::rpc::Transport;

pub use types::*;

/// Typed access to monero-wallet-rpc's JSON-RPC methods.
#[derive(Debug, Clone)]
pub struct Wallet {
    transport: Arc<Transport>,
}

impl Wallet {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    rpc_methods! {
        /// Point the wallet at a different daemon.
        fn set_daemon(req: SetDaemonRequest) = "set_daemon";
        /// Balance of one account, optionally broken down per subaddress.
        fn get_balance(req: GetBalanceRequest) -> GetBalanceResponse = "get_balance";
        /// Primary address and subaddresses of an account.
        fn get_address(req: GetAddressRequest) -> GetAddressResponse = "get_address";
        fn get_address_index(req: GetAddressIndexRequest) -> GetAddressIndexResponse = "get_address_index";
        /// Create a new subaddress in an account.
        fn create_address(req: CreateAddressRequest) -> CreateAddressResponse = "create_address";
        fn label_address(req: LabelAddressRequest) = "label_address";
        fn validate_address(req: ValidateAddressRequest) -> ValidateAddressResponse = "validate_address";
        /// All accounts, optionally filtered by tag.
        fn get_accounts(req: GetAccountsRequest) -> GetAccountsResponse = "get_accounts";
        fn create_account(req: CreateAccountRequest) -> CreateAccountResponse = "create_account";
        fn label_account(req: LabelAccountRequest) = "label_account";
        fn get_account_tags() -> GetAccountTagsResponse = "get_account_tags";
        fn tag_accounts(req: TagAccountsRequest) = "tag_accounts";
        fn untag_accounts(req: UntagAccountsRequest) = "untag_accounts";
        fn set_account_tag_description(req: SetAccountTagDescriptionRequest) = "set_account_tag_description";
        /// Height the wallet has scanned up to.
        fn get_height() -> GetHeightResponse = "get_height";
        /// Send to one or more destinations in a single transaction.
        fn transfer(req: TransferRequest) -> TransferResponse = "transfer";
        /// Like `transfer`, but split across several transactions when needed.
        fn transfer_split(req: TransferSplitRequest) -> TransferSplitResponse = "transfer_split";
        /// Sign a transaction set created by a view-only wallet.
        fn sign_transfer(req: SignTransferRequest) -> SignTransferResponse = "sign_transfer";
        fn submit_transfer(req: SubmitTransferRequest) -> SubmitTransferResponse = "submit_transfer";
        /// Send all unmixable outputs back to the wallet.
        fn sweep_dust(req: SweepDustRequest) -> SweepDustResponse = "sweep_dust";
        fn sweep_all(req: SweepAllRequest) -> SweepAllResponse = "sweep_all";
        /// Send the single output matching `key_image`.
        fn sweep_single(req: SweepSingleRequest) -> SweepSingleResponse = "sweep_single";
        fn relay_tx(req: RelayTxRequest) -> RelayTxResponse = "relay_tx";
        /// Save the wallet file.
        fn store() = "store";
        fn get_payments(req: GetPaymentsRequest) -> GetPaymentsResponse = "get_payments";
        /// Payments for several ids, from `min_block_height` onwards.
        fn get_bulk_payments(req: GetBulkPaymentsRequest) -> GetBulkPaymentsResponse = "get_bulk_payments";
        fn incoming_transfers(req: IncomingTransfersRequest) -> IncomingTransfersResponse = "incoming_transfers";
        /// Return the mnemonic or one of the private keys.
        fn query_key(req: QueryKeyRequest) -> QueryKeyResponse = "query_key";
        fn make_integrated_address(req: MakeIntegratedAddressRequest) -> MakeIntegratedAddressResponse = "make_integrated_address";
        fn split_integrated_address(req: SplitIntegratedAddressRequest) -> SplitIntegratedAddressResponse = "split_integrated_address";
        /// Save and shut down the wallet RPC process.
        fn stop_wallet() = "stop_wallet";
        fn rescan_blockchain() = "rescan_blockchain";
        fn set_tx_notes(req: SetTxNotesRequest) = "set_tx_notes";
        fn get_tx_notes(req: GetTxNotesRequest) -> GetTxNotesResponse = "get_tx_notes";
        fn set_attribute(req: SetAttributeRequest) = "set_attribute";
        fn get_attribute(req: GetAttributeRequest) -> GetAttributeResponse = "get_attribute";
        fn get_tx_key(req: GetTxKeyRequest) -> GetTxKeyResponse = "get_tx_key";
        /// Check a payment using the transaction's secret key.
        fn check_tx_key(req: CheckTxKeyRequest) -> CheckTxKeyResponse = "check_tx_key";
        fn get_tx_proof(req: GetTxProofRequest) -> GetTxProofResponse = "get_tx_proof";
        fn check_tx_proof(req: CheckTxProofRequest) -> CheckTxProofResponse = "check_tx_proof";
        fn get_spend_proof(req: GetSpendProofRequest) -> GetSpendProofResponse = "get_spend_proof";
        fn check_spend_proof(req: CheckSpendProofRequest) -> CheckSpendProofResponse = "check_spend_proof";
        /// Prove available funds without revealing the whole balance.
        fn get_reserve_proof(req: GetReserveProofRequest) -> GetReserveProofResponse = "get_reserve_proof";
        fn check_reserve_proof(req: CheckReserveProofRequest) -> CheckReserveProofResponse = "check_reserve_proof";
        fn get_transfers(req: GetTransfersRequest) -> GetTransfersResponse = "get_transfers";
        fn get_transfer_by_txid(req: GetTransferByTxidRequest) -> GetTransferByTxidResponse = "get_transfer_by_txid";
        fn describe_transfer(req: DescribeTransferRequest) -> DescribeTransferResponse = "describe_transfer";
        /// Sign a string with the wallet's spend key.
        fn sign(req: SignRequest) -> SignResponse = "sign";
        fn verify(req: VerifyRequest) -> VerifyResponse = "verify";
        fn export_outputs(req: ExportOutputsRequest) -> ExportOutputsResponse = "export_outputs";
        fn import_outputs(req: ImportOutputsRequest) -> ImportOutputsResponse = "import_outputs";
        fn export_key_images(req: ExportKeyImagesRequest) -> ExportKeyImagesResponse = "export_key_images";
        fn import_key_images(req: ImportKeyImagesRequest) -> ImportKeyImagesResponse = "import_key_images";
        /// Build a `monero:` payment URI.
        fn make_uri(req: MakeUriRequest) -> MakeUriResponse = "make_uri";
        fn parse_uri(req: ParseUriRequest) -> ParseUriResponse = "parse_uri";
        fn get_address_book(req: GetAddressBookRequest) -> GetAddressBookResponse = "get_address_book";
        fn add_address_book(req: AddAddressBookRequest) -> AddAddressBookResponse = "add_address_book";
        fn edit_address_book(req: EditAddressBookRequest) = "edit_address_book";
        fn delete_address_book(req: DeleteAddressBookRequest) = "delete_address_book";
        /// Scan the chain for new transactions now.
        fn refresh(req: RefreshRequest) -> RefreshResponse = "refresh";
        fn auto_refresh(req: AutoRefreshRequest) = "auto_refresh";
        fn rescan_spent() = "rescan_spent";
        /// Mine to the wallet's address; requires a trusted local daemon.
        fn start_mining(req: StartMiningRequest) = "start_mining";
        fn stop_mining() = "stop_mining";
        /// Seed languages the wallet can create wallets in.
        fn get_languages() -> GetLanguagesResponse = "get_languages";
        fn create_wallet(req: CreateWalletRequest) = "create_wallet";
        /// Restore a wallet from its address and private keys.
        fn generate_from_keys(req: GenerateFromKeysRequest) -> GenerateFromKeysResponse = "generate_from_keys";
        fn open_wallet(req: OpenWalletRequest) = "open_wallet";
        /// Restore a wallet from its mnemonic seed.
        fn restore_deterministic_wallet(req: RestoreDeterministicWalletRequest) -> RestoreDeterministicWalletResponse = "restore_deterministic_wallet";
        /// Save and close the current wallet file.
        fn close_wallet() = "close_wallet";
        fn change_wallet_password(req: ChangeWalletPasswordRequest) = "change_wallet_password";
        fn is_multisig() -> IsMultisigResponse = "is_multisig";
        /// First step of turning the wallet into a multisig wallet.
        fn prepare_multisig() -> PrepareMultisigResponse = "prepare_multisig";
        fn make_multisig(req: MakeMultisigRequest) -> MakeMultisigResponse = "make_multisig";
        fn export_multisig_info() -> ExportMultisigInfoResponse = "export_multisig_info";
        fn import_multisig_info(req: ImportMultisigInfoRequest) -> ImportMultisigInfoResponse = "import_multisig_info";
        /// Last step for N-1/N multisig wallets.
        fn finalize_multisig(req: FinalizeMultisigRequest) -> FinalizeMultisigResponse = "finalize_multisig";
        fn sign_multisig(req: SignMultisigRequest) -> SignMultisigResponse = "sign_multisig";
        fn submit_multisig(req: SubmitMultisigRequest) -> SubmitMultisigResponse = "submit_multisig";
        fn get_version() -> GetVersionResponse = "get_version";
    }
}
