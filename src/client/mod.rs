//! Client root: endpoint selection and the entry point to both facades.
//!
//! # Data Flow
//! ```text
//! ClientConfig / explicit URL
//!     → MoneroRpc (owns Arc<Transport>)
//!     → daemon() / wallet() facades sharing that transport
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::daemon::Daemon;
use crate::rpc::{Credentials, RpcResult, Transport};
use crate::wallet::Wallet;

/// Default JSON-RPC endpoint of a local mainnet node.
pub const MAINNET_URI: &str = "http://127.0.0.1:18081/json_rpc";
/// Default JSON-RPC endpoint of a local testnet node.
pub const TESTNET_URI: &str = "http://127.0.0.1:28081/json_rpc";
/// Default JSON-RPC endpoint of a local stagenet node.
pub const STAGENET_URI: &str = "http://127.0.0.1:38081/json_rpc";

/// Monero network a node runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Stagenet,
}

impl Network {
    pub fn default_endpoint(self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_URI,
            Network::Testnet => TESTNET_URI,
            Network::Stagenet => STAGENET_URI,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Stagenet => "stagenet",
        })
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "stagenet" => Ok(Network::Stagenet),
            other => Err(format!("unknown network '{other}'")),
        }
    }
}

/// Client for one monerod or monero-wallet-rpc endpoint.
///
/// Cloning is cheap; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct MoneroRpc {
    transport: Arc<Transport>,
}

impl MoneroRpc {
    /// Create a client for `endpoint`. Without a `client`, a default
    /// `reqwest::Client` is used.
    pub fn new(endpoint: &str, client: Option<Client>) -> RpcResult<Self> {
        let transport = Transport::new(endpoint, client.unwrap_or_default())?;
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Create a client for a network's default local endpoint.
    pub fn for_network(network: Network, client: Option<Client>) -> RpcResult<Self> {
        Self::new(network.default_endpoint(), client)
    }

    /// Build the HTTP client and transport described by `config`.
    ///
    /// The config is assumed to be validated already.
    pub fn from_config(config: &ClientConfig) -> RpcResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .build()?;

        let rpc = Self::new(config.resolved_endpoint(), Some(client))?;
        Ok(match &config.auth {
            Some(auth) => rpc.with_auth(&auth.username, &auth.password),
            None => rpc,
        })
    }

    /// Use HTTP Digest authentication, replacing any earlier credentials.
    pub fn with_auth(self, username: &str, password: &str) -> Self {
        let mut transport = Transport::clone(&self.transport);
        transport.set_credentials(Some(Credentials::new(username, password)));
        Self {
            transport: Arc::new(transport),
        }
    }

    /// monerod methods.
    pub fn daemon(&self) -> Daemon {
        Daemon::new(Arc::clone(&self.transport))
    }

    /// monero-wallet-rpc methods.
    pub fn wallet(&self) -> Wallet {
        Wallet::new(Arc::clone(&self.transport))
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Call any method by name; see [`Transport::call`].
    pub async fn call<P, R>(&self, method: &str, params: Option<&P>) -> RpcResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        self.transport.call(method, params).await
    }

    /// Call any method by name, decoding into `slot`; see [`Transport::call_into`].
    pub async fn call_into<P, R>(
        &self,
        method: &str,
        params: Option<&P>,
        slot: Option<&mut R>,
    ) -> RpcResult<()>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.transport.call_into(method, params, slot).await
    }

    /// Call any method by name, discarding its result.
    pub async fn notify<P>(&self, method: &str, params: Option<&P>) -> RpcResult<()>
    where
        P: Serialize + ?Sized,
    {
        self.transport.notify(method, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, TimeoutConfig};
    use crate::rpc::{ErrorKind, RpcError};

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MoneroRpc>();
        assert_send_sync::<Daemon>();
        assert_send_sync::<Wallet>();
    }

    #[test]
    fn test_network_endpoints() {
        assert_eq!(Network::Mainnet.default_endpoint(), MAINNET_URI);
        assert_eq!(Network::Testnet.default_endpoint(), TESTNET_URI);
        assert_eq!(Network::Stagenet.default_endpoint(), STAGENET_URI);
        assert_eq!(Network::default(), Network::Mainnet);
    }

    #[test]
    fn test_network_parse() {
        assert_eq!("Stagenet".parse::<Network>().unwrap(), Network::Stagenet);
        assert_eq!(Network::Testnet.to_string(), "testnet");
        assert!("regtest".parse::<Network>().is_err());
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let err = MoneroRpc::new("::not a url::", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(matches!(err, RpcError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_with_auth_replaces_credentials() {
        let rpc = MoneroRpc::new(TESTNET_URI, None)
            .unwrap()
            .with_auth("first", "a")
            .with_auth("second", "b");
        assert_eq!(rpc.transport().credentials().unwrap().username(), "second");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            network: Network::Stagenet,
            auth: Some(AuthConfig {
                username: "monero".into(),
                password: "secret".into(),
            }),
            timeouts: TimeoutConfig {
                connect_secs: 1,
                request_secs: 2,
            },
            ..Default::default()
        };

        let rpc = MoneroRpc::from_config(&config).unwrap();
        assert_eq!(rpc.transport().endpoint().as_str(), STAGENET_URI);
        assert_eq!(rpc.transport().credentials().unwrap().username(), "monero");
    }
}
