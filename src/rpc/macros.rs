//! Declarative facade generation.
//!
//! Every daemon and wallet operation is a fixed pairing of wire name, request
//! shape and response shape. [`rpc_methods!`] turns a table of such pairings
//! into async methods on a facade holding a `transport: Arc<Transport>`
//! field, plus a `METHODS` catalogue describing the table.
//!
//! ```ignore
//! impl Daemon {
//!     rpc_methods! {
//!         /// Look up how many blocks are in the longest chain.
//!         fn get_block_count() -> GetBlockCountResponse = "get_block_count";
//!         fn set_bans(req: SetBansRequest) = "set_bans";
//!     }
//! }
//! ```

/// One row of a facade's method table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSpec {
    /// Rust method name on the facade.
    pub name: &'static str,
    /// Procedure name sent on the wire.
    pub rpc: &'static str,
    /// Whether the call carries params.
    pub has_params: bool,
    /// Whether the call decodes a result body.
    pub has_result: bool,
}

macro_rules! rpc_methods {
    (
        $(
            $(#[$doc:meta])*
            fn $name:ident ( $($arg:ident : $req:ty)? ) $(-> $res:ty)? = $rpc:literal ;
        )*
    ) => {
        /// Method table for this facade, in declaration order.
        pub const METHODS: &'static [$crate::rpc::MethodSpec] = &[
            $(
                $crate::rpc::MethodSpec {
                    name: stringify!($name),
                    rpc: $rpc,
                    has_params: rpc_methods!(@present $($arg)?),
                    has_result: rpc_methods!(@present $($res)?),
                },
            )*
        ];

        $(
            rpc_methods!(@method [$(#[$doc])*] $name [$($arg : $req)?] [$($res)?] $rpc);
        )*
    };

    (@present) => { false };
    (@present $($t:tt)+) => { true };

    (@method [$(#[$doc:meta])*] $name:ident [] [] $rpc:literal) => {
        $(#[$doc])*
        pub async fn $name(&self) -> $crate::rpc::RpcResult<()> {
            self.transport.notify::<()>($rpc, None).await
        }
    };
    (@method [$(#[$doc:meta])*] $name:ident [$arg:ident : $req:ty] [] $rpc:literal) => {
        $(#[$doc])*
        pub async fn $name(&self, $arg: &$req) -> $crate::rpc::RpcResult<()> {
            self.transport.notify::<$req>($rpc, Some($arg)).await
        }
    };
    (@method [$(#[$doc:meta])*] $name:ident [] [$res:ty] $rpc:literal) => {
        $(#[$doc])*
        pub async fn $name(&self) -> $crate::rpc::RpcResult<$res> {
            self.transport.call::<(), $res>($rpc, None).await
        }
    };
    (@method [$(#[$doc:meta])*] $name:ident [$arg:ident : $req:ty] [$res:ty] $rpc:literal) => {
        $(#[$doc])*
        pub async fn $name(&self, $arg: &$req) -> $crate::rpc::RpcResult<$res> {
            self.transport.call::<$req, $res>($rpc, Some($arg)).await
        }
    };
}
