//! Production implementations of the bridge trait seams.
//!
//! These are the "real" implementations of [`crate::traits`] that talk to
//! RPC nodes, Circle's Iris API, and the system clock. Applications use
//! these; tests implement fakes (see [`crate::testing`]).

mod alloy;
mod iris;
mod tokio_clock;

pub use self::alloy::AlloyChainClient;
pub use self::iris::{IrisAttestationProvider, IRIS_API, IRIS_API_SANDBOX};
pub use self::tokio_clock::TokioClock;
