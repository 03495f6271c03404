//! ParSwap Rust SDK
//!
//! Off-chain client for the ParSwap fixed-rate exchange pool on Solana.
//! Any Rust caller can swap, preview, and query pool state with zero
//! boilerplate — no Anchor dependency required.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use par_swap_sdk::{ParSwapClient, SwapDirection, SwapParams};
//! use solana_sdk::signature::Keypair;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ParSwapClient::devnet();
//!     let user = Keypair::new(); // use your funded keypair
//!
//!     // 1. Preview first — same checks the program runs
//!     let preview = client.preview(SwapParams {
//!         direction: SwapDirection::AToB,
//!         amount:    100_000_000,
//!     }).await?;
//!     println!("Would receive exactly {}", preview.amount_out);
//!
//!     // 2. Execute
//!     let result = client.swap(&user, SwapParams {
//!         direction: SwapDirection::AToB,
//!         amount:    100_000_000,
//!     }).await?;
//!     println!("Swapped! tx: {}", result.signature);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature Overview
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`ParSwapClient::initialize_pool`] | Create the singleton pool for a mint pair |
//! | [`ParSwapClient::swap`] | Atomic 1:1 swap in either direction |
//! | [`ParSwapClient::preview`] | Off-chain quote mirroring the on-chain checks |
//! | [`ParSwapClient::pool_info`] | Pool accounts and live reserve balances |

pub mod client;
pub mod error;
pub mod instructions;
pub mod quote;
pub mod state;
pub mod types;

pub use client::ParSwapClient;
pub use error::{Error, Result};
pub use types::*;
