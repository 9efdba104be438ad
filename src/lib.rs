//! TokenLabs: a multi-chain token creation wizard.
//!
//! A guided flow (`setup → payment → minting → success`) for configuring a
//! token, requesting an AI tokenomics critique and marketing copy, showing
//! a fee payment address, and presenting a simulated mint result. There is
//! no blockchain integration anywhere: no wallet connection, no signing,
//! no RPC, and no verification of the pasted payment hash. The mint is a
//! fixed-duration timer followed by placeholder output.
//!
//! The only real external interaction is the advisory client's two calls
//! to a generative-text API, each with a fixed local fallback.

pub mod admin;
pub mod advisory;
pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod qr;
pub mod settings;
pub mod wizard;

pub use error::Error;
