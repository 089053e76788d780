//! Protodeck Nav - navigation state and session flows
//!
//! Everything that changes as a reviewer moves through a prototype:
//! - [`AppState`] and the pure [`reduce`] transition function
//! - deep-link parsing and one-shot resolution
//! - static flow step tables for the walkthrough bar
//! - the session cart with stable-id quantities
//! - the seven-step project creation wizard
//!
//! # Example
//!
//! ```rust,ignore
//! use protodeck_nav::{parse_deep_link, resolve, AppState};
//!
//! let link = parse_deep_link("#/share/pmor-44/deliverable-1/flow-a", "")?;
//! let state = resolve(AppState::default(), &link, &store);
//! assert!(state.share_mode);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cart;
pub mod deeplink;
pub mod state;
pub mod steps;
pub mod wizard;

pub use cart::{CartItem, CartState};
pub use deeplink::{parse_deep_link, resolve, DeepLink};
pub use state::{reduce, AppState, Event, ReturnContext};
pub use steps::{current_step_index, flow_steps, FlowStep};
pub use wizard::{WizardState, WizardStep};
