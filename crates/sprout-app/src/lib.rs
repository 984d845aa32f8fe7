//! Sprout Client Application Layer
//!
//! Orchestration for the screen-driven client experience: the navigation
//! state machine, the shared data-fetch client, and the execution-context
//! client registry.

pub mod context;
pub mod fetch;
pub mod nav;

pub use context::{get_context, ClientRegistry, ExecutionContext};
pub use fetch::{FetchClient, FetchError};
pub use nav::{NavController, NavError, NavSignal, Screen, ScreenReader};
