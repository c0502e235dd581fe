//! Domain models for the intent graph and decision protocol.

mod decision;
mod node;

pub use decision::{AgentAction, AgentDecision, Confidence, DecideRequest, DecideResponse};
pub use node::{GraphResponse, IntentNode};
