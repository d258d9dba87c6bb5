//! Transaction proposals
//!
//! A [`Transaction`] is the unit a payment application hands to the
//! endorsement layer. It carries one or more [`EndorsedAction`]s, each
//! wrapping the serialized write-set of one simulation. Endorsements and
//! proposal bytes start empty; the endorsement layer fills them in.
//!
//! ## Format
//!
//! The wire form is MessagePack (`rmp-serde`).

use serde::{Deserialize, Serialize};

use crate::error::ProposalError;

/// Signature placed on an action by an endorsing peer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endorsement {
    /// Identity of the endorser
    pub endorser: Vec<u8>,
    /// Endorser's signature over the action
    pub signature: Vec<u8>,
}

/// One proposed state change and the endorsements collected for it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsedAction {
    /// Serialized write-set produced by a simulation
    pub action_bytes: Vec<u8>,
    /// Endorsements over `action_bytes`
    pub endorsements: Vec<Endorsement>,
    /// Proposal metadata, set by the endorsement layer
    pub proposal_bytes: Vec<u8>,
}

/// Unendorsed transaction proposal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Proposed actions, in order
    pub endorsed_actions: Vec<EndorsedAction>,
}

impl Transaction {
    /// Wrap simulation results as a single-action proposal.
    pub fn from_simulation_results(simulation_results: Vec<u8>) -> Self {
        Transaction {
            endorsed_actions: vec![EndorsedAction {
                action_bytes: simulation_results,
                endorsements: Vec::new(),
                proposal_bytes: Vec::new(),
            }],
        }
    }

    /// Write-set payloads of every action, in order.
    pub fn write_sets(&self) -> impl Iterator<Item = &[u8]> {
        self.endorsed_actions
            .iter()
            .map(|action| action.action_bytes.as_slice())
    }

    /// True when no action carries an endorsement yet.
    pub fn is_unendorsed(&self) -> bool {
        self.endorsed_actions
            .iter()
            .all(|action| action.endorsements.is_empty())
    }

    /// Serialize to MessagePack bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProposalError> {
        Ok(rmp_serde::to_vec(self)?)
    }

    /// Deserialize from MessagePack bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProposalError> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}
