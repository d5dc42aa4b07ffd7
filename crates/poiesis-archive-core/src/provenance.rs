//! Provenance tracking for archived works
//!
//! This module defines the append-only provenance chain that records the
//! lifecycle of a single work: creation, modification, exhibition,
//! transfer, and any other event the caller wants to attribute.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::types::{MetadataValue, WorkId};

/// A single event in a work's provenance chain
///
/// Events are created through [`ProvenanceChain::record_event`] and are
/// immutable once appended. The event type is an open taxonomy: any
/// category string the caller chooses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEvent {
    /// Category of event (e.g., "created", "modified", "exhibited", "transferred")
    pub event_type: String,

    /// When the event occurred
    pub timestamp: DateTime<Utc>,

    /// The person or system that performed the action
    pub actor: String,

    /// Human-readable description of what occurred
    pub description: String,

    /// Additional key-value pairs attached to the event
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, MetadataValue>,
}

impl ProvenanceEvent {
    /// Serialize this event to a flat record for storage or export
    pub fn to_record(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Into::into)
    }

    /// Get a metadata value by key
    pub fn get_metadata(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }
}

impl fmt::Display for ProvenanceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProvenanceEvent({} at {}, actor={})",
            self.event_type,
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.actor
        )
    }
}

// Serializable snapshot shape for export_full_history.
#[derive(Serialize)]
struct ChainHistory<'a> {
    work_id: &'a WorkId,
    origin_date: &'a DateTime<Utc>,
    original_creator: &'a str,
    event_count: usize,
    events: &'a [ProvenanceEvent],
}

/// Complete provenance record for a single creative work
///
/// The event sequence is append-only: events are added over time and never
/// mutated or removed individually. The chain checks chronological order
/// diagnostically via [`verify_chain_integrity`](Self::verify_chain_integrity)
/// but does not reject out-of-order appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceChain {
    /// The work this chain belongs to
    pub work_id: WorkId,

    /// When the work originally came into existence
    pub origin_date: DateTime<Utc>,

    /// Who originally created the work
    pub original_creator: String,

    /// Ordered event history (append-only)
    #[serde(default)]
    events: Vec<ProvenanceEvent>,
}

impl ProvenanceChain {
    /// Create a new chain with origin information and no events
    pub fn new(
        work_id: impl Into<WorkId>,
        origin_date: DateTime<Utc>,
        original_creator: impl Into<String>,
    ) -> Self {
        Self {
            work_id: work_id.into(),
            origin_date,
            original_creator: original_creator.into(),
            events: Vec::new(),
        }
    }

    /// Record a new provenance event stamped with the current time
    ///
    /// Returns a reference to the stored event. Always succeeds: event
    /// types are an open taxonomy and are not validated.
    pub fn record_event(
        &mut self,
        event_type: impl Into<String>,
        actor: impl Into<String>,
        description: impl Into<String>,
    ) -> &ProvenanceEvent {
        self.record_event_at(event_type, Utc::now(), actor, description, HashMap::new())
    }

    /// Record a new event with attached key-value metadata
    pub fn record_event_with(
        &mut self,
        event_type: impl Into<String>,
        actor: impl Into<String>,
        description: impl Into<String>,
        metadata: HashMap<String, MetadataValue>,
    ) -> &ProvenanceEvent {
        self.record_event_at(event_type, Utc::now(), actor, description, metadata)
    }

    /// Record an event with an explicit timestamp
    ///
    /// Intended for backfilling histories imported from outside the
    /// archive. This is the only append path that can produce an
    /// out-of-order chain.
    pub fn record_event_at(
        &mut self,
        event_type: impl Into<String>,
        timestamp: DateTime<Utc>,
        actor: impl Into<String>,
        description: impl Into<String>,
        metadata: HashMap<String, MetadataValue>,
    ) -> &ProvenanceEvent {
        let event = ProvenanceEvent {
            event_type: event_type.into(),
            timestamp,
            actor: actor.into(),
            description: description.into(),
            metadata,
        };
        self.events.push(event);
        self.events.last().expect("event was just appended")
    }

    /// All recorded events, in append order
    pub fn events(&self) -> &[ProvenanceEvent] {
        &self.events
    }

    /// Number of recorded events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Filter events by their type, preserving append order
    pub fn get_events_by_type(&self, event_type: &str) -> Vec<&ProvenanceEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Verify that all events are in chronological order
    ///
    /// Returns true iff every adjacent pair of events is non-decreasing by
    /// timestamp. Chains of length zero or one are trivially valid. This is
    /// a read-only diagnostic; violations are detected, not repaired.
    pub fn verify_chain_integrity(&self) -> bool {
        self.events
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }

    /// Export the complete provenance chain as a serializable snapshot
    ///
    /// The snapshot contains the identity fields, the event count at export
    /// time, and every event's serialized record.
    pub fn export_full_history(&self) -> Result<serde_json::Value> {
        let history = ChainHistory {
            work_id: &self.work_id,
            origin_date: &self.origin_date,
            original_creator: &self.original_creator,
            event_count: self.events.len(),
            events: &self.events,
        };
        serde_json::to_value(history).map_err(Into::into)
    }
}

impl fmt::Display for ProvenanceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProvenanceChain({}, creator={}, events={})",
            self.work_id,
            self.original_creator,
            self.events.len()
        )
    }
}
