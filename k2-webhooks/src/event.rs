//! Provider event identifiers

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Webhook event identifiers, as carried in a payload's `topic` field.
///
/// The set is provider-extensible: unrecognised identifiers are kept
/// verbatim in [`EventType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    // Transaction events
    BuygoodsTransactionReceived,
    BuygoodsTransactionReversed,
    B2bTransactionReceived,
    M2mTransactionReceived,

    // Settlement events
    SettlementTransferCompleted,

    // Customer events
    CustomerCreated,

    // Unknown event
    Other(String),
}

impl EventType {
    /// Every known event type, in declaration order
    pub const KNOWN: [EventType; 6] = [
        Self::BuygoodsTransactionReceived,
        Self::BuygoodsTransactionReversed,
        Self::B2bTransactionReceived,
        Self::M2mTransactionReceived,
        Self::SettlementTransferCompleted,
        Self::CustomerCreated,
    ];

    /// Parse from the provider identifier
    pub fn parse(s: &str) -> Self {
        match s {
            "buygoods_transaction_received" => Self::BuygoodsTransactionReceived,
            "buygoods_transaction_reversed" => Self::BuygoodsTransactionReversed,
            "b2b_transaction_received" => Self::B2bTransactionReceived,
            "m2m_transaction_received" => Self::M2mTransactionReceived,
            "settlement_transfer_completed" => Self::SettlementTransferCompleted,
            "customer_created" => Self::CustomerCreated,
            other => Self::Other(other.to_string()),
        }
    }

    /// The provider identifier
    pub fn as_str(&self) -> &str {
        match self {
            Self::BuygoodsTransactionReceived => "buygoods_transaction_received",
            Self::BuygoodsTransactionReversed => "buygoods_transaction_reversed",
            Self::B2bTransactionReceived => "b2b_transaction_received",
            Self::M2mTransactionReceived => "m2m_transaction_received",
            Self::SettlementTransferCompleted => "settlement_transfer_completed",
            Self::CustomerCreated => "customer_created",
            Self::Other(name) => name,
        }
    }

    /// Is a known provider event
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
