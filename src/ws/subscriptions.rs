//! Subscription types, tracking, and matching.

use crate::shared::PairId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parameters for subscribing to a WS channel.
///
/// Wire format uses `#[serde(tag = "type")]` — both subscribe and unsubscribe
/// carry the same params shape, discriminated by the outer envelope.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum SubscribeParams {
    #[serde(rename = "trades")]
    Trades { pairs: Vec<PairId> },
}

/// Parameters for unsubscribing from a WS channel.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum UnsubscribeParams {
    #[serde(rename = "trades")]
    Trades { pairs: Vec<PairId> },
}

/// Trait for subscription types that can be tracked and matched.
pub trait Subscription {
    fn to_subscribe_params(&self) -> SubscribeParams;
    fn to_unsubscribe_params(&self) -> UnsubscribeParams;
    fn matches_unsubscribe(&self, unsub: &UnsubscribeParams) -> bool;
    fn subscription_key(&self) -> String;
}

impl Subscription for SubscribeParams {
    fn to_subscribe_params(&self) -> SubscribeParams {
        self.clone()
    }

    fn to_unsubscribe_params(&self) -> UnsubscribeParams {
        match self {
            SubscribeParams::Trades { pairs } => UnsubscribeParams::Trades {
                pairs: pairs.clone(),
            },
        }
    }

    fn matches_unsubscribe(&self, unsub: &UnsubscribeParams) -> bool {
        match (self, unsub) {
            (
                SubscribeParams::Trades { pairs: sub_pairs },
                UnsubscribeParams::Trades { pairs: unsub_pairs },
            ) => {
                let sub_set: HashSet<_> = sub_pairs.iter().collect();
                let unsub_set: HashSet<_> = unsub_pairs.iter().collect();
                sub_set == unsub_set
            }
        }
    }

    fn subscription_key(&self) -> String {
        match self {
            SubscribeParams::Trades { pairs } => format!("trades:{}", pairs_key(pairs)),
        }
    }
}

fn pairs_key(pairs: &[PairId]) -> String {
    let mut sorted: Vec<_> = pairs.iter().map(|p| p.to_string()).collect();
    sorted.sort();
    sorted.join(",")
}
