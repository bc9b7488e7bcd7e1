// crates/search/src/domain/value_objects/search_ticket.rs

use serde::Serialize;
use std::fmt;

/// Numéro de séquence d'une recherche. Seule la réponse portant le ticket
/// le plus récent est livrée, les précédentes sont considérées périmées.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SearchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
