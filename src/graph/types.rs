//! Core type definitions for the network model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Unique identifier for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// Relation carried by an edge
///
/// - `LB`: luta - brincadeira
/// - `BH`: brincadeira - habilidade
/// - `LH`: luta - habilidade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Relation {
    LB,
    BH,
    LH,
}

impl Relation {
    /// All relations, in display order
    pub const ALL: [Relation; 3] = [Relation::LB, Relation::BH, Relation::LH];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::LB => "LB",
            Relation::BH => "BH",
            Relation::LH => "LH",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LB" => Ok(Relation::LB),
            "BH" => Ok(Relation::BH),
            "LH" => Ok(Relation::LH),
            other => Err(format!("unknown relation: {other}")),
        }
    }
}

/// Skill sub-type: technical or tactical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubTipo {
    Tecnica,
    Tatica,
}

impl SubTipo {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubTipo::Tecnica => "tecnica",
            SubTipo::Tatica => "tatica",
        }
    }
}

/// Skill sub-category: offensive or defensive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubCat {
    Ofensiva,
    Defensiva,
}

impl SubCat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubCat::Ofensiva => "ofensiva",
            SubCat::Defensiva => "defensiva",
        }
    }
}

/// Category of a node in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tipo", rename_all = "lowercase")]
pub enum NodeKind {
    Luta,
    Brincadeira,
    Habilidade {
        sub_tipo: SubTipo,
        /// Absent for groups without the ofensiva/defensiva split
        #[serde(skip_serializing_if = "Option::is_none")]
        sub_cat: Option<SubCat>,
    },
}

impl NodeKind {
    /// The `tipo` attribute as a string
    pub fn tipo(&self) -> &'static str {
        match self {
            NodeKind::Luta => "luta",
            NodeKind::Brincadeira => "brincadeira",
            NodeKind::Habilidade { .. } => "habilidade",
        }
    }

    pub fn is_habilidade(&self) -> bool {
        matches!(self, NodeKind::Habilidade { .. })
    }
}
