//! Capability entities

use serde::{Deserialize, Serialize};

/// An abstract analysis capability that an Imaging server may advertise
/// under an unpredictable, often prefixed, tool name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Enumerate managed applications (mandatory)
    Applications,
    Stats,
    ArchitecturalGraph,
    QualityInsights,
    Packages,
    ApplicationTransactions,
    ApplicationDataGraphs,
    /// Resolve a target-of-change object (mandatory for impact analysis)
    ObjectDetails,
    TransactionsUsingObject,
    DataGraphsInvolvingObject,
    InterApplicationsDependencies,
}

impl Capability {
    /// Every capability, in the order workflows use them.
    pub const ALL: [Capability; 11] = [
        Capability::Applications,
        Capability::Stats,
        Capability::ArchitecturalGraph,
        Capability::QualityInsights,
        Capability::Packages,
        Capability::ApplicationTransactions,
        Capability::ApplicationDataGraphs,
        Capability::ObjectDetails,
        Capability::TransactionsUsingObject,
        Capability::DataGraphsInvolvingObject,
        Capability::InterApplicationsDependencies,
    ];

    /// Canonical capability name, used as the match target during resolution.
    pub fn base_name(&self) -> &'static str {
        self.name_variants()[0]
    }

    /// All historical names this capability has been advertised under,
    /// in the order they should be tried.
    pub fn name_variants(&self) -> &'static [&'static str] {
        match self {
            Capability::Applications => &["applications"],
            Capability::Stats => &["stats"],
            Capability::ArchitecturalGraph => &["architectural_graph"],
            Capability::QualityInsights => &["quality_insights"],
            Capability::Packages => &["packages"],
            Capability::ApplicationTransactions => &["applications_transactions"],
            Capability::ApplicationDataGraphs => &["applications_data_graphs"],
            Capability::ObjectDetails => &["object_details"],
            Capability::TransactionsUsingObject => &["transactions_using_object"],
            Capability::DataGraphsInvolvingObject => {
                &["data_graphs_involving_object", "datagraphs_involving_object"]
            }
            Capability::InterApplicationsDependencies => &["inter_applications_dependencies"],
        }
    }

    /// Whether a workflow cannot proceed without this capability.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Capability::Applications | Capability::ObjectDetails)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_name())
    }
}

/// Association between a capability and the tool a session advertises for it.
///
/// Recomputed per request since different sessions may prefix tool names
/// differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityBinding {
    pub capability: Capability,
    pub tool: Option<String>,
}

impl CapabilityBinding {
    pub fn new(capability: Capability, tool: Option<String>) -> Self {
        Self { capability, tool }
    }

    /// Resolved tool name, if the capability is available.
    pub fn tool(&self) -> Option<&str> {
        self.tool.as_deref()
    }

    pub fn is_available(&self) -> bool {
        self.tool.is_some()
    }
}
