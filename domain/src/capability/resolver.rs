//! Capability-to-tool name resolution
//!
//! Servers namespace their tools unpredictably (`bb7_applications`,
//! `imaging__stats`, ...), so a capability is matched against the advertised
//! names in a fixed priority order:
//!
//! 1. **Exact**: the advertised name equals the capability name
//! 2. **Suffix**: the advertised name ends with the capability name; the
//!    shortest such name wins (fewest extra prefix characters)
//! 3. **Fuzzy**: the single most similar name above
//!    [`TOOL_NAME_CUTOFF`](crate::core::similarity::TOOL_NAME_CUTOFF),
//!    skipping names that already belong to another capability
//!
//! Resolution never fails: an unresolved capability is a normal outcome that
//! callers handle explicitly.

use super::entities::{Capability, CapabilityBinding};
use crate::core::similarity::{TOOL_NAME_CUTOFF, closest_match};
use tracing::info;

/// Resolve `desired` against the advertised tool names.
///
/// Deterministic for a fixed `(available, desired)` pair, independent of the
/// order names were advertised in.
pub fn resolve_tool_name<'a>(available: &'a [String], desired: &str) -> Option<&'a str> {
    if let Some(exact) = available.iter().find(|name| name.as_str() == desired) {
        return Some(exact.as_str());
    }

    let suffixed = available
        .iter()
        .map(String::as_str)
        .filter(|name| name.ends_with(desired))
        .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    if suffixed.is_some() {
        return suffixed;
    }

    let unclaimed = available
        .iter()
        .map(String::as_str)
        .filter(|name| !claimed_by_other_capability(name, desired));
    closest_match(desired, unclaimed, TOOL_NAME_CUTOFF)
}

/// Whether `name` is, or ends with, a name of a capability other than the
/// one `desired` refers to.
fn claimed_by_other_capability(name: &str, desired: &str) -> bool {
    Capability::ALL
        .iter()
        .filter(|capability| !capability.name_variants().contains(&desired))
        .flat_map(|capability| capability.name_variants())
        .any(|variant| name.ends_with(variant))
}

/// The immutable set of tool names advertised by one session.
///
/// Fetched once per request; every capability lookup in that request goes
/// through the same catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCatalog {
    names: Vec<String>,
}

impl ToolCatalog {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Advertised names, in advertisement order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a raw capability name without logging.
    pub fn resolve(&self, desired: &str) -> Option<&str> {
        resolve_tool_name(&self.names, desired)
    }

    /// Resolve a capability, trying each of its historical name variants.
    ///
    /// Logs at info level when nothing matches.
    pub fn find(&self, capability: Capability) -> Option<&str> {
        let found = capability
            .name_variants()
            .iter()
            .find_map(|variant| self.resolve(variant));

        if found.is_none() {
            info!(
                "Tool '{}' not found; continuing without it.",
                capability.base_name()
            );
        }
        found
    }

    /// Resolve a capability into an owned binding.
    pub fn bind(&self, capability: Capability) -> CapabilityBinding {
        CapabilityBinding::new(capability, self.find(capability).map(str::to_string))
    }
}

impl From<Vec<String>> for ToolCatalog {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match() {
        let available = names(&["applications", "stats", "packages"]);
        assert_eq!(
            resolve_tool_name(&available, "applications"),
            Some("applications")
        );
    }

    #[test]
    fn test_exact_match_wins_over_suffix() {
        let available = names(&["imaging_stats", "stats", "x_stats"]);
        assert_eq!(resolve_tool_name(&available, "stats"), Some("stats"));
    }

    #[test]
    fn test_suffix_match() {
        let available = names(&["bb7_applications", "zz_quality_insights"]);
        assert_eq!(
            resolve_tool_name(&available, "applications"),
            Some("bb7_applications")
        );
        assert_eq!(
            resolve_tool_name(&available, "quality_insights"),
            Some("zz_quality_insights")
        );
    }

    #[test]
    fn test_suffix_match_prefers_shortest() {
        let available = names(&["imaging_server_packages", "ns_packages", "a_long_ns_packages"]);
        assert_eq!(resolve_tool_name(&available, "packages"), Some("ns_packages"));
    }

    #[test]
    fn test_suffix_match_is_order_independent() {
        let forward = names(&["aa_stats", "bb_stats"]);
        let backward = names(&["bb_stats", "aa_stats"]);
        assert_eq!(resolve_tool_name(&forward, "stats"), Some("aa_stats"));
        assert_eq!(resolve_tool_name(&backward, "stats"), Some("aa_stats"));
    }

    #[test]
    fn test_fuzzy_match() {
        let available = names(&["applics", "statz"]);
        assert_eq!(resolve_tool_name(&available, "stats"), Some("statz"));
    }

    #[test]
    fn test_fuzzy_never_borrows_another_capability_tool() {
        let available = names(&["applications", "stats", "applications_transactions"]);
        assert_eq!(resolve_tool_name(&available, "applications_data_graphs"), None);

        let prefixed = names(&["bb7_applications_transactions", "bb7_object_details"]);
        assert_eq!(resolve_tool_name(&prefixed, "applications_data_graphs"), None);
        assert_eq!(
            resolve_tool_name(&prefixed, "applications_transactions"),
            Some("bb7_applications_transactions")
        );
    }

    #[test]
    fn test_fuzzy_accepts_other_variant_of_same_capability() {
        let available = names(&["datagraphs_involving_objects"]);
        assert_eq!(
            resolve_tool_name(&available, "data_graphs_involving_object"),
            Some("datagraphs_involving_objects")
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        let available = names(&["object_details", "packages"]);
        assert_eq!(resolve_tool_name(&available, "architectural_graph"), None);
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        assert_eq!(resolve_tool_name(&[], "stats"), None);
        assert!(ToolCatalog::default().find(Capability::Stats).is_none());
    }

    #[test]
    fn test_find_tries_name_variants() {
        let catalog = ToolCatalog::new(names(&["srv_datagraphs_involving_object"]));
        assert_eq!(
            catalog.find(Capability::DataGraphsInvolvingObject),
            Some("srv_datagraphs_involving_object")
        );
    }

    #[test]
    fn test_bind_owns_resolved_name() {
        let catalog = ToolCatalog::new(names(&["bb7_stats"]));
        let binding = catalog.bind(Capability::Stats);
        assert_eq!(binding.tool(), Some("bb7_stats"));
        assert!(!catalog.bind(Capability::Packages).is_available());
    }
}
