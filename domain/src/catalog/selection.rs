//! Picking the application a question is about

use super::entities::Application;
use crate::core::similarity::{APPLICATION_NAME_CUTOFF, closest_match};
use crate::core::string::longest_token;
use serde::Serialize;
use tracing::warn;

/// How an application was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// The match key fuzzy-matched the application's name
    Matched,
    /// Nothing cleared the cutoff; the first application was taken
    FirstInCatalog,
}

/// Result of [`select_application`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationChoice<'a> {
    pub application: &'a Application,
    pub method: SelectionMethod,
}

/// The key to fuzzy-match application names against.
///
/// The hint when it is non-blank, otherwise the longest whitespace-delimited
/// token of the question.
pub fn match_key<'a>(question: &'a str, hint: Option<&'a str>) -> Option<&'a str> {
    hint.map(str::trim)
        .filter(|h| !h.is_empty())
        .or_else(|| longest_token(question))
}

/// Select the best-matching application, falling back to the first one.
///
/// Matching is case-insensitive. Returns `None` only for an empty catalog.
pub fn select_application<'a>(
    applications: &'a [Application],
    key: Option<&str>,
) -> Option<ApplicationChoice<'a>> {
    let first = applications.first()?;

    let matched = key.and_then(|key| {
        let key = key.to_lowercase();
        let lowered: Vec<String> = applications.iter().map(|a| a.name.to_lowercase()).collect();
        let best = closest_match(&key, lowered.iter().map(String::as_str), APPLICATION_NAME_CUTOFF)?;
        lowered
            .iter()
            .position(|name| name == best)
            .map(|index| &applications[index])
    });

    match matched {
        Some(application) => Some(ApplicationChoice {
            application,
            method: SelectionMethod::Matched,
        }),
        None => {
            warn!(
                "No application name matched {:?}; falling back to first application '{}'",
                key.unwrap_or_default(),
                first.name
            );
            Some(ApplicationChoice {
                application: first,
                method: SelectionMethod::FirstInCatalog,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Application> {
        vec![
            Application::new("app1", "Payments"),
            Application::new("app2", "Billing"),
            Application::new("app3", "Customer Portal"),
        ]
    }

    #[test]
    fn test_match_key_prefers_hint() {
        assert_eq!(match_key("summarize billing", Some(" Payments ")), Some("Payments"));
    }

    #[test]
    fn test_match_key_falls_back_to_longest_token() {
        assert_eq!(match_key("Summarize the Payments app", None), Some("Summarize"));
        assert_eq!(match_key("what about Payments", Some("   ")), Some("Payments"));
        assert_eq!(match_key("", None), None);
    }

    #[test]
    fn test_exact_hint_selects_application() {
        let apps = catalog();
        let choice = select_application(&apps, Some("Payments")).unwrap();
        assert_eq!(choice.application.id, "app1");
        assert_eq!(choice.method, SelectionMethod::Matched);
    }

    #[test]
    fn test_match_is_case_insensitive_and_fuzzy() {
        let apps = catalog();
        let choice = select_application(&apps, Some("billng")).unwrap();
        assert_eq!(choice.application.name, "Billing");

        let choice = select_application(&apps, Some("customer-portal")).unwrap();
        assert_eq!(choice.application.name, "Customer Portal");
    }

    #[test]
    fn test_no_match_falls_back_to_first() {
        let apps = catalog();
        let choice = select_application(&apps, Some("zzzzzzzzzzzz")).unwrap();
        assert_eq!(choice.application.name, "Payments");
        assert_eq!(choice.method, SelectionMethod::FirstInCatalog);

        let choice = select_application(&apps, None).unwrap();
        assert_eq!(choice.method, SelectionMethod::FirstInCatalog);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(select_application(&[], Some("Payments")).is_none());
    }
}
