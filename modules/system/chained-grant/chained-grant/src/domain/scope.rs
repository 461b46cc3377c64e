//! Scope reconciliation for chained requests.
//!
//! A chained request may only keep or narrow the presented token's scopes.
//! Everything here is pure so the down-scope rule can be checked without
//! any collaborator.

use chained_grant_sdk::{ScopeResolution, ScopeSet};

/// Output of a successful reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub scopes: ScopeSet,
    pub resolution: ScopeResolution,
}

/// The request asked for scopes the presented token does not grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeRejection {
    pub requested: ScopeSet,
    pub allowed: ScopeSet,
}

impl ScopeRejection {
    /// Requested scopes the presented token does not grant.
    #[must_use]
    pub fn excess(&self) -> ScopeSet {
        self.requested.difference(&self.allowed)
    }
}

/// Reconcile the requested scopes against the presented token's granted scopes.
///
/// `registered` is the owning client's registered scope set, or `None` when the
/// shadowed-scope correction is disabled. A non-empty request equal to it is
/// treated as empty.
///
/// # Errors
///
/// Returns [`ScopeRejection`] when the (corrected) request is not a subset of
/// `approved`.
pub fn reconcile(
    approved: &ScopeSet,
    requested: ScopeSet,
    registered: Option<&ScopeSet>,
) -> Result<Reconciled, ScopeRejection> {
    let shadowed = !requested.is_empty() && registered.is_some_and(|reg| *reg == requested);
    let requested = if shadowed { ScopeSet::new() } else { requested };

    if !requested.is_subset(approved) {
        return Err(ScopeRejection {
            requested,
            allowed: approved.clone(),
        });
    }

    if requested.is_empty() {
        let resolution = if shadowed {
            ScopeResolution::ShadowCorrected
        } else {
            ScopeResolution::Inherited
        };
        return Ok(Reconciled {
            scopes: approved.clone(),
            resolution,
        });
    }

    // Equal to `requested` while the subset check above holds; computed
    // explicitly so the output can never exceed `approved`.
    Ok(Reconciled {
        scopes: requested.intersection(approved),
        resolution: ScopeResolution::Narrowed,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn ab() -> ScopeSet {
        ScopeSet::from(["a", "b"])
    }

    #[test]
    fn empty_request_inherits_all() {
        let out = reconcile(&ab(), ScopeSet::new(), None).unwrap();
        assert_eq!(out.scopes, ab());
        assert_eq!(out.resolution, ScopeResolution::Inherited);
    }

    #[test]
    fn subset_request_narrows() {
        let out = reconcile(&ab(), ScopeSet::from(["a"]), None).unwrap();
        assert_eq!(out.scopes, ScopeSet::from(["a"]));
        assert_eq!(out.resolution, ScopeResolution::Narrowed);
    }

    #[test]
    fn equal_request_without_registration_match_is_narrowed() {
        let registered = ScopeSet::from(["a", "b", "c"]);
        let out = reconcile(&ab(), ab(), Some(&registered)).unwrap();
        assert_eq!(out.scopes, ab());
        assert_eq!(out.resolution, ScopeResolution::Narrowed);
    }

    #[test]
    fn superset_request_is_rejected_with_allowed_set() {
        let err = reconcile(&ab(), ScopeSet::from(["a", "c"]), None).unwrap_err();
        assert_eq!(err.allowed, ab());
        assert_eq!(err.excess(), ScopeSet::from(["c"]));
    }

    #[test]
    fn request_matching_registration_is_treated_as_empty() {
        let out = reconcile(&ab(), ab(), Some(&ab())).unwrap();
        assert_eq!(out.scopes, ab());
        assert_eq!(out.resolution, ScopeResolution::ShadowCorrected);
    }

    #[test]
    fn shadow_correction_can_turn_an_overbroad_request_into_inheritance() {
        // Client registered for more than this token grants; the pre-filled
        // request would otherwise be rejected.
        let registered = ScopeSet::from(["a", "b", "c"]);
        let out = reconcile(&ab(), registered.clone(), Some(&registered)).unwrap();
        assert_eq!(out.scopes, ab());
        assert_eq!(out.resolution, ScopeResolution::ShadowCorrected);
    }

    #[test]
    fn shadow_correction_disabled_rejects_overbroad_request() {
        let registered = ScopeSet::from(["a", "b", "c"]);
        assert!(reconcile(&ab(), registered, None).is_err());
    }

    #[test]
    fn empty_request_with_empty_registration_is_plain_inheritance() {
        let out = reconcile(&ab(), ScopeSet::new(), Some(&ScopeSet::new())).unwrap();
        assert_eq!(out.resolution, ScopeResolution::Inherited);
    }

    #[test]
    fn token_without_scopes_only_allows_empty_requests() {
        let out = reconcile(&ScopeSet::new(), ScopeSet::new(), None).unwrap();
        assert!(out.scopes.is_empty());
        assert!(reconcile(&ScopeSet::new(), ScopeSet::from(["a"]), None).is_err());
    }

    #[test]
    fn output_is_always_within_approved_over_small_universe() {
        let universe = ["a", "b", "c"];
        let subsets: Vec<ScopeSet> = (0u8..8)
            .map(|mask| {
                universe
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, s)| *s)
                    .collect()
            })
            .collect();

        for approved in &subsets {
            for requested in &subsets {
                for registered in subsets.iter().map(Some).chain(std::iter::once(None)) {
                    match reconcile(approved, requested.clone(), registered) {
                        Ok(out) => assert!(
                            out.scopes.is_subset(approved),
                            "escalation: approved={approved} requested={requested} out={}",
                            out.scopes
                        ),
                        Err(rej) => assert!(!rej.excess().is_empty()),
                    }
                }
            }
        }
    }
}
