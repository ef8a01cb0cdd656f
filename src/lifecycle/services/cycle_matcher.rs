use crate::lifecycle::domain::version::normalize_version;
use crate::lifecycle::domain::ReleaseCycle;

/// Which pass of the matcher selected the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The cycle name is a string prefix of the normalized version
    CyclePrefix,
    /// Only the leading version component agrees with the cycle's
    MajorVersion,
}

/// A release cycle selected for a declared version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleMatch<'a> {
    pub cycle: &'a ReleaseCycle,
    pub kind: MatchKind,
}

/// Matches declared versions to a product's release cycles
pub struct CycleMatcher;

impl CycleMatcher {
    /// Selects the release cycle for `version`
    ///
    /// Cycles are scanned in catalog order. The first cycle whose name is a
    /// string prefix of the normalized version wins; only if none is found,
    /// the first cycle sharing the leading version component wins.
    pub fn find<'a>(cycles: &'a [ReleaseCycle], version: &str) -> Option<CycleMatch<'a>> {
        let normalized = normalize_version(version);
        if normalized.is_empty() {
            return None;
        }

        if let Some(cycle) = cycles
            .iter()
            .find(|c| !c.cycle.is_empty() && normalized.starts_with(c.cycle.as_str()))
        {
            return Some(CycleMatch {
                cycle,
                kind: MatchKind::CyclePrefix,
            });
        }

        let major = leading_component(&normalized);
        cycles
            .iter()
            .find(|c| leading_component(&c.cycle) == major)
            .map(|cycle| CycleMatch {
                cycle,
                kind: MatchKind::MajorVersion,
            })
    }
}

fn leading_component(version: &str) -> &str {
    version.split('.').next().unwrap_or_default()
}
