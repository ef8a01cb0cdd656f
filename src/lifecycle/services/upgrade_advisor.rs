use crate::lifecycle::domain::version::has_major_version_change;
use crate::lifecycle::domain::ReleaseCycle;
use chrono::NaiveDate;

/// Suggested upgrade target for a WARNING or CRITICAL dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub version: String,
    pub breaking: bool,
}

/// Picks upgrade targets from a product's release cycles
pub struct UpgradeAdvisor;

impl UpgradeAdvisor {
    /// Recommends an upgrade for a dependency at `current_version`
    ///
    /// The catalog lists cycles newest first, so the first cycle still
    /// supported on `today` is the target and its latest version is the
    /// recommendation. When every cycle has ended, the matched cycle's own
    /// latest version is recommended instead. Returns `None` when the chosen
    /// cycle has no latest version.
    pub fn recommend(
        cycles: &[ReleaseCycle],
        matched: &ReleaseCycle,
        current_version: &str,
        today: NaiveDate,
    ) -> Option<Recommendation> {
        let target = cycles
            .iter()
            .find(|cycle| cycle.is_active_on(today))
            .unwrap_or(matched);

        let version = target.latest_version.clone()?;
        let breaking = has_major_version_change(current_version, &version);
        Some(Recommendation { version, breaking })
    }
}
