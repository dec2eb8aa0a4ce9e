//! Feature flags that switch experimental interpreter behavior.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureFlag {
    /// Sources may go below zero without an overdraft clause.
    RelaxedOverdraft,
    /// Allocation leftovers go one unit per branch in order.
    AllocationRoundRobin,
}

impl FeatureFlag {
    pub const ALL: [FeatureFlag; 2] = [
        FeatureFlag::RelaxedOverdraft,
        FeatureFlag::AllocationRoundRobin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FeatureFlag::RelaxedOverdraft => "experimental-relaxed-overdraft",
            FeatureFlag::AllocationRoundRobin => "experimental-allocation-round-robin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FeatureFlag::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of enabled flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    enabled: BTreeSet<FeatureFlag>,
}

impl FeatureFlags {
    pub fn new() -> Self {
        FeatureFlags::default()
    }

    /// Enable every recognized name; unknown names are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = FeatureFlags::new();
        for name in names {
            let name = name.as_ref();
            match FeatureFlag::from_name(name) {
                Some(flag) => flags.enable(flag),
                None => debug!(name, "ignoring unknown feature flag"),
            }
        }
        flags
    }

    #[must_use]
    pub fn with(mut self, flag: FeatureFlag) -> Self {
        self.enable(flag);
        self
    }

    pub fn enable(&mut self, flag: FeatureFlag) {
        self.enabled.insert(flag);
    }

    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.enabled.contains(&flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = FeatureFlag> + '_ {
        self.enabled.iter().copied()
    }
}
