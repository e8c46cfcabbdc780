//! Encoding selection.
//!
//! A contiguous set becomes one range table. A set with several runs becomes
//! either one range table per run, dispatched by a `match`, or a map keyed by
//! value. [`SelectionPolicy`] is the only place where that choice is made.

use indexmap::IndexMap;

use enumstr_core::Run;

/// Most runs a split encoding may have before a map is used instead.
///
/// Ten keeps small gapped sets (a handful of blocks) as range tables while
/// sets with primes-like spacing go to the map.
pub const DEFAULT_MAX_SPLIT_RUNS: usize = 10;

/// Tunable boundary between split range tables and a map table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub max_split_runs: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            max_split_runs: DEFAULT_MAX_SPLIT_RUNS,
        }
    }
}

impl SelectionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest run count that still uses split range tables.
    pub fn max_split_runs(mut self, value: usize) -> Self {
        self.max_split_runs = value;
        self
    }

    /// Whether a multi-run set with this cost should use split range tables.
    pub fn prefers_split(&self, cost: &EncodingCost) -> bool {
        cost.runs <= self.max_split_runs
    }
}

/// Size estimates for the two multi-run encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingCost {
    pub runs: usize,
    pub members: usize,
    /// `max - min + 1` over the whole set.
    pub span: u128,
}

impl EncodingCost {
    pub fn of(runs: &[Run<'_>]) -> Self {
        let members = runs.iter().map(Run::len).sum();
        let span = match (runs.first(), runs.last()) {
            (Some(first), Some(last)) => (last.max() - first.min()) as u128 + 1,
            _ => 0,
        };
        Self {
            runs: runs.len(),
            members,
            span,
        }
    }

    /// Split tables: a blob, an offset array and a match arm per run, plus
    /// one offset per member.
    pub fn split(&self) -> usize {
        self.runs + self.members
    }

    /// Map table: one key/name pair per member.
    pub fn map(&self) -> usize {
        self.members
    }

    /// Values inside the overall span that have no name.
    pub fn holes(&self) -> u128 {
        self.span.saturating_sub(self.members as u128)
    }
}

/// Which encoding a plan uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingKind {
    Single,
    Split,
    Map,
}

impl EncodingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EncodingKind::Single => "single",
            EncodingKind::Split => "split",
            EncodingKind::Map => "map",
        }
    }
}

/// The chosen value-to-name representation for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingPlan<'a> {
    /// All values form one run.
    Single(Run<'a>),
    /// Several runs, ascending by minimum value.
    Split(Vec<Run<'a>>),
    /// Value to name, ascending by value.
    MapTable(IndexMap<i128, &'a str>),
}

impl EncodingPlan<'_> {
    pub fn kind(&self) -> EncodingKind {
        match self {
            EncodingPlan::Single(_) => EncodingKind::Single,
            EncodingPlan::Split(_) => EncodingKind::Split,
            EncodingPlan::MapTable(_) => EncodingKind::Map,
        }
    }
}

/// Choose an encoding for the runs of one type.
///
/// `runs` must be the non-empty output of [`enumstr_core::partition`].
pub fn select<'a>(runs: Vec<Run<'a>>, policy: &SelectionPolicy) -> EncodingPlan<'a> {
    debug_assert!(!runs.is_empty(), "select: no runs");

    if let [run] = runs.as_slice() {
        return EncodingPlan::Single(*run);
    }

    let cost = EncodingCost::of(&runs);
    if policy.prefers_split(&cost) {
        return EncodingPlan::Split(runs);
    }

    let map = runs
        .iter()
        .flat_map(|run| run.members())
        .map(|entry| (entry.value, entry.name.as_str()))
        .collect();
    EncodingPlan::MapTable(map)
}
