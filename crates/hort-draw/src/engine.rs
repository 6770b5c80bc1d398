//! The draw engine.
//!
//! Evaluates a treasure table by rolling its formula against each of its
//! entries and retrieving the successes. The engine only performs the roll
//! and identifies the results; the host's own draw step finalizes the draw
//! by marking entries drawn.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use hort_core::entry::TableEntry;
use hort_core::notify::Notifier;
use hort_core::table::{RollTable, TableKind};

use crate::config::DrawConfig;
use crate::error::{DrawError, DrawResult};
use crate::source::{Resolved, TableSource};
use crate::trial::Trial;

/// Warning shown when a table has nothing left to draw.
pub const NO_RESULTS_MESSAGE: &str =
    "There are no available results which can be drawn from this table.";

/// The outcome of one draw invocation: the top-level trial values in entry
/// order (needed by the caller for transparent display of the roll) and the
/// final flat ordered result entries after any recursive substitution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDraw {
    /// The raw per-entry trial values produced at the top level.
    pub rolls: Vec<Trial>,
    /// The drawn entries, with linked tables expanded when recursion is on.
    pub results: Vec<TableEntry>,
}

impl TableDraw {
    /// Whether the draw produced no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Draws results from roll tables.
///
/// The table source and notifier are injected so the engine can run against
/// any host backing; the RNG is seeded from the configuration so draws are
/// reproducible.
pub struct DrawEngine<'a> {
    source: &'a dyn TableSource,
    notifier: &'a dyn Notifier,
    config: DrawConfig,
    rng: StdRng,
}

impl<'a> DrawEngine<'a> {
    /// Create an engine over the given source and notifier.
    pub fn new(
        source: &'a dyn TableSource,
        notifier: &'a dyn Notifier,
        config: DrawConfig,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            source,
            notifier,
            config,
            rng,
        }
    }

    /// Draw from a table, dispatching on its subtype.
    ///
    /// `Base` tables keep the host's native behavior of a single roll against
    /// the cumulative weight span; `Treasure` tables roll one independent
    /// trial per entry.
    pub fn roll(&mut self, table: &RollTable, kind: TableKind) -> DrawResult<TableDraw> {
        match kind {
            TableKind::Base => self.roll_base(table),
            TableKind::Treasure => self.roll_treasure(table),
        }
    }

    /// Draw a single result the classic way: one roll against the cumulative
    /// weight span of the available entries.
    pub fn roll_base(&mut self, table: &RollTable) -> DrawResult<TableDraw> {
        let available = table.available();
        let total: u32 = available.iter().map(|e| e.weight).sum();
        if !table.has_formula() || total == 0 {
            self.notifier.warn(NO_RESULTS_MESSAGE);
            return Ok(TableDraw::default());
        }

        let roll = Trial {
            value: self.rng.random_range(1..=total),
        };
        let mut cumulative = 0;
        for entry in available {
            cumulative += entry.weight;
            if roll.value <= cumulative {
                return Ok(TableDraw {
                    rolls: vec![roll],
                    results: vec![entry.clone()],
                });
            }
        }
        // The roll is bounded by the total weight, so the walk above always
        // lands on an entry.
        Ok(TableDraw::default())
    }

    /// Evaluate a treasure table: one independent percentile trial per
    /// available entry, in sequence order, collecting every entry whose trial
    /// is at or under its weight.
    ///
    /// When recursion is enabled, each success that links to another table is
    /// replaced in place by that table's own treasure draw; exceeding the
    /// configured depth limit aborts the whole roll. The draw never marks
    /// entries drawn.
    pub fn roll_treasure(&mut self, table: &RollTable) -> DrawResult<TableDraw> {
        self.roll_treasure_at(table, 0)
    }

    fn roll_treasure_at(&mut self, table: &RollTable, depth: u32) -> DrawResult<TableDraw> {
        // Prevent excessive recursion through cyclic or deeply nested tables.
        if depth > self.config.depth_limit {
            return Err(DrawError::RecursionLimitExceeded {
                table: table.id,
                limit: self.config.depth_limit,
            });
        }

        let available = table.available();
        if !table.has_formula() || available.is_empty() {
            self.notifier.warn(NO_RESULTS_MESSAGE);
            return Ok(TableDraw::default());
        }

        let mut rolls = Vec::with_capacity(available.len());
        let mut successes: Vec<TableEntry> = Vec::new();
        for entry in available {
            let trial = Trial::roll(&mut self.rng);
            if trial.value <= entry.weight {
                successes.push(entry.clone());
            }
            rolls.push(trial);
        }

        if !self.config.recursive {
            return Ok(TableDraw {
                rolls,
                results: successes,
            });
        }

        // Replace each success that links to another table with that table's
        // own draw. Inner trial values are not reported; only the top-level
        // sequence is.
        let mut results = Vec::new();
        for entry in successes {
            match self.source.resolve_link(&entry.kind)? {
                Resolved::Passthrough => results.push(entry),
                Resolved::Missing => {
                    tracing::warn!(entry = %entry.id, "linked table no longer resolves, dropping entry");
                }
                Resolved::Table(inner) => {
                    let inner_draw = self.roll_treasure_at(&inner, depth + 1)?;
                    results.extend(inner_draw.results);
                }
            }
        }

        Ok(TableDraw { rolls, results })
    }

    /// Re-derive which entries a stored trial sequence draws.
    ///
    /// Treasure tables pair trials positionally with the available entries;
    /// excess trials are discarded without error. Base tables read the first
    /// trial against the cumulative weight span. Replaying the exact sequence
    /// a forward draw produced over the same entries reproduces its top-level
    /// result set.
    pub fn results_for_rolls(
        &self,
        table: &RollTable,
        kind: TableKind,
        rolls: &[Trial],
    ) -> Vec<TableEntry> {
        match kind {
            TableKind::Base => {
                let Some(roll) = rolls.first() else {
                    return Vec::new();
                };
                let mut cumulative = 0;
                for entry in table.available() {
                    cumulative += entry.weight;
                    if roll.value <= cumulative {
                        return vec![entry.clone()];
                    }
                }
                Vec::new()
            }
            TableKind::Treasure => table
                .available()
                .into_iter()
                .zip(rolls.iter())
                .filter(|(entry, roll)| entry.succeeds_on(roll.value))
                .map(|(entry, _)| entry.clone())
                .collect(),
        }
    }
}
