//! Decklist import.
//!
//! Import is a sequential pipeline: the text is parsed into a queue of
//! pending lines, and each line is resolved through the catalog and added
//! before the next one starts. There is never more than one lookup in
//! flight, so lines land in file order.
//!
//! A line that fails (bad count, unknown card, catalog down) is recorded in
//! the `ImportReport` and, under the default policy, skipped. Extra copies
//! of a non-basic card are rejected by the normal one-copy rule; the count
//! does not override it.
//!
//! Imports can be stopped with a `CancellationToken`. Cancellation is seen
//! between lines and also aborts a lookup that is still waiting; cards
//! already added stay in the deck.

use std::collections::VecDeque;
use std::pin::pin;

use futures::future::{self, Either};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::engine::DeckEngine;
use super::text::{parse_decklist, DecklistLine};
use crate::catalog::CardLookup;
use crate::core::{ImportFailure, ImportPolicy};
use crate::storage::SnapshotStore;

/// Result of importing one decklist line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The card resolved; `added` copies went in, `rejected` were duplicates.
    /// A line cut short by cancellation has `added + rejected < count`.
    Added {
        line: usize,
        name: String,
        added: u32,
        rejected: u32,
    },
    /// The line could not be imported.
    Failed {
        line: usize,
        name: String,
        reason: ImportFailure,
    },
}

impl LineOutcome {
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            LineOutcome::Added { line, .. } | LineOutcome::Failed { line, .. } => *line,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            LineOutcome::Added { name, .. } | LineOutcome::Failed { name, .. } => name,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, LineOutcome::Failed { .. })
    }
}

/// How far one line got.
enum LineStep {
    Done(LineOutcome),
    /// Cancelled; `Some` when copies were being added at the time.
    Interrupted(Option<LineOutcome>),
}

/// Summary of an import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Per-line outcomes, in file order.
    pub outcomes: Vec<LineOutcome>,
    /// Stopped by the cancellation token.
    pub cancelled: bool,
    /// Stopped by `ImportPolicy::StopOnFailure`.
    pub stopped_on_failure: bool,
    /// The commander filter changed during the import.
    pub filter_changed: bool,
}

impl ImportReport {
    /// Copies added across all lines.
    #[must_use]
    pub fn added_copies(&self) -> u32 {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                LineOutcome::Added { added, .. } => *added,
                LineOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    /// Failed lines.
    pub fn failures(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_failure())
    }

    /// Every line imported and the run was not cut short.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cancelled && !self.stopped_on_failure && self.failures().next().is_none()
    }
}

impl<S: SnapshotStore> DeckEngine<S> {
    /// Import a decklist, resolving names through `lookup`.
    ///
    /// Each resolved card is added `count` times through `add_card`, so the
    /// usual rules apply and each successful add is persisted.
    pub async fn import_text<L>(
        &mut self,
        text: &str,
        lookup: &L,
        cancel: &CancellationToken,
    ) -> ImportReport
    where
        L: CardLookup + ?Sized,
    {
        let mut pending: VecDeque<DecklistLine> = parse_decklist(text).into();
        let mut report = ImportReport::default();
        let filter_before = self.filter().view();
        debug!(lines = pending.len(), "import started");

        while let Some(entry) = pending.pop_front() {
            if cancel.is_cancelled() {
                pending.push_front(entry);
                report.cancelled = true;
                break;
            }

            let outcome = match self.import_line(entry, lookup, cancel).await {
                LineStep::Done(outcome) => outcome,
                LineStep::Interrupted(partial) => {
                    report.outcomes.extend(partial);
                    report.cancelled = true;
                    break;
                }
            };

            let failed = outcome.is_failure();
            report.outcomes.push(outcome);

            if failed && self.config().import_policy == ImportPolicy::StopOnFailure {
                report.stopped_on_failure = true;
                break;
            }
        }

        report.filter_changed = self.filter().view() != filter_before;
        if report.cancelled {
            info!(remaining = pending.len(), "import cancelled");
        }
        info!(
            lines = report.outcomes.len(),
            copies = report.added_copies(),
            failures = report.failures().count(),
            "import finished"
        );
        report
    }

    /// Resolve and add one line.
    async fn import_line<L>(
        &mut self,
        entry: DecklistLine,
        lookup: &L,
        cancel: &CancellationToken,
    ) -> LineStep
    where
        L: CardLookup + ?Sized,
    {
        let DecklistLine { line, count, name } = entry;

        let count = match count {
            Ok(count) => count,
            Err(token) => {
                let reason = ImportFailure::InvalidCount { token };
                warn!(line, card = %name, error = %reason, "skipping decklist line");
                return LineStep::Done(LineOutcome::Failed { line, name, reason });
            }
        };

        let resolved = {
            let cancelled = pin!(cancel.cancelled());
            let lookup = pin!(lookup.lookup_named(&name));
            match future::select(cancelled, lookup).await {
                Either::Left(_) => return LineStep::Interrupted(None),
                Either::Right((result, _)) => result,
            }
        };

        let card = match resolved {
            Ok(card) => card,
            Err(e) => {
                let reason = ImportFailure::from(e);
                warn!(line, card = %name, error = %reason, "skipping decklist line");
                return LineStep::Done(LineOutcome::Failed { line, name, reason });
            }
        };

        let mut added = 0;
        let mut rejected = 0;
        let mut interrupted = false;
        while added < count {
            // The first copy of a resolved card always goes in.
            if added > 0 && cancel.is_cancelled() {
                interrupted = true;
                break;
            }
            if self.add_card(card.clone()).is_err() {
                // A rejected copy stays rejected; the rest of the count is too.
                rejected = count - added;
                break;
            }
            added += 1;
        }
        if rejected > 0 {
            debug!(line, card = %name, rejected, "extra copies rejected");
        }

        let outcome = LineOutcome::Added {
            line,
            name,
            added,
            rejected,
        };
        if interrupted {
            LineStep::Interrupted(Some(outcome))
        } else {
            LineStep::Done(outcome)
        }
    }
}
