use std::fmt;
use std::io::Write;

use tracing::*;

use crate::deleter::DeleteByName;
use crate::errors::*;

err_impl! {BulkDeleteError,
    #[error("'kn {0} delete' requires the {0} name(s)")]
    NoIdentifiers(String),

    #[error("could not resolve namespace: {0}")]
    NamespaceResolutionFailed(String),

    #[error("could not construct client: {0}")]
    ClientConstructionFailed(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeleteOutcome {
    Success,
    Failure(String),
}

/// The per-name results of one bulk delete, in the order the names were given.
#[derive(Clone, Debug)]
pub struct DeleteReport {
    kind: String,
    namespace: String,
    outcomes: Vec<(String, DeleteOutcome)>,
}

impl DeleteReport {
    pub fn outcomes(&self) -> &[(String, DeleteOutcome)] {
        &self.outcomes
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, DeleteOutcome::Failure(_)))
            .count()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.outcomes
            .iter()
            .map(|(name, outcome)| render_line(&self.kind, &self.namespace, name, outcome))
    }
}

impl fmt::Display for DeleteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub fn render_line(kind: &str, namespace: &str, name: &str, outcome: &DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Success => format!("{kind} '{name}' successfully deleted in namespace '{namespace}'."),
        // Scripts match on this exact text, so the period goes on even if the message already
        // ends in one.
        DeleteOutcome::Failure(msg) => format!("{msg}."),
    }
}

pub fn require_identifiers(names: &[String], kind: &str) -> EmptyResult {
    if names.is_empty() {
        return Err(BulkDeleteError::no_identifiers(&kind.to_lowercase()));
    }
    Ok(())
}

/// Delete every name in `names`, one at a time and in order, writing one status line per name to
/// `out` as soon as that name is done.  A failed delete is reported on its line and does not stop
/// the batch.  Failing to write a line (e.g. a closed pipe) is logged and also does not stop the
/// batch; every name still gets deleted and recorded in the report.  The only error returned from
/// here is an empty `names` list.
pub async fn execute<W: Write>(
    names: &[String],
    namespace: &str,
    deleter: &dyn DeleteByName,
    out: &mut W,
) -> anyhow::Result<DeleteReport> {
    let kind = deleter.kind();
    require_identifiers(names, &kind)?;

    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        let outcome = match deleter.delete(name).await {
            Ok(()) => DeleteOutcome::Success,
            Err(err) => {
                warn!("could not delete {kind} {name} in namespace {namespace}: {err}");
                DeleteOutcome::Failure(err.to_string())
            },
        };
        if let Err(err) = writeln!(out, "{}", render_line(&kind, namespace, name, &outcome)) {
            warn!("could not write result for {kind} {name}: {err}");
        }
        outcomes.push((name.clone(), outcome));
    }

    let report = DeleteReport { kind, namespace: namespace.into(), outcomes };
    info!("deleted {} of {} object(s)", names.len() - report.failure_count(), names.len());
    Ok(report)
}
