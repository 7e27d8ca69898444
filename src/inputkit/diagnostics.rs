//! # Diagnostics
//!
//! Resolving a filter, modifier or validation spec never fails. Entries that
//! cannot be resolved (an unknown preset name, a pattern handed to the modifier
//! resolver) are dropped and reported as a [`Diagnostic`] instead.
//!
//! Diagnostics travel two ways:
//! - **Returned**: every resolver returns a [`Resolved`] carrying the resolved
//!   functions *and* the diagnostics, so callers (and tests) can inspect them
//!   without capturing global output.
//! - **Logged**: whoever keeps the final resolution calls [`Diagnostic::log`]
//!   (or [`log_new`]) once, which fires a `tracing::warn!` event with the
//!   fixed message string. Resolvers themselves stay silent, so re-resolving
//!   a field does not repeat a warning.

use crate::error::InputkitError;
use serde::Serialize;
use std::fmt;

/// Which registry a preset name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    Filter,
    Modifier,
    Validation,
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetKind::Filter => write!(f, "filter"),
            PresetKind::Modifier => write!(f, "modifier"),
            PresetKind::Validation => write!(f, "validation"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A filter preset name that is not in the registry.
    UnknownFilterPreset,
    /// A modifier preset name that is not in the registry.
    UnknownModifierPreset,
    /// A modifier entry of a kind modifiers do not support (patterns).
    UnsupportedModifier,
    /// A validation preset name that is not in the registry.
    UnknownValidationPreset,
    /// A list/set checkable model was toggled by an option without a value.
    MissingCheckableValue,
}

impl DiagnosticKind {
    /// The fixed message logged for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownFilterPreset => "Unknown filter preset provided",
            DiagnosticKind::UnknownModifierPreset => "Unknown modifier preset provided",
            DiagnosticKind::UnsupportedModifier => "Unknown modifier provided",
            DiagnosticKind::UnknownValidationPreset => "Unknown validation preset provided",
            DiagnosticKind::MissingCheckableValue => "Checkable value is not set",
        }
    }

    /// The registry an unknown-preset diagnostic refers to.
    pub fn preset_kind(&self) -> Option<PresetKind> {
        match self {
            DiagnosticKind::UnknownFilterPreset => Some(PresetKind::Filter),
            DiagnosticKind::UnknownModifierPreset | DiagnosticKind::UnsupportedModifier => {
                Some(PresetKind::Modifier)
            }
            DiagnosticKind::UnknownValidationPreset => Some(PresetKind::Validation),
            DiagnosticKind::MissingCheckableValue => None,
        }
    }
}

/// A non-fatal problem found while resolving a spec or updating a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The offending entry (preset name, pattern source, option value).
    pub subject: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, subject: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
        }
    }

    /// Report this diagnostic as a warning event.
    pub fn log(&self) {
        tracing::warn!(subject = %self.subject, "{}", self.message());
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Convert into a hard error, for callers that run in strict mode.
    pub fn into_error(self) -> InputkitError {
        match self.kind.preset_kind() {
            Some(kind) => InputkitError::UnknownPreset {
                kind,
                name: self.subject,
            },
            None => InputkitError::Api(format!("{}: {}", self.message(), self.subject)),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subject.is_empty() {
            write!(f, "{}", self.message())
        } else {
            write!(f, "{}: {}", self.message(), self.subject)
        }
    }
}

/// Log the diagnostics in `current` that `previous` did not already have.
pub fn log_new(previous: &[Diagnostic], current: &[Diagnostic]) {
    current
        .iter()
        .filter(|diagnostic| !previous.contains(diagnostic))
        .for_each(Diagnostic::log);
}

/// The outcome of resolving a spec list: the usable functions, in order,
/// plus one diagnostic per dropped entry.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    pub functions: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Default for Resolved<T> {
    fn default() -> Self {
        Self {
            functions: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl<T> Resolved<T> {
    pub fn push(&mut self, function: T) {
        self.functions.push(function);
    }

    /// Drop an entry, recording why.
    pub fn skip(&mut self, kind: DiagnosticKind, subject: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(kind, subject));
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Count the warning events `f` fires on the current thread.
#[cfg(test)]
pub(crate) fn count_warnings(f: impl FnOnce()) -> usize {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}
