//! Identifier generation for occurrences and series.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// A source of fresh identifiers.
///
/// Ids must not repeat within one generator's lifetime. Nothing else is
/// promised, in particular no ordering.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn next_id(&self) -> String {
        self()
    }
}

/// Random `temp-<uuid>` ids. A store is expected to replace them on save.
#[derive(Debug, Clone, Copy, Default)]
pub struct TempIdGenerator;

impl IdGenerator for TempIdGenerator {
    fn next_id(&self) -> String {
        format!("temp-{}", Uuid::new_v4().simple())
    }
}

/// Deterministic `<prefix>-<n>` ids counting up from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
