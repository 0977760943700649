//! The masking engine.
//!
//! [`Masker`] copies a value, looks up the cached [`TypeDescriptor`] for its
//! type, and rewrites each declared field of the copy. Batches are masked
//! lazily on the caller's thread or fanned out over scoped worker threads.
//!
//! [`TypeDescriptor`]: crate::TypeDescriptor

use std::{any::type_name, panic, sync::Arc, thread};

use super::{output::Masked, registry::DescriptorRegistry, traits::Maskable};

/// Batches smaller than this are masked on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(4)
        .max(1)
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskerConfig {
    /// Maximum number of worker threads used by
    /// [`Masker::mask_all_parallel`].
    pub workers: usize,

    /// Minimum batch length before work is spread over threads.
    pub parallel_threshold: usize,
}

impl Default for MaskerConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Masks values whose types implement [`Maskable`].
///
/// Cloning a `Masker` is cheap and shares its registry.
#[derive(Clone, Debug, Default)]
pub struct Masker {
    registry: Arc<DescriptorRegistry>,
    config: MaskerConfig,
}

impl Masker {
    /// Creates an engine with its own registry and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine sharing `registry`.
    #[must_use]
    pub fn with_registry(registry: Arc<DescriptorRegistry>) -> Self {
        Self {
            registry,
            config: MaskerConfig::default(),
        }
    }

    /// Starts a [`MaskerBuilder`].
    pub fn builder() -> MaskerBuilder {
        MaskerBuilder::default()
    }

    /// The registry backing this engine.
    pub fn registry(&self) -> &Arc<DescriptorRegistry> {
        &self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &MaskerConfig {
        &self.config
    }

    /// Returns a masked copy of `value`.
    ///
    /// `value` itself is never modified. Only the top-level fields declared
    /// with a rule are rewritten, and empty values are left alone.
    ///
    /// If `value` cannot be copied the original is returned unmasked as
    /// [`Masked::Original`]; this call never fails.
    pub fn mask<'a, T: Maskable>(&self, value: &'a T) -> Masked<'a, T> {
        let mut copy = match value.shallow_copy() {
            Ok(copy) => copy,
            Err(err) => {
                tracing::warn!(
                    type_name = type_name::<T>(),
                    error = %err,
                    "copy failed; returning the original value unmasked"
                );
                return Masked::Original(value);
            }
        };

        let descriptor = self.registry.descriptor::<T>();
        for field in descriptor.fields() {
            let accessor = self.registry.accessor::<T>(field);
            let Some(current) = accessor.get(&copy).filter(|current| !current.is_empty()) else {
                continue;
            };
            let masked = field.rule().apply_to(current);
            accessor.set(&mut copy, masked);
        }

        Masked::Redacted(copy)
    }

    /// Masks an optional value; `None` stays `None`.
    pub fn mask_option<'a, T: Maskable>(&self, value: Option<&'a T>) -> Option<Masked<'a, T>> {
        value.map(|value| self.mask(value))
    }

    /// Masks each item lazily, in input order.
    pub fn mask_all<'a, T, I>(&self, items: I) -> impl Iterator<Item = Masked<'a, T>>
    where
        T: Maskable,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().map(move |item| self.mask(item))
    }

    /// Masks `items` across worker threads.
    ///
    /// The result has one entry per input, in input order, and matches what
    /// [`Masker::mask_all`] would produce. Small batches run on the calling
    /// thread.
    pub fn mask_all_parallel<'a, T>(&self, items: &'a [T]) -> Vec<Masked<'a, T>>
    where
        T: Maskable + Send + Sync,
    {
        let workers = self.config.workers.min(items.len());
        if workers <= 1 || items.len() < self.config.parallel_threshold {
            return self.mask_all(items).collect();
        }

        // Build the descriptor before fanning out so workers only read the cache.
        let _ = self.registry.descriptor::<T>();
        let chunk_size = items.len().div_ceil(workers);
        tracing::debug!(
            type_name = type_name::<T>(),
            items = items.len(),
            workers,
            "masking batch in parallel"
        );

        thread::scope(|scope| {
            let handles: Vec<_> = items
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || chunk.iter().map(|item| self.mask(item)).collect::<Vec<_>>())
                })
                .collect();

            let mut masked = Vec::with_capacity(items.len());
            for handle in handles {
                match handle.join() {
                    Ok(part) => masked.extend(part),
                    Err(payload) => panic::resume_unwind(payload),
                }
            }
            masked
        })
    }
}

/// Builder for [`Masker`].
#[derive(Debug, Default)]
pub struct MaskerBuilder {
    registry: Option<Arc<DescriptorRegistry>>,
    config: MaskerConfig,
}

impl MaskerBuilder {
    /// Shares an existing registry instead of creating a new one.
    #[must_use]
    pub fn registry(mut self, registry: Arc<DescriptorRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Caps the number of worker threads. Zero is treated as one.
    #[must_use]
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers.max(1);
        self
    }

    /// Sets the batch length at which work moves to worker threads.
    #[must_use]
    pub fn parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.config.parallel_threshold = parallel_threshold;
        self
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: MaskerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the engine, creating a fresh registry if none was given.
    pub fn build(self) -> Masker {
        Masker {
            registry: self.registry.unwrap_or_default(),
            config: self.config,
        }
    }
}
