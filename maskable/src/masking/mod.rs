//! Object-level masking machinery.
//!
//! - **`traits`**: The [`Maskable`] trait implemented by `#[derive(Maskable)]`
//! - **`descriptor`**: Per-type field/rule tables ([`TypeDescriptor`])
//! - **`accessor`**: Generated field getters and setters ([`FieldAccessor`])
//! - **`registry`**: The cache holding descriptors and accessors
//! - **`engine`**: The [`Masker`] entrypoint and its batch operations
//! - **`output`**: Masked results and their JSON form
//!
//! String-level rules live in `crate::policy`.

mod accessor;
mod descriptor;
mod engine;
mod output;
mod registry;
mod traits;

pub use accessor::{FieldAccessor, MaskableField};
pub use descriptor::{FieldDescriptor, TypeDescriptor};
pub use engine::{DEFAULT_PARALLEL_THRESHOLD, Masker, MaskerBuilder, MaskerConfig};
pub use output::Masked;
#[cfg(feature = "json")]
pub use output::{MaskedJson, MaskedJsonExt};
pub use registry::DescriptorRegistry;
pub use traits::{Maskable, MaskableExt};
