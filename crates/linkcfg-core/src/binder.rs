//! Binds option values from a [`Source`] into a configuration object.

use tracing::{error, trace};

use crate::error::{ConfigError, ConfigResult};
use crate::field::{Accessor, Configurable};
use crate::option::OptionRegistry;
use crate::source::Source;
use crate::value::OptionKind;

/// Outcome counters of a [`bind`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Fields assigned from the source.
    pub bound: usize,
    /// Fields left untouched (no descriptor, or a kind mismatch).
    pub skipped: usize,
}

/// Populates every registered field of `target` from `source`.
///
/// Fields are visited in declaration order. A field without a descriptor
/// keeps its current value. Every other field is overwritten with the
/// source's value for the option name, so binding twice against the same
/// source gives the same object.
pub fn bind<T, S>(target: &mut T, registry: &OptionRegistry, source: &S) -> BindReport
where
    T: Configurable,
    S: Source + ?Sized,
{
    let mut report = BindReport::default();

    for field in T::fields() {
        let Some(desc) = registry.descriptor_for(field.name) else {
            trace!(field = field.name, "No descriptor, skipping");
            report.skipped += 1;
            continue;
        };

        match (desc.kind, field.accessor) {
            (OptionKind::String, Accessor::Str { set, .. }) => {
                set(target, source.get_string(desc.name))
            }
            (OptionKind::Int, Accessor::Int { set, .. }) => set(target, source.get_int(desc.name)),
            (OptionKind::Bool, Accessor::Bool { set, .. }) => {
                set(target, source.get_bool(desc.name))
            }
            (declared, accessor) => {
                error!(
                    option = desc.name,
                    declared = %declared,
                    field = %accessor.kind(),
                    "Option kind does not match field kind, leaving field untouched"
                );
                report.skipped += 1;
                continue;
            }
        }
        report.bound += 1;
    }

    report
}

/// Cross-checks the field table of `T` against `registry`.
///
/// Returns the first field whose kind disagrees with its descriptor. Fields
/// without a descriptor are fine.
pub fn check_schema<T: Configurable>(registry: &OptionRegistry) -> ConfigResult<()> {
    for field in T::fields() {
        if let Some(desc) = registry.descriptor_for(field.name) {
            if desc.kind != field.kind() {
                return Err(ConfigError::KindMismatch {
                    name: desc.name,
                    declared: desc.kind,
                    field: field.kind(),
                });
            }
        }
    }
    Ok(())
}
