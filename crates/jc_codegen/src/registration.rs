use std::path::PathBuf;

use jc_registry::ClassName;
use jc_utils::hash::HashSet;

use crate::symbol::Declaration;

// -----------------------------------------------------------------------------
// AdapterRegistration

/// One `target -> adapter` pair discovered by a generator pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterRegistration {
    pub target: ClassName,
    /// `<Outer>_<Inner>JsonAdapter` in the package of the target.
    pub adapter: ClassName,
    pub has_type_parameters: bool,
}

impl AdapterRegistration {
    /// Create the registration of `target` with the conventional adapter name.
    #[inline]
    pub fn new(target: ClassName, has_type_parameters: bool) -> Self {
        Self {
            adapter: target.adapter_name(),
            target,
            has_type_parameters,
        }
    }
}

// -----------------------------------------------------------------------------
// RegistrationTable

/// The registrations of one pass in discovery order, with the files they
/// originate from.
///
/// Targets are distinct: a repeated target keeps its first registration and
/// later ones are skipped with a warning.
#[derive(Clone, Debug, Default)]
pub struct RegistrationTable {
    registrations: Vec<AdapterRegistration>,
    origins: Vec<PathBuf>,
}

impl RegistrationTable {
    /// Build the table from marked declarations.
    ///
    /// Declarations opting out with `generate_adapter = false` are ignored.
    /// Declarations that cannot be resolved to a concrete class are logged
    /// and skipped.
    pub fn discover<'a>(declarations: impl IntoIterator<Item = &'a Declaration>) -> Self {
        let mut table = Self::default();
        let mut targets = HashSet::default();
        let mut origins = HashSet::default();

        for declaration in declarations {
            if !declaration.generate_adapter {
                continue;
            }
            let target = match declaration.resolve() {
                Ok(target) => target,
                Err(err) => {
                    log::error!("skipping declaration: {err}");
                    continue;
                }
            };
            if !targets.insert(target.clone()) {
                log::warn!("`{target}` is marked more than once, keeping its first registration");
                continue;
            }

            if let Some(origin) = &declaration.origin
                && origins.insert(origin.clone())
            {
                table.origins.push(origin.clone());
            }
            table
                .registrations
                .push(AdapterRegistration::new(target, declaration.type_parameters > 0));
        }
        table
    }

    #[inline]
    pub fn registrations(&self) -> &[AdapterRegistration] {
        &self.registrations
    }

    /// Returns the distinct originating files, in discovery order.
    #[inline]
    pub fn origins(&self) -> &[PathBuf] {
        &self.origins
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
