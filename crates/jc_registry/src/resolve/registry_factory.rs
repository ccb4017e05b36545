use alloc::boxed::Box;

use crate::adapter::{JsonAdapter, NullSafe};
use crate::class::{AdapterClass, ClassPath};
use crate::engine::{AdapterFactory, Engine};
use crate::registry::{AdapterRegistry, AdapterTable};
use crate::resolve::{ResolveError, select_constructor};
use crate::types::{ClassName, TypeKey};

// -----------------------------------------------------------------------------
// AdapterSource

/// Where the adapter class for a request came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterSource {
    /// Named by an entry of the registry table.
    RegistryEntry(ClassName),
    /// Built from the target name by the adapter naming convention.
    ConventionalName(ClassName),
    /// Neither source yields a loadable class.
    Unresolvable,
}

impl AdapterSource {
    /// Returns the adapter class name, if any.
    #[inline]
    pub fn class_name(&self) -> Option<&ClassName> {
        match self {
            Self::RegistryEntry(name) | Self::ConventionalName(name) => Some(name),
            Self::Unresolvable => None,
        }
    }
}

// -----------------------------------------------------------------------------
// RegistryFactory

/// The [`AdapterFactory`] backed by an [`AdapterRegistry`].
///
/// For a requested type it:
///
/// 1. declines unless the raw class is on the class path with a
///    `#[json_class]` marker that generates an adapter;
/// 2. looks the raw type up in the registry table, then falls back to the
///    conventional adapter name (`Outer_InnerJsonAdapter`);
/// 3. picks a constructor: `(engine, type arguments)` then `(engine)` for a
///    parameterized request, `(engine)` then `()` for a raw one;
/// 4. wraps the new adapter in [`NullSafe`].
///
/// Usually installed through
/// [`EngineBuilder::add_registry`](crate::engine::EngineBuilder::add_registry).
#[derive(Debug, Clone)]
pub struct RegistryFactory {
    table: AdapterTable,
}

impl RegistryFactory {
    /// Create a factory over a snapshot of `registry`'s table.
    #[inline]
    pub fn new(registry: &dyn AdapterRegistry) -> Self {
        Self {
            table: registry.adapters(),
        }
    }

    /// Returns the registry table.
    #[inline]
    pub fn table(&self) -> &AdapterTable {
        &self.table
    }

    /// Returns where the adapter class for the raw type of `ty` comes from.
    ///
    /// Registry entries take priority over the naming convention. This does
    /// not check the marker of the target.
    pub fn source_of(&self, ty: &TypeKey, class_path: &ClassPath) -> AdapterSource {
        if let Some(adapter) = self.table.get(ty) {
            return if class_path.load_class(adapter).is_some() {
                AdapterSource::RegistryEntry(adapter.clone())
            } else {
                AdapterSource::Unresolvable
            };
        }

        let conventional = ty.raw().adapter_name();
        if class_path.load_class(&conventional).is_some() {
            AdapterSource::ConventionalName(conventional)
        } else {
            AdapterSource::Unresolvable
        }
    }

    fn locate<'a>(&self, ty: &TypeKey, class_path: &'a ClassPath) -> Option<&'a AdapterClass> {
        match self.source_of(ty, class_path) {
            AdapterSource::RegistryEntry(name) | AdapterSource::ConventionalName(name) => {
                class_path.load_class(&name)
            }
            AdapterSource::Unresolvable => {
                if let Some(adapter) = self.table.get(ty) {
                    log::warn!(
                        "adapter class `{adapter}` registered for `{}` is not on the class path",
                        ty.raw()
                    );
                }
                None
            }
        }
    }
}

impl AdapterFactory for RegistryFactory {
    fn create(&self, ty: &TypeKey, engine: &Engine) -> Result<Option<Box<dyn JsonAdapter>>, ResolveError> {
        let class_path = engine.class_path();

        let Some(target) = class_path.target(ty.raw()) else {
            return Ok(None);
        };
        if !target.generates_adapter() {
            return Ok(None);
        }

        let Some(class) = self.locate(ty, class_path) else {
            return Ok(None);
        };

        let parameterized = ty.is_parameterized();
        let Some(constructor) = select_constructor(class, parameterized) else {
            return Err(ResolveError::MissingConstructor {
                ty: ty.clone(),
                class: class.name().clone(),
                generic_raw: !parameterized && class.is_generic(),
            });
        };

        let adapter = constructor
            .invoke(engine, ty.args())
            .map_err(|source| ResolveError::Instantiation {
                ty: ty.clone(),
                class: class.name().clone(),
                shape: constructor.shape(),
                source,
            })?;

        Ok(Some(Box::new(NullSafe::new(adapter))))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use core::any::Any;

    use serde_json::Value;

    use super::{AdapterSource, RegistryFactory};
    use crate::adapter::{AdapterError, JsonAdapter};
    use crate::class::{AdapterClass, ClassPath, Constructor, JsonClass, TargetClass};
    use crate::engine::{AdapterFactory, Engine};
    use crate::registry::AdapterTable;
    use crate::resolve::ResolveError;
    use crate::types::{ClassName, TypeKey};

    /// Encodes every value as a fixed string, so tests can see which
    /// constructor built it.
    struct Tag(&'static str);

    impl JsonAdapter for Tag {
        fn from_json(&self, _: &Value) -> Result<Option<Box<dyn Any + Send>>, AdapterError> {
            Ok(Some(Box::new(self.0)))
        }

        fn to_json(&self, _: Option<&dyn Any>) -> Result<Value, AdapterError> {
            Ok(Value::String(self.0.into()))
        }
    }

    fn food() -> ClassName {
        ClassName::new("com.app.model", ["Food"])
    }

    fn response() -> ClassName {
        ClassName::new("com.app.net", ["Response"])
    }

    fn string_key() -> TypeKey {
        TypeKey::of(ClassName::new("std.string", ["String"]))
    }

    fn marked(name: ClassName) -> TargetClass {
        TargetClass::new(name).with_marker(JsonClass::new(true))
    }

    fn class_path() -> ClassPath {
        let mut class_path = ClassPath::empty();

        class_path.register_target(marked(food()));
        class_path.register_adapter(
            AdapterClass::new(food().adapter_name())
                .with_constructor(Constructor::NoArgs(|| Ok(Box::new(Tag("food()")))))
                .with_constructor(Constructor::Engine(|_| Ok(Box::new(Tag("food(engine)"))))),
        );

        class_path.register_target(marked(response()).with_type_params(1));
        class_path.register_adapter(
            AdapterClass::new(response().adapter_name())
                .with_type_params(1)
                .with_constructor(Constructor::EngineWithTypes(|_, args| {
                    assert_eq!(args.len(), 1);
                    Ok(Box::new(Tag("response(engine, types)")))
                })),
        );

        class_path
    }

    fn engine(class_path: ClassPath, table: AdapterTable) -> Engine {
        Engine::builder().class_path(class_path).add_registry(table).build()
    }

    fn tag_of(adapter: &dyn JsonAdapter) -> Value {
        adapter.to_json(Some(&())).unwrap()
    }

    fn create(engine: &Engine, factory: &RegistryFactory, ty: &TypeKey) -> Option<Box<dyn JsonAdapter>> {
        factory.create(ty, engine).unwrap()
    }

    #[test]
    fn raw_request_prefers_engine_constructor() {
        let table = AdapterTable::from_entries([(food(), food().adapter_name())]);
        let factory = RegistryFactory::new(&table);
        let engine = engine(class_path(), table);

        let adapter = create(&engine, &factory, &TypeKey::of(food())).unwrap();
        assert_eq!(tag_of(&*adapter), "food(engine)");
        // Wrapped in `NullSafe`.
        assert!(adapter.from_json(&Value::Null).unwrap().is_none());
        assert_eq!(adapter.to_json(None).unwrap(), Value::Null);
    }

    #[test]
    fn raw_request_falls_back_to_no_args() {
        let mut class_path = ClassPath::empty();
        class_path.register_target(marked(food()));
        class_path.register_adapter(
            AdapterClass::new(food().adapter_name())
                .with_constructor(Constructor::NoArgs(|| Ok(Box::new(Tag("food()"))))),
        );
        let table = AdapterTable::from_entries([(food(), food().adapter_name())]);
        let factory = RegistryFactory::new(&table);
        let engine = engine(class_path, table);

        let adapter = create(&engine, &factory, &TypeKey::of(food())).unwrap();
        assert_eq!(tag_of(&*adapter), "food()");
    }

    #[test]
    fn parameterized_request_uses_type_arguments() {
        let table = AdapterTable::from_entries([(response(), response().adapter_name())]);
        let factory = RegistryFactory::new(&table);
        let engine = engine(class_path(), table);

        let ty = TypeKey::parameterized(response(), [string_key()]);
        let adapter = create(&engine, &factory, &ty).unwrap();
        assert_eq!(tag_of(&*adapter), "response(engine, types)");
    }

    #[test]
    fn parameterized_request_falls_back_to_engine() {
        let table = AdapterTable::from_entries([(food(), food().adapter_name())]);
        let factory = RegistryFactory::new(&table);
        let engine = engine(class_path(), table);

        let ty = TypeKey::parameterized(food(), [string_key()]);
        let adapter = create(&engine, &factory, &ty).unwrap();
        assert_eq!(tag_of(&*adapter), "food(engine)");
    }

    #[test]
    fn unmarked_or_disabled_declines() {
        let plain = ClassName::new("com.app", ["Plain"]);
        let disabled = ClassName::new("com.app", ["Disabled"]);

        let mut class_path = class_path();
        class_path.register_target(TargetClass::new(plain.clone()));
        class_path.register_target(TargetClass::new(disabled.clone()).with_marker(JsonClass::new(false)));
        for name in [&plain, &disabled] {
            class_path.register_adapter(
                AdapterClass::new(name.adapter_name())
                    .with_constructor(Constructor::NoArgs(|| Ok(Box::new(Tag("unexpected"))))),
            );
        }

        let table = AdapterTable::from_entries([
            (plain.clone(), plain.adapter_name()),
            (disabled.clone(), disabled.adapter_name()),
        ]);
        let factory = RegistryFactory::new(&table);
        let engine = engine(class_path, table);

        assert!(create(&engine, &factory, &TypeKey::of(plain)).is_none());
        assert!(create(&engine, &factory, &TypeKey::of(disabled)).is_none());
        assert!(create(&engine, &factory, &TypeKey::of(ClassName::new("com.app", ["Unknown"]))).is_none());
    }

    #[test]
    fn empty_registry_uses_conventional_name() {
        let table = AdapterTable::empty();
        let factory = RegistryFactory::new(&table);
        let class_path = class_path();

        assert_eq!(
            factory.source_of(&TypeKey::of(food()), &class_path),
            AdapterSource::ConventionalName(food().adapter_name()),
        );

        let engine = engine(class_path, table);
        let adapter = create(&engine, &factory, &TypeKey::of(food())).unwrap();
        assert_eq!(tag_of(&*adapter), "food(engine)");
    }

    #[test]
    fn registry_entry_takes_priority() {
        let custom = ClassName::new("com.app.adapters", ["CustomFoodAdapter"]);

        let mut class_path = class_path();
        class_path.register_adapter(
            AdapterClass::new(custom.clone())
                .with_constructor(Constructor::NoArgs(|| Ok(Box::new(Tag("custom()"))))),
        );

        let table = AdapterTable::from_entries([(food(), custom.clone())]);
        let factory = RegistryFactory::new(&table);
        assert_eq!(
            factory.source_of(&TypeKey::of(food()), &class_path),
            AdapterSource::RegistryEntry(custom),
        );

        let engine = engine(class_path, table);
        let adapter = create(&engine, &factory, &TypeKey::of(food())).unwrap();
        assert_eq!(tag_of(&*adapter), "custom()");
    }

    #[test]
    fn absent_adapter_declines() {
        let lonely = ClassName::new("com.app", ["Lonely"]);
        let ghost = ClassName::new("com.app", ["GhostAdapter"]);

        let mut class_path = class_path();
        class_path.register_target(marked(lonely.clone()));

        // Neither the conventional name nor the registered one is loadable.
        let table = AdapterTable::from_entries([(food(), ghost)]);
        let factory = RegistryFactory::new(&table);
        assert_eq!(
            factory.source_of(&TypeKey::of(lonely.clone()), &class_path),
            AdapterSource::Unresolvable,
        );

        let engine = engine(class_path, table);
        assert!(create(&engine, &factory, &TypeKey::of(lonely)).is_none());
        assert!(create(&engine, &factory, &TypeKey::of(food())).is_none());
    }

    #[test]
    fn raw_request_of_generic_adapter_hints() {
        let table = AdapterTable::from_entries([(response(), response().adapter_name())]);
        let factory = RegistryFactory::new(&table);
        let engine = engine(class_path(), table);

        let err = factory.create(&TypeKey::of(response()), &engine).unwrap_err();
        match &err {
            ResolveError::MissingConstructor { ty, class, generic_raw } => {
                assert_eq!(ty, &TypeKey::of(response()));
                assert_eq!(class, &response().adapter_name());
                assert!(*generic_raw);
            }
            other => panic!("unexpected error: {other}"),
        }

        let message = err.to_string();
        assert!(message.contains("com.app.net.Response"));
        assert!(message.contains("com.app.net.ResponseJsonAdapter"));
        assert!(message.contains("not parameterized"));
    }

    #[test]
    fn missing_constructor_without_hint() {
        let mut class_path = ClassPath::empty();
        class_path.register_target(marked(food()));
        class_path.register_adapter(AdapterClass::new(food().adapter_name()));
        let table = AdapterTable::empty();
        let factory = RegistryFactory::new(&table);
        let engine = engine(class_path, table);

        let err = factory.create(&TypeKey::of(food()), &engine).unwrap_err();
        assert!(matches!(err, ResolveError::MissingConstructor { generic_raw: false, .. }));
        assert!(!err.to_string().contains("not parameterized"));
    }

    #[test]
    fn constructor_failure_is_wrapped() {
        let mut class_path = ClassPath::empty();
        class_path.register_target(marked(food()));
        class_path.register_adapter(
            AdapterClass::new(food().adapter_name())
                .with_constructor(Constructor::NoArgs(|| Err(AdapterError::custom("boom")))),
        );
        let table = AdapterTable::empty();
        let factory = RegistryFactory::new(&table);
        let engine = engine(class_path, table);

        let err = factory.create(&TypeKey::of(food()), &engine).unwrap_err();
        assert!(matches!(err, ResolveError::Instantiation { .. }));
        assert!(err.to_string().contains("com.app.model.Food"));
        assert_eq!(core::error::Error::source(&err).unwrap().to_string(), "boom");
    }
}
