//! Resolution through a registry table rendered by `jc_codegen`.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::adapter::{AdapterError, JsonAdapter, SerdeAdapter};
use crate::class::{AdapterClass, AdapterType, ClassPath, Constructor, JsonClass, TargetClass};
use crate::derive::json_class;
use crate::engine::{Engine, EngineError};
use crate::registry::AdapterRegistry;
use crate::resolve::ResolveError;
use crate::types::{TypeKey, Typed};

mod table {
    include!("testdata/registry_table.rs");
}

use table::DefaultAdapterRegistry;

// -----------------------------------------------------------------------------
// Targets

#[json_class]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Food {
    name: String,
}

#[json_class]
#[allow(dead_code)]
struct Response<T> {
    code: i32,
    data: Option<T>,
}

#[json_class]
#[allow(dead_code)]
struct Pair<A, B> {
    first: A,
    second: B,
}

// -----------------------------------------------------------------------------
// Adapters

struct FoodJsonAdapter;

impl AdapterType for FoodJsonAdapter {
    fn adapter_class() -> AdapterClass {
        AdapterClass::new(Food::type_key().raw().adapter_name())
            .with_constructor(Constructor::Engine(|_| Ok(Box::new(SerdeAdapter::<Food>::new()))))
    }
}

/// Reads and writes the `data` field with the adapter of the type argument.
struct ResponseJsonAdapter {
    data: Arc<dyn JsonAdapter>,
}

impl JsonAdapter for ResponseJsonAdapter {
    fn from_json(&self, json: &Value) -> Result<Option<Box<dyn Any + Send>>, AdapterError> {
        self.data.from_json(json.get("data").unwrap_or(&Value::Null))
    }

    fn to_json(&self, value: Option<&dyn Any>) -> Result<Value, AdapterError> {
        Ok(json!({ "code": 200, "data": self.data.to_json(value)? }))
    }
}

impl AdapterType for ResponseJsonAdapter {
    fn adapter_class() -> AdapterClass {
        AdapterClass::new(<Response<String>>::type_key().raw().adapter_name())
            .with_type_params(1)
            .with_constructor(Constructor::EngineWithTypes(|engine, args| {
                let [data] = args else {
                    return Err(AdapterError::custom("expected one type argument"));
                };
                Ok(Box::new(ResponseJsonAdapter {
                    data: engine.adapter(data)?,
                }))
            }))
    }
}

type Slots = (Option<Box<dyn Any + Send>>, Option<Box<dyn Any + Send>>);

/// Decodes `first` and `second` into [`Slots`].
struct PairJsonAdapter {
    first: Arc<dyn JsonAdapter>,
    second: Arc<dyn JsonAdapter>,
}

impl JsonAdapter for PairJsonAdapter {
    fn from_json(&self, json: &Value) -> Result<Option<Box<dyn Any + Send>>, AdapterError> {
        let first = self.first.from_json(json.get("first").unwrap_or(&Value::Null))?;
        let second = self.second.from_json(json.get("second").unwrap_or(&Value::Null))?;
        let slots: Slots = (first, second);
        Ok(Some(Box::new(slots)))
    }

    fn to_json(&self, _: Option<&dyn Any>) -> Result<Value, AdapterError> {
        Err(AdapterError::custom("decode only"))
    }
}

impl AdapterType for PairJsonAdapter {
    fn adapter_class() -> AdapterClass {
        AdapterClass::new(<Pair<String, Food>>::type_key().raw().adapter_name())
            .with_type_params(2)
            .with_constructor(Constructor::EngineWithTypes(|engine, args| {
                assert_eq!(args, [String::type_key(), Food::type_key()]);
                Ok(Box::new(PairJsonAdapter {
                    first: engine.adapter(&args[0])?,
                    second: engine.adapter(&args[1])?,
                }))
            }))
    }
}

// -----------------------------------------------------------------------------
// Tests

fn class_path() -> ClassPath {
    let mut class_path = ClassPath::empty();
    let targets = [
        (Food::type_key(), 0),
        (<Response<String>>::type_key(), 1),
        (<Pair<String, Food>>::type_key(), 2),
    ];
    for (key, type_params) in targets {
        class_path.register_target(
            TargetClass::new(key.raw().clone())
                .with_type_params(type_params)
                .with_marker(JsonClass::new(true)),
        );
    }
    class_path.register_adapter(FoodJsonAdapter::adapter_class());
    class_path.register_adapter(ResponseJsonAdapter::adapter_class());
    class_path.register_adapter(PairJsonAdapter::adapter_class());
    class_path
}

fn engine() -> Engine {
    Engine::builder()
        .class_path(class_path())
        .add_registry(DefaultAdapterRegistry)
        .add_adapter::<String>(SerdeAdapter::<String>::new())
        .build()
}

#[test]
fn table_lists_declarations_in_order() {
    let table = DefaultAdapterRegistry.adapters();
    let targets: Vec<String> = table.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(
        targets,
        [
            "jc_registry.resolve.generated_table.Food",
            "jc_registry.resolve.generated_table.Response",
            "jc_registry.resolve.generated_table.Pair",
        ]
    );

    // Parameterized requests are looked up by their raw type.
    let adapter = table.get(&<Response<String>>::type_key()).unwrap();
    assert_eq!(adapter, ResponseJsonAdapter::adapter_class().name());
}

#[test]
fn resolve_plain_class() {
    let engine = engine();
    let adapter = engine.adapter_for::<Food>().unwrap();

    let food = adapter.from_json_str(r#"{"name":"apple"}"#).unwrap();
    assert_eq!(food, Some(Food { name: "apple".into() }));
    assert_eq!(adapter.from_json_str("null").unwrap(), None);
}

#[test]
fn resolve_with_type_argument() {
    let engine = engine();
    let adapter = engine.adapter(&<Response<String>>::type_key()).unwrap();

    let data = adapter
        .from_json(&json!({ "code": 200, "data": "ok" }))
        .unwrap()
        .unwrap();
    assert_eq!(*data.downcast::<String>().unwrap(), "ok");

    let ok = String::from("ok");
    assert_eq!(
        adapter.to_json(Some(&ok)).unwrap(),
        json!({ "code": 200, "data": "ok" })
    );
}

#[test]
fn type_arguments_in_declaration_order() {
    let engine = engine();
    let adapter = engine.adapter(&<Pair<String, Food>>::type_key()).unwrap();

    let slots = adapter
        .from_json(&json!({ "first": "a", "second": { "name": "apple" } }))
        .unwrap()
        .unwrap();
    let (first, second) = *slots.downcast::<Slots>().unwrap();

    assert_eq!(*first.unwrap().downcast::<String>().unwrap(), "a");
    assert_eq!(
        *second.unwrap().downcast::<Food>().unwrap(),
        Food { name: "apple".into() }
    );
}

#[test]
fn raw_request_of_generic_class_fails() {
    let engine = engine();
    let raw = TypeKey::of(<Pair<String, Food>>::type_key().raw().clone());

    let Err(err) = engine.adapter(&raw) else {
        panic!("a raw request must not build a generic adapter");
    };
    assert!(matches!(
        err,
        EngineError::Resolve(ResolveError::MissingConstructor { generic_raw: true, .. })
    ));
}
