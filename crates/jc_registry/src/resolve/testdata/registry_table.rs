// This file is auto generated by jc-codegen.
// **DO NOT EDIT THIS FILE MANUALLY**

/// Adapter registry of `jc.companion.r0ad63aa82608b5ad.generated`.
pub struct DefaultAdapterRegistry;

impl ::jc_registry::AdapterRegistry for DefaultAdapterRegistry {
    fn adapters(&self) -> ::jc_registry::AdapterTable {
        ::jc_registry::AdapterTable::from_entries([
            (
                ::jc_registry::ClassName::new("jc_registry.resolve.generated_table", ["Food"]),
                ::jc_registry::ClassName::new("jc_registry.resolve.generated_table", ["FoodJsonAdapter"]),
            ),
            (
                ::jc_registry::ClassName::new("jc_registry.resolve.generated_table", ["Response"]),
                ::jc_registry::ClassName::new("jc_registry.resolve.generated_table", ["ResponseJsonAdapter"]),
            ),
            (
                ::jc_registry::ClassName::new("jc_registry.resolve.generated_table", ["Pair"]),
                ::jc_registry::ClassName::new("jc_registry.resolve.generated_table", ["PairJsonAdapter"]),
            ),
        ])
    }
}
