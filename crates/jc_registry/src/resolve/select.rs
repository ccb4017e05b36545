use crate::class::{AdapterClass, Constructor, ConstructorShape};

// -----------------------------------------------------------------------------
// Constructor selection

/// Preference order for a parameterized request.
const PARAMETERIZED: &[ConstructorShape] = &[ConstructorShape::EngineWithTypes, ConstructorShape::Engine];

/// Preference order for a raw request.
const RAW: &[ConstructorShape] = &[ConstructorShape::Engine, ConstructorShape::NoArgs];

/// Returns the first constructor of `class` matching the preference order of
/// the request, or `None` when no shape in that order is exposed.
pub(crate) fn select_constructor(class: &AdapterClass, parameterized: bool) -> Option<&Constructor> {
    let order = if parameterized { PARAMETERIZED } else { RAW };
    order.iter().find_map(|&shape| class.constructor(shape))
}

#[cfg(test)]
mod tests {
    use super::select_constructor;
    use crate::adapter::SerdeAdapter;
    use crate::class::{AdapterClass, Constructor, ConstructorShape};
    use crate::types::ClassName;

    fn class(shapes: &[ConstructorShape]) -> AdapterClass {
        let mut class = AdapterClass::new(ClassName::new("com.app", ["FoodJsonAdapter"]));
        for shape in shapes {
            class = class.with_constructor(match shape {
                ConstructorShape::NoArgs => Constructor::NoArgs(|| Ok(Box::new(SerdeAdapter::<u8>::new()))),
                ConstructorShape::Engine => Constructor::Engine(|_| Ok(Box::new(SerdeAdapter::<u8>::new()))),
                ConstructorShape::EngineWithTypes => {
                    Constructor::EngineWithTypes(|_, _| Ok(Box::new(SerdeAdapter::<u8>::new())))
                }
            });
        }
        class
    }

    fn selected(class: &AdapterClass, parameterized: bool) -> Option<ConstructorShape> {
        select_constructor(class, parameterized).map(Constructor::shape)
    }

    #[test]
    fn parameterized_order() {
        use ConstructorShape::*;

        let all = class(&[NoArgs, Engine, EngineWithTypes]);
        assert_eq!(selected(&all, true), Some(EngineWithTypes));
        assert_eq!(selected(&class(&[NoArgs, Engine]), true), Some(Engine));
        assert_eq!(selected(&class(&[NoArgs]), true), None);
    }

    #[test]
    fn raw_order() {
        use ConstructorShape::*;

        let all = class(&[NoArgs, Engine, EngineWithTypes]);
        assert_eq!(selected(&all, false), Some(Engine));
        assert_eq!(selected(&class(&[EngineWithTypes, NoArgs]), false), Some(NoArgs));
        assert_eq!(selected(&class(&[EngineWithTypes]), false), None);
    }
}
