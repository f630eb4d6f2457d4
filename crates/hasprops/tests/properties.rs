//! Integration tests for derived property tables.
//!
//! These exercise `#[derive(HasProps)]` end to end: defaults, validated
//! assignment, inheritance, bulk assignment, and the dictionary form of
//! data and color specs read through shared descriptors.

use hasprops::prelude::*;
use hasprops::PropertyError;
use serde_json::{json, Map, Value};

fn dict(map: Option<Map<String, Value>>) -> Value {
    Value::Object(map.expect("spec properties always serialize to a dictionary"))
}

mod basic {
    use super::*;

    #[derive(HasProps, Default)]
    #[props(
        x = Int::new(12),
        y = Str::new("hello"),
        z = Array::new([1, 2, 3]),
        s = Str,
    )]
    struct Foo {
        store: PropertyStore,
    }

    #[test]
    fn test_simple_class() {
        let mut f = Foo::default();
        assert_eq!(f.get("x").unwrap(), json!(12));
        assert_eq!(f.get("y").unwrap(), json!("hello"));
        assert_eq!(f.get_as::<Vec<i64>>("z").unwrap(), vec![1, 2, 3]);
        assert_eq!(f.get("s").unwrap(), Value::Null);

        f.set(Foo::X, 18).unwrap();
        assert_eq!(f.get("x").unwrap(), json!(18));

        f.set(Foo::Y, "bar").unwrap();
        assert_eq!(f.get("y").unwrap(), json!("bar"));
    }

    #[test]
    fn test_generated_constants() {
        assert_eq!(Foo::X, "x");
        assert_eq!(Foo::S, "s");
        assert_eq!(Foo::default().class_name(), "Foo");
    }

    #[test]
    fn test_instances_are_isolated() {
        let mut a = Foo::default();
        let b = Foo::default();
        a.set("x", 99).unwrap();
        assert_eq!(a.get("x").unwrap(), json!(99));
        assert_eq!(b.get("x").unwrap(), json!(12));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let mut f = Foo::default();
        let err = f.set("x", "eighteen").unwrap_err();
        assert!(err.to_string().contains("x"));
        assert_eq!(f.get("x").unwrap(), json!(12));
        assert!(f.set("z", 3).is_err());
    }
}

mod enums {
    use super::*;

    #[derive(HasProps, Default)]
    #[props(
        x = Enum::new(["blue", "red", "green"]),
        y = Enum::new(["small", "medium", "large"]).with_default("tiny"),
    )]
    struct Foo {
        store: PropertyStore,
    }

    #[test]
    fn test_enum() {
        let mut f = Foo::default();
        assert_eq!(f.get("x").unwrap(), json!("blue"));
        assert_eq!(f.get("y").unwrap(), json!("tiny"));

        f.set("x", "red").unwrap();
        assert!(matches!(
            f.set("x", "yellow"),
            Err(PropertyError::InvalidValue { .. })
        ));
        assert_eq!(f.get("x").unwrap(), json!("red"));

        f.set("y", "small").unwrap();
        // The default is not itself an allowed value.
        assert!(f.set("y", "tiny").is_err());
        assert_eq!(f.get("y").unwrap(), json!("small"));
    }
}

mod inheritance {
    use super::*;
    use std::collections::BTreeSet;

    #[derive(HasProps, Default)]
    #[props(x = Int::new(12), y = Str::new("hello"))]
    struct Base {
        store: PropertyStore,
    }

    #[derive(HasProps, Default)]
    #[extends(Base)]
    #[props(z = Float::new(2.75))]
    struct Child {
        store: PropertyStore,
    }

    #[derive(HasProps, Default)]
    #[extends(Child)]
    #[props(x = Int::new(40))]
    struct GrandChild {
        #[store]
        values: PropertyStore,
    }

    #[test]
    fn test_inheritance() {
        let c = Child::default();
        let expected: BTreeSet<&str> = ["x", "y", "z"].into_iter().collect();
        assert_eq!(c.properties(), expected);
        assert_eq!(c.get("y").unwrap(), json!("hello"));
        assert_eq!(c.get("z").unwrap(), json!(2.75));
    }

    #[test]
    fn test_parent_descriptor_is_shared() {
        let base = Base::descriptor("y").unwrap();
        let child = Child::descriptor("y").unwrap();
        assert!(std::ptr::addr_eq(base.property(), child.property()));
    }

    #[test]
    fn test_redeclared_property_wins() {
        let g = GrandChild::default();
        assert_eq!(g.get("x").unwrap(), json!(40));
        assert_eq!(Base::default().get("x").unwrap(), json!(12));
        assert_eq!(g.properties().len(), 3);
        assert_eq!(
            GrandChild::property_table().lineage(),
            ["Base", "Child", "GrandChild"]
        );
    }

    #[test]
    fn test_trait_object_access() {
        let mut objects: Vec<Box<dyn HasProps>> =
            vec![Box::new(Base::default()), Box::new(Child::default())];
        for obj in objects.iter_mut() {
            obj.set_value("x", json!(5)).unwrap();
        }
        assert!(objects.iter().all(|o| o.get("x").unwrap() == json!(5)));
        assert_eq!(objects[1].class_name(), "Child");
    }
}

mod bulk {
    use super::*;

    #[derive(HasProps, Default)]
    #[props(
        x = Int::new(12),
        y = Enum::new(["red", "blue", "green"]),
        z = Str::new("blah"),
    )]
    struct Foo {
        store: PropertyStore,
    }

    #[test]
    fn test_set_many() {
        let mut f = Foo::default();
        assert_eq!(f.get("x").unwrap(), json!(12));
        assert_eq!(f.get("y").unwrap(), json!("red"));
        assert_eq!(f.get("z").unwrap(), json!("blah"));

        f.set_many([("x", json!(20)), ("y", json!("green")), ("z", json!("hello"))])
            .unwrap();
        assert_eq!(f.get("x").unwrap(), json!(20));
        assert_eq!(f.get("y").unwrap(), json!("green"));
        assert_eq!(f.get("z").unwrap(), json!("hello"));

        assert!(f.set_many([("y", "orange")]).is_err());
        assert_eq!(f.get("y").unwrap(), json!("green"));
    }

    #[test]
    fn test_set_many_keeps_earlier_assignments() {
        let mut f = Foo::default();
        let result = f.set_many([
            ("x", json!(1)),
            ("q", json!(2)),
            ("z", json!("unreached")),
        ]);
        assert!(matches!(result, Err(PropertyError::UnknownProperty { .. })));
        assert_eq!(f.get("x").unwrap(), json!(1));
        assert_eq!(f.get("z").unwrap(), json!("blah"));
        assert_eq!(f.changed_properties().into_iter().collect::<Vec<_>>(), ["x"]);
    }
}

mod no_parens {
    use super::*;

    #[derive(HasProps, Default)]
    #[props(x = Int, y = Int::default())]
    struct Foo {
        store: PropertyStore,
    }

    #[test]
    fn test_no_parens() {
        let mut f = Foo::default();
        assert_eq!(f.get("x").unwrap(), f.get("y").unwrap());
        f.set("x", 13).unwrap();
        assert_eq!(f.get("x").unwrap(), json!(13));
    }
}

mod data_spec {
    use super::*;

    #[derive(HasProps, Default)]
    #[props(x = DataSpec::new("xfield"))]
    struct Plain {
        store: PropertyStore,
    }

    #[derive(HasProps, Default)]
    #[props(y = DataSpec::new("yfield").with_default(12))]
    struct WithDefault {
        store: PropertyStore,
    }

    #[derive(HasProps, Default)]
    #[props(x = DataSpec::new("xfield").with_default(12))]
    struct Shared {
        store: PropertyStore,
    }

    #[test]
    fn test_field() {
        let desc = Plain::descriptor("x").unwrap();
        let mut f = Plain::default();
        assert_eq!(f.get("x").unwrap(), json!("xfield"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"field": "xfield", "units": "data"}));

        f.set("x", "my_x").unwrap();
        assert_eq!(f.get("x").unwrap(), json!("my_x"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"field": "my_x", "units": "data"}));
    }

    #[test]
    fn test_value() {
        let desc = Plain::descriptor("x").unwrap();
        let mut f = Plain::default();

        f.set("x", 12).unwrap();
        assert_eq!(f.get("x").unwrap(), json!(12));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": 12, "units": "data"}));

        f.set("x", 15).unwrap();
        assert_eq!(f.get("x").unwrap(), json!(15));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": 15, "units": "data"}));

        f.set("x", json!({"value": 23, "units": "screen"})).unwrap();
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": 23, "units": "screen"}));

        // A default next to a value is unused, and the omitted units revert
        // to the construction setting.
        f.set("x", json!({"value": 32, "default": 18})).unwrap();
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": 32, "units": "data"}));
    }

    #[test]
    fn test_default() {
        let desc = WithDefault::descriptor("y").unwrap();
        let mut f = WithDefault::default();
        assert_eq!(f.get("y").unwrap(), json!({"field": "yfield", "default": 12}));
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"field": "yfield", "default": 12, "units": "data"})
        );

        f.set("y", "y1").unwrap();
        assert_eq!(f.get("y").unwrap(), json!("y1"));

        f.set("y", ("y2", 27)).unwrap();
        assert_eq!(
            f.get("y").unwrap(),
            json!({"field": "y2", "default": 27, "units": "data"})
        );
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"field": "y2", "default": 27, "units": "data"})
        );

        f.set("y", 32).unwrap();
        assert_eq!(f.get("y").unwrap(), json!(32));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": 32, "units": "data"}));
    }

    #[test]
    fn test_multiple_instances() {
        let desc = Shared::descriptor("x").unwrap();
        let mut a = Shared::default();
        let mut b = Shared::default();

        a.set("x", 13).unwrap();
        b.set("x", 14).unwrap();
        assert_eq!(a.get("x").unwrap(), json!(13));
        assert_eq!(b.get("x").unwrap(), json!(14));
        assert_eq!(dict(desc.to_dict(&a)), json!({"value": 13, "units": "data"}));
        assert_eq!(dict(desc.to_dict(&b)), json!({"value": 14, "units": "data"}));

        a.set("x", ("x2", 21)).unwrap();
        assert_eq!(
            dict(desc.to_dict(&a)),
            json!({"field": "x2", "default": 21, "units": "data"})
        );
        assert_eq!(dict(desc.to_dict(&b)), json!({"value": 14, "units": "data"}));

        b.set("x", json!({"field": "x3", "units": "screen", "default": 25}))
            .unwrap();
        assert_eq!(
            dict(desc.to_dict(&a)),
            json!({"field": "x2", "default": 21, "units": "data"})
        );
        assert_eq!(
            dict(desc.to_dict(&b)),
            json!({"field": "x3", "units": "screen", "default": 25})
        );
    }

    #[test]
    fn test_object_set_does_not_merge_field() {
        let desc = Plain::descriptor("x").unwrap();
        let mut f = Plain::default();

        f.set("x", json!({"field": "x3", "units": "screen"})).unwrap();
        assert_eq!(dict(desc.to_dict(&f)), json!({"field": "x3", "units": "screen"}));

        f.set("x", json!({"units": "screen"})).unwrap();
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"field": "xfield", "units": "screen"})
        );

        f.set("x", json!({"default": 5})).unwrap();
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"field": "xfield", "default": 5, "units": "data"})
        );
    }

    #[test]
    fn test_malformed_values_rejected() {
        let mut f = Plain::default();
        assert!(f.set("x", json!({"value": 1, "units": "pixels"})).is_err());
        assert!(f.set("x", json!({"colour": 1})).is_err());
        assert!(f.set("x", [1, 2, 3]).is_err());
        assert!(f.set("x", json!({"field": null})).is_err());
        assert!(!f.is_set("x"));
    }
}

mod color_spec {
    use super::*;

    #[derive(HasProps, Default)]
    #[props(col = ColorSpec::new("colorfield"))]
    struct Plain {
        store: PropertyStore,
    }

    #[derive(HasProps, Default)]
    #[props(col = ColorSpec::new("colorfield").with_default("red"))]
    struct RedDefault {
        store: PropertyStore,
    }

    #[derive(HasProps, Default)]
    #[props(col = ColorSpec::new("colorfield").with_default(json!([128, 255, 124])))]
    struct TupleDefault {
        store: PropertyStore,
    }

    #[derive(HasProps, Default)]
    #[props(col = ColorSpec::new("gray"))]
    struct Fixed {
        store: PropertyStore,
    }

    #[derive(HasProps, Default)]
    #[props(col = ColorSpec::new("colorfield").with_default("blue"))]
    struct BlueDefault {
        store: PropertyStore,
    }

    #[test]
    fn test_field() {
        let desc = Plain::descriptor(Plain::COL).unwrap();
        let mut f = Plain::default();
        assert_eq!(f.get("col").unwrap(), json!("colorfield"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"field": "colorfield"}));

        f.set("col", "myfield").unwrap();
        assert_eq!(f.get("col").unwrap(), json!("myfield"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"field": "myfield"}));
    }

    #[test]
    fn test_field_default() {
        let desc = RedDefault::descriptor("col").unwrap();
        let mut f = RedDefault::default();
        assert_eq!(
            f.get("col").unwrap(),
            json!({"field": "colorfield", "default": "red"})
        );
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"field": "colorfield", "default": "red"})
        );

        f.set("col", "myfield").unwrap();
        assert_eq!(f.get("col").unwrap(), json!({"field": "myfield", "default": "red"}));
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"field": "myfield", "default": "red"})
        );
    }

    #[test]
    fn test_default_tuple() {
        let desc = TupleDefault::descriptor("col").unwrap();
        let f = TupleDefault::default();
        assert_eq!(
            f.get("col").unwrap(),
            json!({"field": "colorfield", "default": [128, 255, 124]})
        );
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"field": "colorfield", "default": "rgb(128, 255, 124)"})
        );
    }

    #[test]
    fn test_fixed_value() {
        let desc = Fixed::descriptor("col").unwrap();
        let f = Fixed::default();
        assert_eq!(f.get("col").unwrap(), json!("gray"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": "gray"}));
    }

    #[test]
    fn test_named_value() {
        let desc = Plain::descriptor("col").unwrap();
        let mut f = Plain::default();

        f.set("col", "red").unwrap();
        assert_eq!(f.get("col").unwrap(), json!("red"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": "red"}));

        f.set("col", "forestgreen").unwrap();
        assert_eq!(f.get("col").unwrap(), json!("forestgreen"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": "forestgreen"}));
    }

    #[test]
    fn test_named_value_set_none() {
        let desc = Plain::descriptor("col").unwrap();
        let mut f = Plain::default();
        f.set("col", Value::Null).unwrap();
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": null}));
    }

    #[test]
    fn test_named_color_overriding_default() {
        let desc = BlueDefault::descriptor("col").unwrap();
        let mut f = BlueDefault::default();

        f.set("col", "forestgreen").unwrap();
        assert_eq!(f.get("col").unwrap(), json!("forestgreen"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": "forestgreen"}));

        f.set("col", "myfield").unwrap();
        assert_eq!(
            f.get("col").unwrap(),
            json!({"field": "myfield", "default": "blue"})
        );
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"field": "myfield", "default": "blue"})
        );
    }

    #[test]
    fn test_hex_value() {
        let desc = Plain::descriptor("col").unwrap();
        let mut f = Plain::default();

        f.set("col", "#FF004A").unwrap();
        assert_eq!(f.get("col").unwrap(), json!("#FF004A"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": "#FF004A"}));

        f.set("col", "myfield").unwrap();
        assert_eq!(f.get("col").unwrap(), json!("myfield"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"field": "myfield"}));
    }

    #[test]
    fn test_tuple_value() {
        let desc = Plain::descriptor("col").unwrap();
        let mut f = Plain::default();

        f.set("col", (128, 200, 255)).unwrap();
        assert_eq!(f.get_as::<(u8, u8, u8)>("col").unwrap(), (128, 200, 255));
        assert_eq!(dict(desc.to_dict(&f)), json!({"value": "rgb(128, 200, 255)"}));

        f.set("col", "myfield").unwrap();
        assert_eq!(f.get("col").unwrap(), json!("myfield"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"field": "myfield"}));

        f.set("col", (100, 150, 200, 0.5)).unwrap();
        assert_eq!(f.get("col").unwrap(), json!([100, 150, 200, 0.5]));
        assert_eq!(
            dict(desc.to_dict(&f)),
            json!({"value": "rgba(100, 150, 200, 0.5)"})
        );
    }

    #[test]
    fn test_set_dict() {
        let desc = Plain::descriptor("col").unwrap();
        let mut f = Plain::default();

        f.set("col", json!({"field": "myfield", "default": "#88FF00"}))
            .unwrap();
        assert_eq!(
            f.get("col").unwrap(),
            json!({"field": "myfield", "default": "#88FF00"})
        );

        f.set("col", "field2").unwrap();
        assert_eq!(f.get("col").unwrap(), json!("field2"));
        assert_eq!(dict(desc.to_dict(&f)), json!({"field": "field2"}));
    }

    #[test]
    fn test_numbers_rejected() {
        let mut f = Plain::default();
        assert!(f.set("col", 12).is_err());
        assert!(f.set("col", (1, 2)).is_err());
        assert!(f.set("col", json!({"field": null})).is_err());
        assert_eq!(f.get("col").unwrap(), json!("colorfield"));
    }
}

mod serialization {
    use super::*;

    #[derive(HasProps, Default)]
    #[props(
        name = Str::new("glyph"),
        size = DataSpec::new("size").with_units(Units::Screen),
        fill = ColorSpec::new("fill_color").with_default("navy"),
    )]
    struct Glyph {
        store: PropertyStore,
    }

    #[test]
    fn test_to_json() {
        let mut g = Glyph::default();
        g.set("size", 8).unwrap();
        assert_eq!(
            g.to_json(),
            json!({
                "name": "glyph",
                "size": {"value": 8, "units": "screen"},
                "fill": {"field": "fill_color", "default": "navy"},
            })
        );
    }

    #[test]
    fn test_non_spec_descriptor_has_no_dict() {
        let g = Glyph::default();
        assert!(Glyph::descriptor("name").unwrap().to_dict(&g).is_none());
        assert!(Glyph::descriptor("missing").is_none());
    }
}
