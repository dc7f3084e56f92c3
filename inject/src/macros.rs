//! Macros for declaring injection targets and injecting several of them at once.
//!
//! - [`injectable!`]: defines a struct and implements [`Injectable`](crate::Injectable) for it.
//! - [`inject!`]: injects a list of heterogeneous targets in argument order.
//!
//! # Example
//! ```
//! use inject::{inject, injectable, Injector, Shared};
//!
//! pub struct Connection {
//!     pub dsn: String,
//! }
//!
//! injectable! {
//!     pub struct Repository {
//!         #[inject("Connection")]
//!         pub connection: Option<Shared<Connection>>,
//!         pub table: &'static str,
//!     }
//! }
//!
//! let mut injector = Injector::new();
//! injector.provide_object(
//!     "Connection",
//!     Some(Shared::new(Connection { dsn: "sqlite::memory:".into() })),
//! );
//!
//! let mut users = Repository { connection: None, table: "users" };
//! let mut posts = Repository { connection: None, table: "posts" };
//! inject!(injector; &mut users, &mut posts).unwrap();
//!
//! assert_eq!(users.connection.unwrap().dsn, "sqlite::memory:");
//! assert!(posts.connection.is_some());
//! ```

/// Defines a struct whose fields can be injected.
///
/// - `#[inject("Name")]` marks a field resolved by an explicit name.
/// - `#[inject]` marks a field resolved by its declared type (see [`name_of`](crate::name_of)).
/// - Fields without a marker are never touched.
/// - Other field attributes, doc comments included, are kept on the generated field.
/// - `struct Name: Settable { .. }` routes assignments through the type's
///   [`Settable`](crate::Settable) implementation first.
///
/// Field visibility is kept as written. A marked field that is not `pub` can only
/// be filled through a setter.
#[macro_export]
macro_rules! injectable {
    // First `inject` attribute of a field, if any.
    (@marker) => {
        ::core::option::Option::None
    };
    (@marker [inject] $($rest:tt)*) => {
        ::core::option::Option::Some("")
    };
    (@marker [inject ($tag:literal)] $($rest:tt)*) => {
        ::core::option::Option::Some($tag)
    };
    (@marker [$($other:tt)*] $($rest:tt)*) => {
        $crate::injectable!(@marker $($rest)*)
    };

    // Rebuilds the struct one field at a time, dropping `inject` attributes.
    (@struct { $($head:tt)* } [$($out:tt)*]) => {
        $($head)* { $($out)* }
    };
    (@struct $head:tt [$($out:tt)*]
        { [] [$($keep:tt)*] $fvis:vis $field:ident : $ty:ty } $($rest:tt)*
    ) => {
        $crate::injectable!(@struct $head [$($out)* $($keep)* $fvis $field: $ty,] $($rest)*);
    };
    (@struct $head:tt $out:tt
        { [[inject $($marker:tt)*] $($attrs:tt)*] [$($keep:tt)*] $($field:tt)* } $($rest:tt)*
    ) => {
        $crate::injectable!(@struct $head $out { [$($attrs)*] [$($keep)*] $($field)* } $($rest)*);
    };
    (@struct $head:tt $out:tt
        { [[$($attr:tt)*] $($attrs:tt)*] [$($keep:tt)*] $($field:tt)* } $($rest:tt)*
    ) => {
        $crate::injectable!(
            @struct $head $out { [$($attrs)*] [$($keep)* #[$($attr)*]] $($field)* } $($rest)*
        );
    };

    (@settable $this:tt Settable) => {
        ::core::option::Option::Some($this as &mut dyn $crate::Settable)
    };

    (
        $(#[$attr:meta])*
        $svis:vis struct $name:ident $(: $capability:ident)? {
            $(
                $(#[$($fattr:tt)*])*
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $crate::injectable!(
            @struct { $(#[$attr])* $svis struct $name } []
            $({ [$([$($fattr)*])*] [] $fvis $field : $ty })*
        );

        impl $crate::Injectable for $name {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::Record(::std::vec![
                    $(
                        $crate::Field {
                            name: ::core::stringify!($field),
                            type_name: $crate::name_of::<$ty>(),
                            visibility: $crate::Visibility::from_keyword(::core::stringify!($fvis)),
                            marker: $crate::injectable!(@marker $([$($fattr)*])*),
                        },
                    )*
                ])
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                field: &str,
                value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::Value> {
                $(
                    if field == ::core::stringify!($field) {
                        return value.downcast::<$ty>().map(|value| self.$field = *value);
                    }
                )*
                ::core::result::Result::Err(value)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            $(
                fn settable(&mut self) -> ::core::option::Option<&mut dyn $crate::Settable> {
                    $crate::injectable!(@settable self $capability)
                }
            )?
        }
    };
}

/// Injects every given target in order, stopping at the first error.
///
/// Expands to [`Injector::inject`](crate::Injector::inject) over a slice of
/// `&mut dyn Injectable`, so targets of different types can be mixed.
#[macro_export]
macro_rules! inject {
    ($injector:expr; $($object:expr),+ $(,)?) => {
        $injector.inject(&mut [$($object as &mut dyn $crate::Injectable),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Field, Injectable, Settable, Shape, Value, Visibility, name_of};

    injectable! {
        #[derive(Default)]
        struct Plain {
            label: String,
        }
    }

    injectable! {
        #[derive(Default)]
        pub struct Marked {
            #[inject("Label")]
            pub label: String,
            #[inject]
            pub count: u32,
            #[inject]
            secret: u64,
            pub(crate) note: String,
        }
    }

    injectable! {
        #[derive(Default)]
        struct WithSetter: Settable {
            #[inject("Limit")]
            limit: u32,
        }
    }

    injectable! {
        /// Documented target.
        #[derive(Default)]
        struct Documented {
            /// Where the endpoint lives.
            #[inject("Endpoint")]
            pub endpoint: String,
            /// Retries before giving up.
            #[allow(dead_code)]
            pub retries: u8,
            #[allow(dead_code)]
            /// Resolved by type.
            #[inject]
            pub port: u16,
        }
    }

    impl Settable for WithSetter {
        fn has_setter(&self, field: &str) -> bool {
            field == "limit"
        }

        fn set(&mut self, _field: &str, value: Value) -> Result<(), Value> {
            let limit = value.downcast::<u32>()?;
            self.limit = *limit * 10;
            Ok(())
        }
    }

    fn fields(target: &dyn Injectable) -> Vec<Field> {
        match target.shape() {
            Shape::Record(fields) => fields,
            Shape::Value => panic!("expected a record"),
        }
    }

    #[test]
    fn test_unmarked_struct_has_no_injectable_fields() {
        let fields = fields(&Plain::default());
        assert_eq!(fields.len(), 1);
        assert!(!fields[0].is_injectable());
    }

    #[test]
    fn test_fields_are_listed_in_declaration_order() {
        let names: Vec<&str> = fields(&Marked::default()).iter().map(|f| f.name).collect();
        assert_eq!(names, ["label", "count", "secret", "note"]);
    }

    #[test]
    fn test_markers_and_visibility_are_captured() {
        let fields = fields(&Marked::default());

        assert_eq!(fields[0].marker, Some("Label"));
        assert_eq!(fields[0].resolution_name(), Some("Label"));
        assert!(fields[0].visibility.is_public());

        assert_eq!(fields[1].marker, Some(""));
        assert_eq!(fields[1].resolution_name(), Some("u32"));
        assert_eq!(fields[1].type_name, name_of::<u32>());

        assert_eq!(fields[2].resolution_name(), Some("u64"));
        assert!(fields[2].visibility == Visibility::Private);

        assert_eq!(fields[3].marker, None);
        assert!(fields[3].visibility == Visibility::Private);
    }

    #[test]
    fn test_field_attributes_pass_through_around_markers() {
        let fields = fields(&Documented::default());
        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["endpoint", "retries", "port"]);

        assert_eq!(fields[0].marker, Some("Endpoint"));
        assert_eq!(fields[1].marker, None);
        assert!(!fields[1].is_injectable());
        assert_eq!(fields[2].marker, Some(""));
        assert_eq!(fields[2].resolution_name(), Some("u16"));

        let mut documented = Documented::default();
        assert!(documented.assign("endpoint", Box::new(String::from("db:5432"))).is_ok());
        assert!(documented.assign("port", Box::new(5432u16)).is_ok());
        assert_eq!(documented.endpoint, "db:5432");
        assert_eq!(documented.port, 5432);
        assert_eq!(documented.retries, 0);
    }

    #[test]
    fn test_assign_writes_matching_type() {
        let mut marked = Marked::default();

        assert!(marked.assign("count", Box::new(9u32)).is_ok());
        assert!(marked.assign("label", Box::new(String::from("x"))).is_ok());

        assert_eq!(marked.count, 9);
        assert_eq!(marked.label, "x");
    }

    #[test]
    fn test_assign_hands_back_mismatched_value() {
        let mut marked = Marked::default();

        let value = marked.assign("count", Box::new("nine")).unwrap_err();

        assert_eq!(*value.downcast_ref::<&str>().unwrap(), "nine");
        assert_eq!(marked.count, 0);
    }

    #[test]
    fn test_assign_rejects_unknown_field() {
        let mut marked = Marked::default();
        assert!(marked.assign("missing", Box::new(1u32)).is_err());
    }

    #[test]
    fn test_settable_capability_is_exposed() {
        let mut with_setter = WithSetter::default();
        let settable = with_setter.settable().unwrap();

        assert!(settable.has_setter("limit"));
        assert!(settable.set("limit", Box::new(3u32)).is_ok());
        assert_eq!(with_setter.limit, 30);

        assert!(Marked::default().settable().is_none());
    }
}
