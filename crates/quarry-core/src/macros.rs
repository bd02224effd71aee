/// Declare a static [`TypeModel`](crate::shape::TypeModel) for one type.
///
/// ```ignore
/// type_model! {
///     static CUSTOMER_MODEL: "app::Customer" {
///         id: FieldKind::Ulid,
///         age: FieldKind::Int,
///         name: FieldKind::Text,
///     }
/// }
/// ```
#[macro_export]
macro_rules! type_model {
    (
        $vis:vis static $ident:ident: $path:literal {
            $( $field:ident: $kind:expr ),* $(,)?
        }
    ) => {
        $vis static $ident: $crate::shape::TypeModel = $crate::shape::TypeModel {
            path: $path,
            fields: &[
                $(
                    $crate::shape::FieldModel {
                        name: stringify!($field),
                        kind: $kind,
                    },
                )*
            ],
        };
    };
}
