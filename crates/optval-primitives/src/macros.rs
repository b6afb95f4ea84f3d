///
/// Scalar Kind Registry
///
/// Single source of truth for every scalar kind an optional can wrap.
/// Entry order is registry order; `ALL_SCALAR_KINDS` follows it.
///

#[macro_export]
macro_rules! scalar_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Blob,
                Blob,
                is_numeric = false,
                is_signed = false
            ),
            (
                Bool,
                Bool,
                is_numeric = false,
                is_signed = false
            ),
            (
                Char,
                Text,
                is_numeric = false,
                is_signed = false
            ),
            (
                Float32,
                Float,
                is_numeric = true,
                is_signed = true
            ),
            (
                Float64,
                Float,
                is_numeric = true,
                is_signed = true
            ),
            (
                Int8,
                Integer,
                is_numeric = true,
                is_signed = true
            ),
            (
                Int16,
                Integer,
                is_numeric = true,
                is_signed = true
            ),
            (
                Int32,
                Integer,
                is_numeric = true,
                is_signed = true
            ),
            (
                Int64,
                Integer,
                is_numeric = true,
                is_signed = true
            ),
            (
                Int128,
                Integer,
                is_numeric = true,
                is_signed = true
            ),
            (
                Isize,
                Integer,
                is_numeric = true,
                is_signed = true
            ),
            (
                Text,
                Text,
                is_numeric = false,
                is_signed = false
            ),
            (
                Uint8,
                Integer,
                is_numeric = true,
                is_signed = false
            ),
            (
                Uint16,
                Integer,
                is_numeric = true,
                is_signed = false
            ),
            (
                Uint32,
                Integer,
                is_numeric = true,
                is_signed = false
            ),
            (
                Uint64,
                Integer,
                is_numeric = true,
                is_signed = false
            ),
            (
                Uint128,
                Integer,
                is_numeric = true,
                is_signed = false
            ),
            (
                Usize,
                Integer,
                is_numeric = true,
                is_signed = false
            ),
        }
    };
}

#[macro_export]
macro_rules! scalar_kind_registry {
    ($macro:ident) => {
        $crate::scalar_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::scalar_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, $family:ident, is_numeric = $is_numeric:expr, is_signed = $is_signed:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => $crate::ScalarMetadata {
                    family: $crate::ScalarFamily::$family,
                    is_numeric: $is_numeric,
                    is_signed: $is_signed,
                },
            )*
        }
    };
}

macro_rules! name_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, $family:ident, is_numeric = $is_numeric:expr, is_signed = $is_signed:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => stringify!($scalar),
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($scalar:ident, $family:ident, is_numeric = $is_numeric:expr, is_signed = $is_signed:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
}
