///
/// Scalar Registry
///
/// Binds every `ScalarKind` to the Rust type an optional wraps for it and
/// to the public alias of that instantiation. Entries must follow
/// `ALL_SCALAR_KINDS` order.
///

macro_rules! scalar_registry_entries {
    ($macro:ident) => {
        $macro! {
            (Blob, $crate::types::Blob, OptBlob),
            (Bool, bool, OptBool),
            (Char, char, OptChar),
            (Float32, $crate::types::Float32, OptFloat32),
            (Float64, $crate::types::Float64, OptFloat64),
            (Int8, i8, OptInt8),
            (Int16, i16, OptInt16),
            (Int32, i32, OptInt32),
            (Int64, i64, OptInt64),
            (Int128, i128, OptInt128),
            (Isize, isize, OptIsize),
            (Text, String, OptText),
            (Uint8, u8, OptUint8),
            (Uint16, u16, OptUint16),
            (Uint32, u32, OptUint32),
            (Uint64, u64, OptUint64),
            (Uint128, u128, OptUint128),
            (Usize, usize, OptUsize),
        }
    };
}
