mod blob;
mod float;
mod optional;

pub use blob::*;
pub use float::*;
pub use optional::*;

macro_rules! optional_aliases {
    ( $( ($kind:ident, $ty:ty, $alias:ident) ),* $(,)? ) => {
        $(
            #[doc = concat!("Optional `", stringify!($kind), "` scalar.")]
            pub type $alias = Optional<$ty>;
        )*
    };
}

scalar_registry_entries!(optional_aliases);
