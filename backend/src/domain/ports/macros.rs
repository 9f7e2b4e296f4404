//! Generator for domain port error enums.
//!
//! `define_port_error!` emits a `thiserror` enum, one snake_case constructor
//! per variant taking `impl Into<_>` for each field, and a `kind` accessor
//! naming the variant for structured log fields.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = "Construct the `" $variant "` variant."]
                    pub fn [<$variant:snake>]($($($field: impl Into<$ty>),*)?) -> Self {
                        Self::$variant $( { $($field: $field.into()),* } )?
                    }
                )*

                /// Snake-case name of the variant, for log fields.
                #[must_use]
                pub fn kind(&self) -> &'static str {
                    match self {
                        $(Self::$variant { .. } => stringify!([<$variant:snake>]),)*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;
