/// Declares a closed attribute enumeration together with its legacy data
/// value and its lowercase name. Both mappings are written out per variant so
/// the data values never depend on declaration order.
macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($data:literal, $string:literal),
            )+
        }
    ) => (
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn data(self) -> u16 {
                match self {
                    $($name::$variant => $data,)+
                }
            }

            pub fn from_data(data: u16) -> Option<$name> {
                match data {
                    $($data => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_string(self) -> &'static str {
                match self {
                    $($name::$variant => $string,)+
                }
            }

            pub fn from_string(val: &str) -> Option<$name> {
                match val {
                    $($string => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_string())
            }
        }
    );
}

/// Declares a durability-keyed item family. Items carry no attributes besides
/// their accumulated damage, so the whole family is a handful of constants.
macro_rules! durable_item {
    (
        $(#[$meta:meta])*
        $name:ident {
            id: $id:expr,
            namespaced_id: $nsid:expr,
            base_name: $base:expr,
            max_durability: $max:expr,
        }
    ) => (
        $(#[$meta])*
        pub enum $name {}

        impl $crate::codec::AttributeCodec for $name {
            type Attributes = $crate::attribute::Durability;
            const CODE_BITS: u32 = $crate::codec::WIDE;

            fn encode(
                attributes: &$crate::attribute::Durability,
            ) -> Result<$crate::codec::VariantCode, $crate::codec::CodecError> {
                $crate::family::tool::encode_durability::<$name>(*attributes)
            }

            fn decode(
                code: $crate::codec::VariantCode,
            ) -> Result<$crate::attribute::Durability, $crate::codec::CodecError> {
                $crate::family::tool::decode_durability::<$name>(code)
            }
        }

        impl $crate::codec::Family for $name {
            const ID: u16 = $id;
            const NAMESPACED_ID: &'static str = $nsid;
            const HARDNESS: f32 = 0.0;
            const BLAST_RESISTANCE: f32 = 0.0;

            fn domain() -> Vec<$crate::attribute::Durability> {
                vec![$crate::attribute::Durability::UNDAMAGED]
            }

            fn variant_name(attributes: &$crate::attribute::Durability) -> String {
                $crate::family::tool::durability_name::<$name>(*attributes)
            }
        }

        impl $crate::codec::DurableFamily for $name {
            const BASE_NAME: &'static str = $base;
            const MAX_DURABILITY: u16 = $max;
        }
    );
}
