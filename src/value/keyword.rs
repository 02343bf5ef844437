//! `keyword_enum!`: closed sets of CSS keywords with lenient parsing.
//!
//! Generates the enum plus `ALL`, `as_str`, `from_keyword`, `Display`,
//! `Default`, serde impls and a [`Normalize`](crate::value::Normalize) impl
//! that maps unknown or missing keywords to the default variant.
//!
//! Aliases listed after `|` are accepted on input but never emitted.

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $kw:literal $(| $alias:literal)*
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The keyword as stored in the design document.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $kw,)+
                }
            }

            /// Parse a keyword or alias, ignoring ASCII case and surrounding whitespace.
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                let keyword = keyword.trim();
                $(
                    if keyword.eq_ignore_ascii_case($kw)
                        $(|| keyword.eq_ignore_ascii_case($alias))*
                    {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(<$name as $crate::value::Normalize>::normalize(&raw))
            }
        }

        impl $crate::value::Normalize for $name {
            fn normalize(raw: &::serde_json::Value) -> Self {
                if let Some(parsed) = raw.as_str().and_then($name::from_keyword) {
                    return parsed;
                }
                if !raw.is_null() {
                    ::tracing::debug!(
                        value = %raw,
                        kind = stringify!($name),
                        "unrecognized keyword, using default"
                    );
                }
                $name::default()
            }
        }
    };
}
