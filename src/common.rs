// Default URLs
pub static DEFAULT_API_URL: &str = "https://api.stripe.com";

// Header names
pub static IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";
pub static STRIPE_ACCOUNT_HEADER: &str = "Stripe-Account";
pub static API_VERSION_HEADER: &str = "Stripe-Version";
pub static REQUEST_ID_HEADER: &str = "Request-Id";

/// Declares a closed set of string constants exchanged with the API.
///
/// Each variant is bound to its wire value, which is used for (de)serialization,
/// `Display`, `FromStr` and when the value is placed in a request parameter bag.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(::serde::Serialize, ::serde::Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Value of this constant as sent over the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err($crate::error::UnknownVariantError {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for $crate::params::ParamValue {
            fn from(value: $name) -> Self {
                $crate::params::ParamValue::String(value.as_str().to_string())
            }
        }
    };
}

pub(crate) use api_enum;
