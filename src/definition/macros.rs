//! Macros for declaring state sets.

/// Declare a state enum with explicit string values and derive its
/// [`State`](crate::core::State) implementation.
///
/// The display name of each state is the variant identifier; the value
/// is the string literal it is declared with. A `VARIANTS` constant
/// lists the states in declaration order.
///
/// # Example
///
/// ```
/// use stateset::state_set;
/// use stateset::core::State;
///
/// state_set! {
///     pub enum LockState {
///         Open = "open",
///         Locked = "locked",
///     }
/// }
///
/// assert_eq!(LockState::Open.name(), "Open");
/// assert_eq!(LockState::Open.value(), "open");
/// assert_eq!(LockState::VARIANTS.len(), 2);
/// ```
#[macro_export]
macro_rules! state_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn value(&self) -> &str {
                match self {
                    $(Self::$variant => $value),*
                }
            }
        }

        impl $name {
            /// All declared states, in declaration order.
            $vis const VARIANTS: &'static [$name] = &[$(Self::$variant),*];
        }
    };
}
