//! Macros for declaring automaton states.

/// Generate a State trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use moodstack::state_enum;
/// use moodstack::core::State;
///
/// state_enum! {
///     pub enum Reader {
///         Idle,
///         Reading,
///         Accepted,
///     }
///     final: [Accepted]
/// }
///
/// assert!(Reader::Accepted.is_final());
/// assert_eq!(Reader::Idle.name(), "Idle");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
