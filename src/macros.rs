//! Macro for declaring lifecycle phase enums.

/// Declare a phase enum with wire labels and generate its `State` impl.
///
/// Each variant is paired with the label used in logs, error messages and
/// its serialized form. An optional `default:` names the variant returned by
/// `Default::default`.
///
/// # Example
///
/// ```
/// use quizflow::status_enum;
/// use quizflow::core::State;
///
/// status_enum! {
///     pub enum UploadStatus {
///         Queued => "queued",
///         Sending => "sending",
///         Sent => "sent",
///         Rejected => "rejected",
///     }
///     final: [Sent, Rejected]
///     error: [Rejected]
///     default: Queued
/// }
///
/// assert_eq!(UploadStatus::default(), UploadStatus::Queued);
/// assert_eq!(UploadStatus::Queued.name(), "queued");
/// assert!(UploadStatus::Rejected.is_error());
/// assert_eq!(UploadStatus::Sending.to_string(), "sending");
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
        $(default: $default:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }

        $(
            impl ::std::default::Default for $name {
                fn default() -> Self {
                    Self::$default
                }
            }
        )?
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    status_enum! {
        enum Light {
            Red => "red",
            Amber => "amber",
            Green => "green",
            Broken => "broken",
        }
        final: [Broken]
        error: [Broken]
        default: Red
    }

    #[test]
    fn status_enum_default_arm() {
        assert_eq!(Light::default(), Light::Red);
    }

    #[test]
    fn status_enum_generates_trait() {
        assert_eq!(Light::Red.name(), "red");
        assert!(!Light::Green.is_final());
        assert!(Light::Broken.is_final());
        assert!(Light::Broken.is_error());
        assert!(!Light::Amber.is_error());
    }

    #[test]
    fn status_enum_serializes_with_labels() {
        assert_eq!(serde_json::to_string(&Light::Amber).unwrap(), "\"amber\"");
        let back: Light = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(back, Light::Green);
    }

    #[test]
    fn status_enum_works_without_final_error() {
        status_enum! {
            enum Toggle {
                On => "on",
                Off => "off",
            }
        }

        assert!(!Toggle::On.is_final());
        assert!(!Toggle::Off.is_error());
        assert_eq!(Toggle::Off.to_string(), "off");
    }
}
