use thiserror::Error;

/// Configuration problems detected while setting up the player module.
///
/// All of these are raised before the first poll so a broken configuration
/// is reported immediately instead of silently hiding the module.
#[derive(Error, Debug)]
pub enum ModuleError {
    /// The layout names a widget the module does not provide
    #[error("the player module does not have a '{token}' widget")]
    UnknownWidget {
        /// Offending layout token as written
        token: String,
    },

    /// The layout lists the same widget more than once
    #[error("widget '{name}' appears more than once in the layout")]
    DuplicateWidget {
        /// Canonical widget name
        name: String,
    },

    /// The format template references a field that does not exist
    #[error("unknown placeholder '{{{name}}}' in format template")]
    UnknownPlaceholder {
        /// Placeholder name as written
        name: String,
    },

    /// The format template contains `{}` or `{:...}`
    #[error("empty placeholder at byte {position} in format template")]
    EmptyPlaceholder {
        /// Byte offset of the opening brace
        position: usize,
    },

    /// A single `{` or `}` that is neither escaped nor part of a placeholder
    #[error("unbalanced '{brace}' at byte {position} in format template")]
    UnbalancedBrace {
        /// The stray brace
        brace: char,
        /// Byte offset of the brace
        position: usize,
    },

    /// The part after `:` in a placeholder is not understood
    #[error("invalid format spec '{spec}' for placeholder '{name}'")]
    InvalidFormatSpec {
        /// Placeholder name
        name: String,
        /// Spec as written
        spec: String,
    },

    /// Internal template pattern failed to compile
    #[error("template pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
