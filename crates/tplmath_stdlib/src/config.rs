//! Configuration for function table assembly.

/// Selects which function groups a [`FunctionTable`](crate::FunctionTable)
/// registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// `int`, `int64`, `atoi`, `float64`, `number`.
    pub conversions: bool,

    /// `add`, `sub`, `mul`, `div`, `mod`, `max`, `min`, `add1`, `ceil`,
    /// `floor`, `round`.
    pub arithmetic: bool,

    /// Trigonometric, exponential, logarithmic and special functions.
    pub math: bool,

    /// The zero-argument `pi` and `e`.
    pub constants: bool,

    /// `biggest` for `max` and `double` for `float64`.
    ///
    /// An alias is only registered when its target's group is.
    pub aliases: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            conversions: true,
            arithmetic: true,
            math: true,
            constants: true,
            aliases: true,
        }
    }
}

impl TableConfig {
    /// Creates a configuration with every group disabled.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            conversions: false,
            arithmetic: false,
            math: false,
            constants: false,
            aliases: false,
        }
    }

    /// Creates a configuration with only the arithmetic primitives and their
    /// aliases.
    #[must_use]
    pub const fn arithmetic_only() -> Self {
        Self {
            arithmetic: true,
            aliases: true,
            ..Self::empty()
        }
    }

    /// Builder method to set the conversions group.
    #[must_use]
    pub const fn with_conversions(mut self, enabled: bool) -> Self {
        self.conversions = enabled;
        self
    }

    /// Builder method to set the arithmetic group.
    #[must_use]
    pub const fn with_arithmetic(mut self, enabled: bool) -> Self {
        self.arithmetic = enabled;
        self
    }

    /// Builder method to set the math group.
    #[must_use]
    pub const fn with_math(mut self, enabled: bool) -> Self {
        self.math = enabled;
        self
    }

    /// Builder method to set the constants group.
    #[must_use]
    pub const fn with_constants(mut self, enabled: bool) -> Self {
        self.constants = enabled;
        self
    }

    /// Builder method to set alias registration.
    #[must_use]
    pub const fn with_aliases(mut self, enabled: bool) -> Self {
        self.aliases = enabled;
        self
    }
}
