//! Function table: template names mapped to native functions.
//!
//! A table is assembled once at host setup and shared read-only afterwards.
//! Every entry carries its [`Arity`], so dispatch rejects a wrong argument
//! count before the function body runs.

use std::collections::BTreeMap;
use std::fmt;

use tplmath_foundation::{Arity, Error, Result, Value, to_float64, to_int, to_int64, to_number};
use tracing::{debug, trace};

use crate::config::TableConfig;
use crate::{arithmetic, convert, math};

/// Signature shared by every template function.
pub type NativeFnPtr = fn(&[Value]) -> Result<Value>;

/// A registered template function.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Name the function is registered under.
    pub name: &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// Function pointer.
    pub func: NativeFnPtr,
}

impl NativeFn {
    /// Creates a new native function entry.
    #[must_use]
    pub const fn new(name: &'static str, arity: Arity, func: NativeFnPtr) -> Self {
        Self { name, arity, func }
    }

    /// Calls the function after checking the argument count.
    ///
    /// Errors are tagged with this entry's name unless the function already
    /// tagged them with a more precise site.
    ///
    /// # Errors
    ///
    /// Returns an arity mismatch, or whatever the function itself returns.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        if !self.arity.accepts(args.len()) {
            return Err(Error::arity_mismatch(self.arity, args.len()).in_function(self.name));
        }
        (self.func)(args).map_err(|e| e.in_function(self.name))
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

/// Name-to-function registry.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    entries: BTreeMap<&'static str, NativeFn>,
}

impl FunctionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with every function group and alias registered.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Creates a table with the groups selected by `config`.
    #[must_use]
    pub fn with_config(config: TableConfig) -> Self {
        let mut table = Self::new();
        if config.conversions {
            table.extend(conversions());
        }
        if config.arithmetic {
            table.extend(arithmetic_fns());
        }
        if config.math {
            table.extend(math_fns());
        }
        if config.constants {
            table.extend(constants());
        }
        if config.aliases {
            table.register_alias("biggest", "max");
            table.register_alias("double", "float64");
        }
        table
    }

    /// Registers a function, replacing any entry with the same name.
    ///
    /// Returns the replaced entry, if any.
    pub fn register(&mut self, func: NativeFn) -> Option<NativeFn> {
        self.entries.insert(func.name, func)
    }

    /// Registers `alias` as another name for `target`.
    ///
    /// Returns false, registering nothing, if `target` is not in the table.
    pub fn register_alias(&mut self, alias: &'static str, target: &str) -> bool {
        let Some(entry) = self.entries.get(target).copied() else {
            return false;
        };
        self.register(NativeFn { name: alias, ..entry });
        true
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NativeFn> {
        self.entries.get(name)
    }

    /// Returns true if a function is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Calls the function registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns an unknown function error, an arity mismatch, or the
    /// function's own error.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let Some(func) = self.get(name) else {
            debug!(function = name, "unknown function");
            return Err(Error::unknown_function(name));
        };
        trace!(function = func.name, args = args.len(), "dispatch");
        func.call(args)
            .inspect_err(|err| {
                debug!(function = func.name, coercion = err.is_coercion(), error = %err, "call failed");
            })
    }

    /// Overlays this table onto `base`; entries from `self` win on conflict.
    #[must_use]
    pub fn overlay(self, mut base: Self) -> Self {
        base.extend(self.entries.into_values());
        base
    }

    /// Returns all registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Returns the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no functions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &NativeFn> {
        self.entries.values()
    }
}

impl Extend<NativeFn> for FunctionTable {
    fn extend<I: IntoIterator<Item = NativeFn>>(&mut self, iter: I) {
        for func in iter {
            self.register(func);
        }
    }
}

// Argument destructuring. Dispatch has already checked the arity; these
// still fail cleanly if a function is registered with the wrong one.

fn none(args: &[Value]) -> Result<()> {
    match args {
        [] => Ok(()),
        _ => Err(Error::arity_mismatch(Arity::Exact(0), args.len())),
    }
}

fn one(args: &[Value]) -> Result<&Value> {
    match args {
        [a] => Ok(a),
        _ => Err(Error::arity_mismatch(Arity::Exact(1), args.len())),
    }
}

fn two(args: &[Value]) -> Result<(&Value, &Value)> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(Error::arity_mismatch(Arity::Exact(2), args.len())),
    }
}

fn variadic(args: &[Value]) -> Result<(&Value, &[Value])> {
    match args {
        [first, rest @ ..] => Ok((first, rest)),
        [] => Err(Error::arity_mismatch(Arity::Variadic(1), 0)),
    }
}

fn conversions() -> Vec<NativeFn> {
    vec![
        NativeFn::new("int", Arity::Exact(1), |args| {
            Ok(Value::from(to_int(one(args)?)?))
        }),
        NativeFn::new("int64", Arity::Exact(1), |args| {
            Ok(Value::from(to_int64(one(args)?)?))
        }),
        NativeFn::new("atoi", Arity::Exact(1), |args| {
            Ok(Value::from(convert::atoi(one(args)?)?))
        }),
        NativeFn::new("float64", Arity::Exact(1), |args| {
            Ok(Value::from(to_float64(one(args)?)?))
        }),
        NativeFn::new("number", Arity::Exact(1), |args| {
            Ok(Value::from(to_number(one(args)?)?))
        }),
    ]
}

fn arithmetic_fns() -> Vec<NativeFn> {
    vec![
        NativeFn::new("add", Arity::Variadic(1), |args| {
            let (first, rest) = variadic(args)?;
            Ok(Value::from(arithmetic::add(first, rest)?))
        }),
        NativeFn::new("mul", Arity::Variadic(1), |args| {
            let (first, rest) = variadic(args)?;
            Ok(Value::from(arithmetic::mul(first, rest)?))
        }),
        NativeFn::new("max", Arity::Variadic(1), |args| {
            let (first, rest) = variadic(args)?;
            Ok(Value::from(arithmetic::max(first, rest)?))
        }),
        NativeFn::new("min", Arity::Variadic(1), |args| {
            let (first, rest) = variadic(args)?;
            Ok(Value::from(arithmetic::min(first, rest)?))
        }),
        NativeFn::new("sub", Arity::Exact(2), |args| {
            let (a, b) = two(args)?;
            Ok(Value::from(arithmetic::sub(a, b)?))
        }),
        NativeFn::new("div", Arity::Exact(2), |args| {
            let (a, b) = two(args)?;
            Ok(Value::from(arithmetic::div(a, b)?))
        }),
        NativeFn::new("mod", Arity::Exact(2), |args| {
            let (a, b) = two(args)?;
            Ok(Value::from(arithmetic::modulo(a, b)?))
        }),
        NativeFn::new("add1", Arity::Exact(1), |args| {
            Ok(Value::from(arithmetic::add1(one(args)?)?))
        }),
        NativeFn::new("ceil", Arity::Exact(1), |args| {
            Ok(Value::from(arithmetic::ceil(one(args)?)?))
        }),
        NativeFn::new("floor", Arity::Exact(1), |args| {
            Ok(Value::from(arithmetic::floor(one(args)?)?))
        }),
        NativeFn::new("round", Arity::Exact(1), |args| {
            Ok(Value::from(arithmetic::round(one(args)?)?))
        }),
    ]
}

macro_rules! unary_entries {
    ($($name:ident),* $(,)?) => {
        vec![$(
            NativeFn::new(stringify!($name), Arity::Exact(1), |args| {
                Ok(Value::from(math::$name(one(args)?)?))
            }),
        )*]
    };
}

macro_rules! binary_entries {
    ($($name:ident),* $(,)?) => {
        vec![$(
            NativeFn::new(stringify!($name), Arity::Exact(2), |args| {
                let (a, b) = two(args)?;
                Ok(Value::from(math::$name(a, b)?))
            }),
        )*]
    };
}

fn math_fns() -> Vec<NativeFn> {
    let mut fns = unary_entries![
        sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh, exp, exp2, expm1,
        log, log10, log1p, log2, logb, sqrt, cbrt, erf, erfc, erfinv, gamma, trunc, ilogb,
        signbit, inf, pow10, degrees, radians,
    ];
    fns.extend(binary_entries![atan2, hypot, pow, copysign]);
    fns
}

fn constants() -> Vec<NativeFn> {
    vec![
        NativeFn::new("pi", Arity::Exact(0), |args| {
            none(args)?;
            Ok(Value::from(math::pi()))
        }),
        NativeFn::new("e", Arity::Exact(0), |args| {
            none(args)?;
            Ok(Value::from(math::e()))
        }),
    ]
}
