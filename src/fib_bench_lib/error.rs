use std::fmt::Display;

use crate::constants::ERROR_STYLE;
use crate::constants::HELP_STYLE;

/// The error context structure, provides an explanation and help.
///
/// The first element of the structure is the error's "context".
/// The second element is the help message displayed to the user.
///
/// Both have to implement [Display], and will be displayed when the error is
/// printed.
///
/// # Example
///
/// You can use this for example with two [String]s.
///
/// ```should_panic
/// # use fib_bench_lib::error::Ctx;
/// # use anyhow::anyhow;
/// # use anyhow::Result;
/// # use anyhow::Context;
/// # fn main() -> Result<()> {
/// Err(anyhow!("Any struct implementing std::error::Error")).context(Ctx("context", "help"))
/// # }
/// ```
#[derive(Debug)]
pub struct Ctx<A, B>(pub A, pub B)
where
    A: Display,
    B: Display;

impl<A: Display, B: Display> Display for Ctx<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !format!("{}", self.0).is_empty() {
            writeln!(f, "{}caused by:{:#} {}", ERROR_STYLE, ERROR_STYLE, self.0)?;
        }

        if !format!("{}", self.1).is_empty() {
            writeln!(f, "\n{}help:{:#} {}", HELP_STYLE, HELP_STYLE, self.1)?;
        }

        Ok(())
    }
}

/// This is a shorthand for returning the context of a error.
///
/// This macro takes a context message, a help message and formats them.
///
/// A macro invocation like so:
/// ```ignore
/// ctx!([context], [context arg 1], [context arg 2], ...; [help], [help args], ...)
/// ```
/// Will desugar to:
/// ```ignore
/// || Ctx(format!([context], [context args]), format!([help], [help args]))
/// ```
///
/// Note the placement of the `;` and `,`. They are required and otherwise the
/// macro will not parse.
///
/// # Example
///
/// Assume that we want to write the benchmark report and add context to the
/// error message should the write fail.
///
/// This can be done as follows:
///
/// ```no_run
/// # use fib_bench_lib::error::Ctx;
/// # use fib_bench_lib::ctx;
/// # use anyhow::Context;
/// # use std::io::Write;
/// # let mut out = std::io::stdout();
/// writeln!(out, "fib(40): 102334155").with_context(ctx!(
///   "Could not write the report", ;
///   "Ensure that standard output is writable",
/// ));
/// ```
///
/// If one does not want to print a help message this can be easily done by
/// leaving it empty:
///
/// ```no_run
/// # use fib_bench_lib::error::Ctx;
/// # use fib_bench_lib::ctx;
/// # use anyhow::Context;
/// # use std::io::Write;
/// # let mut out = std::io::stdout();
/// writeln!(out, "fib(40): 102334155").with_context(ctx!(
///   "Could not write the report", ;
///   "",
/// ));
/// ```
#[macro_export]
macro_rules! ctx {
    {$cause: expr,  $($arg_cause: expr)*; $help: expr, $($arg_help: tt)*} => {
      || $crate::error::Ctx(format!($cause, $($arg_cause)*), format!($help, $($arg_help)*))
    };
}

pub use ctx;
