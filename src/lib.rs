#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

/*!
# pegchain
- grammars are plain values, composed from small matching rules
- parsing matches a prefix of the input and reports what was consumed and what remains
- matched text can be turned into typed values as matching proceeds (synthesized attributes),
  building an AST bottom-up without callbacks or mutable state

```
use pegchain::prelude::*;

let digits: Parser<i64> = one_or_more(char_class("0123456789"))
    .synthesize(|s: Synthesis<'_, i64>| s.text().unwrap_or_default().parse::<i64>());

let res = digits.parse("42,").unwrap();
assert!(res.succeeded());
assert_eq!(res.matched(), "42");
assert_eq!(res.remainder(), ",");
assert_eq!(res.attributes(), &[42]);
```

Choice is ordered (the first alternative to match wins) and there is no
backtracking into a repetition once it has stopped, as in a PEG.

Parsing can be traced with
```sh
RUST_LOG=pc=trace cargo test mytest -- --nocapture
```
*/

mod combinators;
mod cursor;
mod error;
mod logging;
mod parse_result;
mod parser;
mod repeat;
mod synthesis;
mod text_parser;
mod util;

pub mod combo;
pub mod contrib;
pub mod prelude;

#[cfg(any(feature = "cookbook", test))]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "pc"; // env!("CARGO_PKG_NAME");

pub use crate::combo::parse;
pub use crate::cursor::{Cursor, Selection};
pub use crate::error::{BoxError, ParseError};
pub use crate::parse_result::{ParseResult, Status};
pub use crate::parser::{Parser, SynthesisFn};
pub use crate::synthesis::Synthesis;
