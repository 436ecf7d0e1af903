#![allow(dead_code)]
/*!
# Cookbook

Worked examples, each a small grammar with tests.

Main concepts:

# Grammar
A [`Parser`](crate::prelude::Parser) value describes how to match some text. Grammars
are built once from
- primitives: `literal`, `char_class`, `anything`
- composition: `a & b` (one after the other), `a | b` (first that matches)
- repetition: `zero_or_more`, `one_or_more`, `repeat`, `repeat_min`, `repeat_max`, `repeat_range`
- lookahead: `before(p)` (peek), `!p` (any one char where `p` does not match)

and can then be used for any number of parses.

# ParseResult
Parsing matches a *prefix* of the input:

```
use pegchain::prelude::*;

let greeting: Parser = literal("hello") | literal("goodbye");
let res = greeting.parse("goodbye!").unwrap();
assert!(res.succeeded());
assert_eq!(res.matched(), "goodbye");
assert_eq!(res.remainder(), "!");
```

# Synthesis
`synthesize` attaches a function turning what a rule matched into a value. Leaf rules
see the matched text; a rule wrapping other synthesizing rules sees their values, so an
AST is built bottom-up.

# Testing
Parsing can be traced through the `log` crate. With `test-log` and `env_logger` as
dev-dependencies

```toml
[dev-dependencies]
env_logger = "0.10"
test-log = {version = "0.2"}
```

run
```sh
RUST_LOG=pc=trace cargo test mytest -- --nocapture
```
*/

pub mod ch_1_getting_started;
pub mod ch_2_synthesis;
pub mod ch_3_enum_strum;
pub mod ch_4_csv;
