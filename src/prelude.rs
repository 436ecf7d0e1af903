pub use crate::combo::{
    alternation, anything, before, char_class, literal, not, one_or_more, optional, parse,
    repeat, repeat_max, repeat_min, repeat_range, sequence, synthesize, zero_or_more,
};
pub use crate::cursor::{Cursor, Selection};
pub use crate::error::{BoxError, ParseError};
pub use crate::parse_result::{ParseResult, Status};
pub use crate::parser::Parser;
pub use crate::synthesis::Synthesis;
