use std::{error::Error, fmt};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Conditions that abort a parse outright.
///
/// A grammar that simply does not match is *not* an error: that is reported as
/// [`Status::Failure`](crate::prelude::Status) inside an `Ok` result. These variants
/// signal a broken grammar or a synthesis function rejecting the text it was given,
/// and propagate through every combinator unchanged.
#[derive(Debug)]
pub enum ParseError {
    InputTooShort { action: &'static str },
    Synthesis(BoxError),
}

impl ParseError {
    #[inline]
    pub(crate) fn too_short(action: &'static str) -> Self {
        Self::InputTooShort { action }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InputTooShort { action } => {
                write!(f, "InputTooShort: (action='{action}') called on empty input")?
            }
            Self::Synthesis(e) => write!(f, "Synthesis:{e}")?,
        };
        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputTooShort { .. } => None,
            Self::Synthesis(e) => Some(e.as_ref()),
        }
    }
}
