use log::Level::Trace;
use log::{log_enabled, trace};

use crate::cursor::Cursor;
use crate::{util, LOG_TARGET};
use std::fmt::Debug;

pub(crate) trait Loggable {
    const LABEL_WIDTH: usize = 15;
    const INPUT_WIDTH: usize = 35;
    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args);
    fn log_success<Args: Debug>(&self, msg: &str, args: Args, matched: &str, attrs: usize);
    fn log_failure<Args: Debug>(&self, msg: &str, args: Args, matched: &str);
}

impl<'a> Loggable for Cursor<'a> {
    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {operation:<lw$}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                inp = util::formatter_str(self.str()),
                operation = format!("{msg}({args:?})"),
            );
        }
    }

    fn log_success<Args: Debug>(&self, msg: &str, args: Args, matched: &str, attrs: usize) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {operation:<lw$} -> ok {m:?} attrs={attrs}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                inp = util::formatter_str(self.str()),
                operation = format!("{msg}({args:?})"),
                m = matched,
            );
        }
    }

    fn log_failure<Args: Debug>(&self, msg: &str, args: Args, matched: &str) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {operation:<lw$} -> FAIL {m:?}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                inp = util::formatter_str(self.str()),
                operation = format!("{msg}({args:?})"),
                m = matched,
            );
        }
    }
}
