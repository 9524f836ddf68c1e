//! Interactive character substitution.
//!
//! A [`Session`] repeatedly asks for a line of text and two characters, then
//! prints the line with every occurrence of the first character replaced by
//! the second. It ends when the stop word (`stop` by default) is entered or
//! input runs out.
//!
//! Input comes from a [`LineSource`]: [`Terminal`] wraps a `rustyline`
//! editor for interactive use, [`StreamSource`] reads any `BufRead` such as
//! piped stdin. Lines travel as raw bytes, so input that is not valid UTF-8
//! comes back out exactly as it went in; see [`Symbol`]. The substitution
//! itself lives in [`replace_all`] and [`replace_in_place`].

mod config;
mod error;
mod input;
mod replace;
mod session;

pub use config::Config;
pub use error::{ReplaceError, Result};
pub use input::{LineSource, StreamSource, Terminal};
pub use replace::{Symbol, replace_all, replace_in_place, symbols};
pub use session::{
    MATCH_PROMPT, Outcome, REPLACEMENT_PROMPT, STRING_PROMPT, Session, SessionConfig,
};
