//! Line sources for the `input` primitive.

use std::collections::VecDeque;
use std::io::BufRead as _;

pub enum InputSource {
    Stdin,
    /// Pre-supplied lines, consumed in order.
    Scripted(VecDeque<String>),
}

impl InputSource {
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InputSource::Scripted(lines.into_iter().map(Into::into).collect())
    }

    /// Next line without its line terminator, or `None` at end of input.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        match self {
            InputSource::Stdin => {
                let mut line = String::new();
                if std::io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(Some(line))
            }
            InputSource::Scripted(lines) => Ok(lines.pop_front()),
        }
    }
}

impl Default for InputSource {
    fn default() -> Self {
        InputSource::Stdin
    }
}
