use std::fmt;

/// The producer replied, but nothing in the reply parses as a recommendation object.
///
/// Fatal to the run: no partial recommendation is returned and the cache is not touched.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub detail: String,
    pub raw_output: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "producer reply is not valid recommendation JSON: {}",
            self.detail
        )
    }
}

impl std::error::Error for ParseError {}
