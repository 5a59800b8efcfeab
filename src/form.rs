//! Interactive parameter form.
//!
//! Asks for the four search parameters one at a time on a terminal (or any
//! reader/writer pair). A field that fails validation is asked again with
//! the reason shown; nothing is sent anywhere until every field is valid.

use std::io::{BufRead, Write};

use crate::config::SearchParams;
use crate::error_handling::InputError;

/// Prompt-driven adapter producing a [`SearchParams`].
pub struct Form<R, W> {
    input: R,
    output: W,
    key_fallback: Option<String>,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            key_fallback: None,
        }
    }

    /// Key used when the key prompt is answered with an empty line.
    pub fn with_key_fallback(mut self, key: Option<String>) -> Self {
        self.key_fallback = key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Runs the form to completion.
    ///
    /// # Errors
    ///
    /// `InputError::Aborted` if input ends early, `InputError::Io` if the
    /// terminal cannot be read or written.
    pub fn collect(mut self) -> Result<SearchParams, InputError> {
        writeln!(self.output, "gmaps_apify: search Google Maps through Apify")?;
        writeln!(self.output)?;

        let key_prompt = if self.key_fallback.is_some() {
            "APIFY key [press Enter to use APIFY_TOKEN]: "
        } else {
            "APIFY key: "
        };
        let api_key = loop {
            let answer = self.ask(key_prompt)?;
            let key = match (&self.key_fallback, answer.is_empty()) {
                (Some(fallback), true) => fallback.clone(),
                _ => answer,
            };
            if !key.is_empty() {
                break key;
            }
            self.complain(&InputError::MissingApiKey)?;
        };

        let search = loop {
            let answer = self.ask("Search (example: coffee restaurant): ")?;
            if answer.split_whitespace().next().is_some() {
                break answer;
            }
            self.complain(&InputError::MissingSearch)?;
        };

        let city = self.ask("City (example: pittsburgh): ")?;

        let max_results = loop {
            let answer =
                self.ask("Max results (the crawler sometimes returns a few more): ")?;
            match answer.parse::<u32>() {
                Ok(n) if n > 0 => break n,
                _ => self.complain(&InputError::InvalidMaxResults(answer))?,
            }
        };

        SearchParams::new(api_key, search, city, max_results)
    }

    /// Prints `prompt` and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Aborted);
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, error: &InputError) -> Result<(), InputError> {
        writeln!(self.output, "  {error}")?;
        Ok(())
    }
}
