// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! Writing encoded lines to an output sink.
//!
//! The [`Encoder`] turns a value into lines and writes them to any [`std::io::Write`]
//! implementation through an internal buffer:
//!
//! - a sequence (`Vec<T>`, `[T]`, `[T; N]`, or an option/pointer holding one) becomes one
//!   line per element, separated by the configured [`LineTerminator`], with no terminator
//!   after the last line;
//! - anything else becomes exactly one line;
//! - an absent top-level value produces no output.
//!
//! Every line is composed completely in memory before any of it is written, so a failing
//! field never leaves half a line in the sink. Lines written before the failure stay
//! buffered and reach the sink on the next successful flush or when the encoder is dropped.
//! The sink is flushed at the end of every successful [`Encoder::encode`] call.
//!
//! # Examples
//!
//! ```rust
//! use fixedwidth::{fixed_record, Encoder, EncoderConfig, LineTerminator};
//!
//! fixed_record! {
//!     struct Item {
//!         #[fixed = "1,4"]
//!         sku: &'static str,
//!         #[fixed = "5,7"]
//!         qty: u16,
//!     }
//! }
//!
//! let items = vec![Item { sku: "A1", qty: 3 }, Item { sku: "B22", qty: 10 }];
//!
//! let config = EncoderConfig::default().with_line_terminator(LineTerminator::CrLf);
//! let mut encoder = Encoder::with_config(Vec::new(), config);
//! encoder.encode(&items)?;
//!
//! assert_eq!(encoder.into_inner()?, b"A1  3  \r\nB22 10 ");
//! # Ok::<(), fixedwidth::Error>(())
//! ```

mod compose;
mod config;
mod line;

pub use compose::{char_count, fit, Chunk, FILLER, MAX_CHAR_LEN};
pub use config::{EncoderConfig, LineTerminator};
pub use line::encode_record;

use std::io::{BufWriter, Write};

use rayon::prelude::*;

use crate::{
    encode::{to_bytes, Encode},
    Error, Result,
};

/// Returns the fixed-width encoding of `value`.
///
/// Convenience wrapper around an [`Encoder`] writing into memory with the default
/// configuration.
///
/// # Errors
/// See [`Encoder::encode`].
pub fn marshal<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    marshal_with(value, EncoderConfig::default())
}

/// Returns the fixed-width encoding of `value` using `config`.
///
/// # Errors
/// See [`Encoder::encode`].
pub fn marshal_with<T: Encode + ?Sized>(value: &T, config: EncoderConfig) -> Result<Vec<u8>> {
    let mut encoder = Encoder::with_config(Vec::new(), config);
    encoder.encode(value)?;
    encoder.into_inner()
}

/// An encoder writes fixed-width lines to an output stream.
pub struct Encoder<W: Write> {
    writer: BufWriter<W>,
    config: EncoderConfig,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder writing to `sink` with the default configuration.
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, EncoderConfig::default())
    }

    /// Creates an encoder writing to `sink` with `config`.
    pub fn with_config(sink: W, config: EncoderConfig) -> Self {
        Encoder {
            writer: BufWriter::new(sink),
            config,
        }
    }

    /// The configuration of this encoder.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Writes the fixed-width encoding of `value` and flushes the sink.
    ///
    /// # Errors
    /// - [`Error::UnsupportedType`] or [`Error::Custom`] if a field could not be encoded
    /// - [`Error::Write`] if the sink rejected a write
    /// - [`Error::Flush`] if the sink rejected the final flush
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        let lines = match value.as_lines() {
            Some(items) => {
                self.write_lines(&items)?;
                items.len()
            }
            None => {
                self.write_line(value)?;
                1
            }
        };

        log::trace!("encoded {} line(s)", lines);
        self.flush()
    }

    /// Writes one line per element of `items`, composing the lines in parallel.
    ///
    /// Lines are composed on the rayon thread pool and written in order afterwards. If any
    /// element fails, the error of the first failing element (by index) is returned and
    /// nothing is written.
    ///
    /// # Errors
    /// See [`Encoder::encode`].
    pub fn encode_parallel<T: Encode + Sync>(&mut self, items: &[T]) -> Result<()> {
        let encoded: Vec<Result<Vec<u8>>> = items.par_iter().map(to_bytes).collect();
        let lines = encoded.into_iter().collect::<Result<Vec<Vec<u8>>>>()?;

        for (index, line) in lines.iter().enumerate() {
            self.write_raw(line)?;
            if index + 1 != lines.len() {
                self.write_raw(self.config.line_terminator.as_bytes())?;
            }
        }

        log::trace!("encoded {} line(s) in parallel", lines.len());
        self.flush()
    }

    /// A reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    /// Flushes buffered output and returns the underlying sink.
    ///
    /// # Errors
    /// Returns [`Error::Flush`] if the buffered output could not be written.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| Error::Flush(err.into_error()))
    }

    fn write_lines(&mut self, items: &[&dyn Encode]) -> Result<()> {
        for (index, item) in items.iter().enumerate() {
            self.write_line(*item)?;
            if index + 1 != items.len() {
                self.write_raw(self.config.line_terminator.as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_line<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        let line = to_bytes(value)?;
        self.write_raw(&line)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(Error::Write)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(Error::Flush)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::*;
    use crate::fixed_record;

    fixed_record! {
        #[derive(Clone)]
        struct Person {
            #[fixed = "1,5"]
            name: String,
            #[fixed = "6,8"]
            age: i32,
        }
    }

    fixed_record! {
        struct Broken {
            #[fixed = "1,1"]
            flag: bool,
        }
    }

    fn person(name: &str, age: i32) -> Person {
        Person {
            name: name.into(),
            age,
        }
    }

    /// Sink that accepts a fixed number of writes, then fails.
    struct FailingSink {
        writes_left: usize,
        fail_flush: bool,
        data: Vec<u8>,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes_left == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.writes_left -= 1;
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.fail_flush {
                Err(io::Error::new(io::ErrorKind::Other, "flush refused"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn single_record() {
        assert_eq!(marshal(&person("Bob", 42)).unwrap(), b"Bob  42 ");
    }

    #[test]
    fn sequence_has_no_trailing_terminator() {
        let people = vec![person("Bob", 42), person("Alice", 7)];
        assert_eq!(marshal(&people).unwrap(), b"Bob  42 \nAlice7  ");
        assert_eq!(marshal(&people[..1]).unwrap(), b"Bob  42 ");
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        let people: Vec<Person> = Vec::new();
        assert!(marshal(&people).unwrap().is_empty());
    }

    #[test]
    fn absent_value_writes_nothing() {
        assert!(marshal(&None::<Person>).unwrap().is_empty());
        assert!(marshal(&None::<Vec<Person>>).unwrap().is_empty());
    }

    #[test]
    fn pointer_to_sequence_is_unwrapped() {
        let people = Box::new(Some(vec![person("A", 1), person("B", 2)]));
        assert_eq!(marshal(&people).unwrap(), b"A    1  \nB    2  ");
    }

    #[test]
    fn sequence_of_optionals_keeps_empty_lines() {
        let people = vec![Some(person("A", 1)), None, Some(person("B", 2))];
        assert_eq!(marshal(&people).unwrap(), b"A    1  \n\nB    2  ");
    }

    #[test]
    fn top_level_scalars_are_single_lines() {
        assert_eq!(marshal("plain").unwrap(), b"plain");
        assert_eq!(marshal(&12_u8).unwrap(), b"12");
    }

    #[test]
    fn crlf_terminator() {
        let people = [person("A", 1), person("B", 2)];
        let config = EncoderConfig::new().with_line_terminator(LineTerminator::CrLf);
        assert_eq!(
            marshal_with(&people, config).unwrap(),
            b"A    1  \r\nB    2  "
        );
    }

    #[test]
    fn repeated_encodes_append() {
        let mut encoder = Encoder::new(Vec::new());
        encoder.encode(&person("A", 1)).unwrap();
        encoder.encode(&person("B", 2)).unwrap();
        assert_eq!(encoder.get_ref().as_slice(), b"A    1  B    2  ");
    }

    #[test]
    fn deterministic_output() {
        let people = vec![person("Zoë", 30), person("Bob", 42)];
        assert_eq!(marshal(&people).unwrap(), marshal(&people).unwrap());
    }

    #[test]
    fn field_error_aborts_without_partial_line() {
        let err = marshal(&Broken { flag: true }).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { type_name: "bool" }));

        let mut encoder = Encoder::new(Vec::new());
        let items: Vec<Box<dyn Encode>> = vec![
            Box::new(person("Ok", 1)),
            Box::new(Broken { flag: false }),
        ];
        assert!(encoder.encode(&items).is_err());

        // The first line and its terminator were composed before the failure.
        let sink = encoder.into_inner().unwrap();
        assert_eq!(sink, b"Ok   1  \n");
    }

    #[test]
    fn write_failure_is_reported() {
        let sink = FailingSink {
            writes_left: 0,
            fail_flush: false,
            data: Vec::new(),
        };
        let mut encoder = Encoder::new(sink);

        // Larger than the internal buffer, so it goes straight to the sink
        let err = encoder.encode(&"x".repeat(64 * 1024)).unwrap_err();
        assert!(matches!(err, Error::Write(_)));
    }

    #[test]
    fn buffered_write_failure_surfaces_on_flush() {
        let sink = FailingSink {
            writes_left: 0,
            fail_flush: false,
            data: Vec::new(),
        };
        let mut encoder = Encoder::new(sink);
        let err = encoder.encode(&person("Bob", 42)).unwrap_err();
        assert!(matches!(err, Error::Flush(_)));
    }

    #[test]
    fn flush_failure_is_reported() {
        let sink = FailingSink {
            writes_left: usize::MAX,
            fail_flush: true,
            data: Vec::new(),
        };
        let mut encoder = Encoder::new(sink);
        let err = encoder.encode(&person("Bob", 42)).unwrap_err();
        assert!(matches!(err, Error::Flush(_)));
        assert_eq!(encoder.get_ref().data, b"Bob  42 ");
    }

    #[test]
    fn parallel_matches_sequential() {
        let people: Vec<Person> = (0..200).map(|i| person(&format!("P{}", i), i)).collect();

        let mut encoder = Encoder::new(Vec::new());
        encoder.encode_parallel(&people).unwrap();
        assert_eq!(encoder.into_inner().unwrap(), marshal(&people).unwrap());
    }

    #[test]
    fn parallel_failure_writes_nothing() {
        let items: Vec<Box<dyn Encode + Sync>> = vec![
            Box::new(person("Ok", 1)),
            Box::new(Broken { flag: true }),
            Box::new(person("Ok", 2)),
        ];

        let mut encoder = Encoder::new(Vec::new());
        let err = encoder.encode_parallel(&items).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { type_name: "bool" }));
        assert!(encoder.into_inner().unwrap().is_empty());
    }
}
