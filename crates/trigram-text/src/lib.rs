//! Load a text file into one writable buffer and scan it for words.
//!
//! The whole input is brought into a single contiguous region, either a
//! private copy-on-write memory map or an owned heap buffer, chosen at runtime
//! via [`LoadMode`]. Scanning is destructive: [`Words`] lowercases every word
//! in place and overwrites the byte that ends it with `\0`, so the yielded
//! `&str` views borrow straight from the buffer and no word is copied.
//!
//! # Example
//! ```no_run
//! use trigram_text::{LoadMode, TextBuffer};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut text = TextBuffer::load("/path/to/book.txt", LoadMode::Mmap)?;
//! let words: Vec<&str> = text.words().collect();
//! println!("{} words", words.len());
//! # Ok(()) }
//! ```

use std::fs::File;
use std::io::Read;
use std::iter::FusedIterator;
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::{MmapMut, MmapOptions};

/// Strategy for bringing the input file into memory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadMode {
    /// Private, writable memory map. Edits never reach the file.
    #[default]
    Mmap,
    /// Read the file into an owned buffer (portable fallback).
    Owned,
}

impl LoadMode {
    pub fn from_name(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "mmap" => Some(LoadMode::Mmap),
            "owned" => Some(LoadMode::Owned),
            _ => None,
        }
    }
}

enum Buffer {
    Mmap(MmapMut),
    Owned(Vec<u8>),
}

/// The loaded input text, writable in place.
pub struct TextBuffer {
    buffer: Buffer,
}

impl TextBuffer {
    /// Load the entire file at `path`.
    ///
    /// Files that report a size of zero (empty files, pipes, `/proc` entries)
    /// are never mapped; they are read to the end into an owned buffer.
    pub fn load(path: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("stat {}", path.display()))?
            .len();

        let buffer = match mode {
            LoadMode::Mmap if len > 0 => unsafe { MmapOptions::new().map_copy(&file) }
                .map(Buffer::Mmap)
                .with_context(|| format!("mmap {}", path.display()))?,
            LoadMode::Mmap | LoadMode::Owned => {
                let mut buf = Vec::with_capacity(len as usize);
                file.read_to_end(&mut buf)
                    .with_context(|| format!("read {}", path.display()))?;
                Buffer::Owned(buf)
            }
        };
        Ok(Self { buffer })
    }

    /// Wrap bytes that are already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buffer: Buffer::Owned(bytes.into()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.buffer {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match &mut self.buffer {
            Buffer::Mmap(m) => m.as_mut(),
            Buffer::Owned(v) => v.as_mut_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.buffer, Buffer::Mmap(_))
    }

    /// Scan the buffer for words. See [`words`].
    pub fn words(&mut self) -> Words<'_> {
        words(self.as_bytes_mut())
    }
}

/// ASCII letters and the apostrophe make up words; every other byte
/// separates them.
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'\''
}

/// Scan `buf` for words, normalizing it in place as the scan advances.
pub fn words(buf: &mut [u8]) -> Words<'_> {
    Words { rest: buf }
}

/// Lazy, single-pass word scanner over a mutable buffer.
///
/// Each call to `next` skips separators, lowercases the following run of
/// word bytes, replaces the separator that ends the run with `\0` and moves
/// past it. Once the buffer is exhausted the iterator stays empty.
pub struct Words<'a> {
    rest: &'a mut [u8],
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let buf = std::mem::take(&mut self.rest);
        let start = buf.iter().position(|b| is_word_byte(*b))?;
        let run = &mut buf[start..];
        let len = run
            .iter()
            .position(|b| !is_word_byte(*b))
            .unwrap_or(run.len());
        let (word, tail) = run.split_at_mut(len);
        word.make_ascii_lowercase();

        self.rest = match tail.split_first_mut() {
            Some((end, after)) => {
                *end = 0;
                after
            }
            None => &mut [],
        };

        let word: &'a [u8] = word;
        Some(std::str::from_utf8(word).expect("word bytes are ascii"))
    }
}

impl FusedIterator for Words<'_> {}
