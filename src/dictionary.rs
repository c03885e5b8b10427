//! Word interning
//!
//! Maps each distinct token to a small integer code in first-seen order.
//! Words are raw byte strings, so two lines intern to the same code only
//! when their bytes are identical. The empty word is registered as code 0
//! on construction and doubles as the sentinel used to pad the phrase
//! window at stream boundaries.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{NgramError, Result};
use crate::input::TokenReader;
use crate::phrase;

/// Interned word code
pub type Code = u32;

/// Code reserved for the empty word / window padding
pub const SENTINEL: Code = 0;

/// Bidirectional word <-> code table
#[derive(Debug, Clone)]
pub struct Dictionary {
    index: HashMap<Vec<u8>, Code>,
    words: Vec<Vec<u8>>,
    overflow_reported: bool,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Creates a dictionary holding only the sentinel
    pub fn new() -> Self {
        let mut dictionary = Self {
            index: HashMap::new(),
            words: Vec::new(),
            overflow_reported: false,
        };
        dictionary.add(Vec::new());
        dictionary
    }

    /// Pre-seeds a dictionary from a word list, one word per line.
    ///
    /// Loading stops at the first blank line or at end of input, so the
    /// output of dump mode can be fed straight back in.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Self::new();
        let mut tokens = TokenReader::new(reader);

        while let Some(word) = tokens.next_token()? {
            if word.is_empty() {
                break;
            }
            dictionary.code_of(word);
        }

        debug!(words = dictionary.size(), "dictionary pre-seeded");
        Ok(dictionary)
    }

    /// Pre-seeds a dictionary from a word-list file.
    ///
    /// Failing to open the path or to read it (a directory, for instance)
    /// is reported as [`NgramError::InvalidDictionaryFile`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let invalid = |source| NgramError::InvalidDictionaryFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(invalid)?;
        Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            NgramError::Io(source) => invalid(source),
            other => other,
        })
    }

    /// Interns every line of `reader`, blank lines included (they map to
    /// the sentinel). Returns the number of lines read.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> Result<u64> {
        let mut tokens = TokenReader::new(reader);
        while let Some(word) = tokens.next_token()? {
            self.code_of(word);
        }
        Ok(tokens.tokens_read())
    }

    /// Returns the code for `word`, assigning the next one if unseen
    pub fn code_of<W: AsRef<[u8]>>(&mut self, word: W) -> Code {
        let word = word.as_ref();
        if let Some(&code) = self.index.get(word) {
            return code;
        }
        self.add(word.to_vec())
    }

    /// Returns the word previously assigned to `code`
    pub fn text_of(&self, code: Code) -> Result<&[u8]> {
        self.words
            .get(code as usize)
            .map(Vec::as_slice)
            .ok_or(NgramError::UnknownCode(code))
    }

    /// Returns the code for `word` without inserting it
    pub fn get<W: AsRef<[u8]>>(&self, word: W) -> Option<Code> {
        self.index.get(word.as_ref()).copied()
    }

    pub fn contains<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.index.contains_key(word.as_ref())
    }

    /// Number of distinct words, sentinel included
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// True when nothing but the sentinel has been interned
    pub fn is_empty(&self) -> bool {
        self.words.len() <= 1
    }

    /// Iterates over all interned words (sentinel included) in code order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter().map(Vec::as_slice)
    }

    /// All real words in descending byte-wise order
    pub fn sorted_descending(&self) -> Vec<&[u8]> {
        let mut words: Vec<&[u8]> = self.iter().filter(|w| !w.is_empty()).collect();
        words.sort_unstable_by(|a, b| b.cmp(a));
        words
    }

    fn add(&mut self, word: Vec<u8>) -> Code {
        let code = self.words.len() as Code;
        if code as u64 >= phrase::CAPACITY && !self.overflow_reported {
            warn!(
                code,
                capacity = phrase::CAPACITY,
                "vocabulary exceeds phrase field width, codes will alias"
            );
            self.overflow_reported = true;
        }
        self.index.insert(word.clone(), code);
        self.words.push(word);
        code
    }
}
