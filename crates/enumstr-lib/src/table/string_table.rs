//! Concatenated name blob with a byte-offset index.
//!
//! Names are stored back to back with no separators. The offset index has
//! one entry per name plus a trailing sentinel, so name `k` is
//! `blob[offsets[k]..offsets[k + 1]]`.

use enumstr_core::IntRepr;

/// Names of one run, flattened into a blob plus offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    blob: String,
    offsets: Vec<usize>,
}

impl StringTable {
    pub fn blob(&self) -> &str {
        &self.blob
    }

    /// Byte offsets, `len() + 1` entries, starting at 0.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name at `idx`, slicing the blob between two offsets.
    pub fn get(&self, idx: usize) -> Option<&str> {
        let start = *self.offsets.get(idx)?;
        let end = *self.offsets.get(idx + 1)?;
        self.blob.get(start..end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.offsets.windows(2).map(|w| &self.blob[w[0]..w[1]])
    }

    /// Narrowest unsigned type that holds every offset.
    pub fn index_width(&self) -> IntRepr {
        width_for_len(self.blob.len())
    }
}

/// Narrowest unsigned representation for offsets up to `len`.
pub fn width_for_len(len: usize) -> IntRepr {
    if len <= u8::MAX as usize {
        IntRepr::U8
    } else if len <= u16::MAX as usize {
        IntRepr::U16
    } else if len as u64 <= u32::MAX as u64 {
        IntRepr::U32
    } else {
        IntRepr::U64
    }
}

/// Accumulates names in order and produces a [`StringTable`].
#[derive(Debug)]
pub struct StringTableBuilder {
    blob: String,
    offsets: Vec<usize>,
}

impl StringTableBuilder {
    pub fn new() -> Self {
        Self {
            blob: String::new(),
            offsets: vec![0],
        }
    }

    /// Append a name, returning its index.
    pub fn push(&mut self, name: &str) -> usize {
        self.blob.push_str(name);
        self.offsets.push(self.blob.len());
        self.offsets.len() - 2
    }

    /// Number of names pushed so far.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn build(self) -> StringTable {
        StringTable {
            blob: self.blob,
            offsets: self.offsets,
        }
    }
}

impl Default for StringTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> FromIterator<&'s str> for StringTable {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        let mut builder = StringTableBuilder::new();
        for name in iter {
            builder.push(name);
        }
        builder.build()
    }
}
