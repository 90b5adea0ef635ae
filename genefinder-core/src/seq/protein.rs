use std::fmt;

/// One-letter amino-acid codes as produced by translation (`*` marks a stop).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for ProteinSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

impl PartialEq<str> for ProteinSeq {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for ProteinSeq {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}
