pub mod dna;

use bit_set::BitSet;
use std::borrow::Borrow;

#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    /// Position and value of the first byte outside the alphabet.
    pub fn first_foreign<C, T>(&self, text: T) -> Option<(usize, u8)>
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter()
            .map(|c| *c.borrow())
            .enumerate()
            .find(|&(_, b)| !self.symbols.contains(b as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_foreign_reports_position() {
        let alphabet = Alphabet::new(b"ACGT");
        assert_eq!(alphabet.first_foreign(b"ACNGX"), Some((2, b'N')));
        assert_eq!(alphabet.first_foreign(b"GATTACA"), None);
        assert_eq!(alphabet.first_foreign(b""), None);
    }
}
