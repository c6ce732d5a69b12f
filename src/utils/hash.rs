//! Fast, non-cryptographic hash containers for small keys like handles.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hash, Hasher};
use std::ops::BitXor;

/// A `HashMap` using a fast, non-DoS-resistant hash function.
pub type FastHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FxHasher>>;

/// A `HashSet` using a fast, non-DoS-resistant hash function.
pub type FastHashSet<V> = HashSet<V, BuildHasherDefault<FxHasher>>;

/// Hashes a value with the fast hasher.
pub fn hash<T: Hash + ?Sized>(v: &T) -> u64 {
    let mut state = FxHasher::default();
    v.hash(&mut state);
    state.finish()
}

const SEED: u64 = 0x51_7c_c1_b7_27_22_0a_95;

/// The multiply-rotate hasher used by the rust compiler. It is a lot faster
/// than the default SipHash on integer keys.
#[derive(Default, Clone, Copy)]
pub struct FxHasher {
    hash: u64,
}

impl FxHasher {
    #[inline]
    fn add_to_hash(&mut self, i: u64) {
        self.hash = self.hash.rotate_left(5).bitxor(i).wrapping_mul(SEED);
    }
}

impl Hasher for FxHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut v = 0u64;
            for (i, b) in chunk.iter().enumerate() {
                v |= u64::from(*b) << (i * 8);
            }

            self.add_to_hash(v);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.add_to_hash(u64::from(i));
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.add_to_hash(u64::from(i));
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.add_to_hash(u64::from(i));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.add_to_hash(i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.add_to_hash(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stable() {
        assert_eq!(hash("earth"), hash("earth"));
        assert_ne!(hash("earth"), hash("mars"));
    }

    #[test]
    fn collections() {
        let mut set = FastHashSet::default();
        set.insert("moon");
        set.insert("moon");
        assert_eq!(set.len(), 1);

        let mut map = FastHashMap::default();
        map.insert(1u32, "sun");
        assert_eq!(map.get(&1), Some(&"sun"));
    }
}
