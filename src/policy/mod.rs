pub mod byte_lru;
pub mod concurrent;
pub mod striped;
