pub use crate::builder::StripedLruBuilder;
pub use crate::ds::{RecencyList, ShardSelector, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::ByteLruMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::MetricsSnapshotProvider;
pub use crate::policy::byte_lru::ByteLru;
pub use crate::policy::concurrent::ConcurrentByteLru;
pub use crate::policy::striped::{MIN_STRIPE_SIZE, StripedLru};
pub use crate::traits::{ByteCache, Storage};
pub use bytes::Bytes;
