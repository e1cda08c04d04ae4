#![no_main]

use libfuzzer_sys::fuzz_target;
use stripekit::ds::ShardSelector;

// Fuzz stripe routing
//
// Byte-slice keys of arbitrary shape must route deterministically and in range.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let shard_count = usize::from(data[0] % 64) + 1;
    let seed = u64::from(data[1]);
    let selector = ShardSelector::new(shard_count, seed);
    assert_eq!(selector.shard_count(), shard_count);

    let keys = &data[2..];
    for end in 0..=keys.len() {
        let key = &keys[..end];
        let shard = selector.shard_for_key(key);
        assert!(shard < shard_count);
        assert_eq!(shard, selector.shard_for_key(key));
        assert_eq!(shard, ShardSelector::new(shard_count, seed).shard_for_key(key));
    }
});
