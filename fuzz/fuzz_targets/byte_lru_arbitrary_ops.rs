#![no_main]

use libfuzzer_sys::fuzz_target;
use stripekit::policy::byte_lru::ByteLru;

// Fuzz arbitrary operation sequences on ByteLru
//
// First byte picks the budget. Each following triple is (op, key, value length).
// Keys come from a small alphabet so updates and deletes hit live entries.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0]) * 4;
    let mut cache = ByteLru::new(capacity);

    for chunk in data[1..].chunks_exact(3) {
        let op = chunk[0] % 7;
        let key = [chunk[1] % 16];
        let value = vec![chunk[2]; usize::from(chunk[2] % 64)];
        let fits = key.len() + value.len() <= capacity;

        match op {
            0 => {
                let stored = cache.put(&key, &value);
                assert_eq!(stored, fits);
                if stored {
                    assert_eq!(cache.peek_mru().map(|(k, _)| &k[..]), Some(&key[..]));
                }
            }
            1 => {
                let existed = cache.contains(&key);
                let stored = cache.put_if_absent(&key, &value);
                assert_eq!(stored, !existed && fits);
            }
            2 => {
                let existed = cache.contains(&key);
                let stored = cache.set(&key, &value);
                assert_eq!(stored, existed && fits);
            }
            3 => {
                let existed = cache.contains(&key);
                assert_eq!(cache.delete(&key), existed);
                assert!(!cache.contains(&key));
            }
            4 => {
                if cache.get(&key).is_some() {
                    assert_eq!(cache.peek_mru().map(|(k, _)| &k[..]), Some(&key[..]));
                }
            }
            5 => {
                let before = cache.len();
                if let Some((k, _)) = cache.pop_lru() {
                    assert_eq!(cache.len(), before - 1);
                    assert!(!cache.contains(&k));
                }
            }
            _ => {
                if chunk[1] == 0xFF {
                    cache.clear();
                    assert!(cache.is_empty());
                    assert_eq!(cache.current_size(), 0);
                }
            }
        }

        assert!(cache.current_size() <= cache.capacity());
    }

    assert!(cache.check_invariants().is_ok());
});
