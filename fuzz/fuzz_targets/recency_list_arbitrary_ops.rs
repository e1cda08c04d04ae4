#![no_main]

use libfuzzer_sys::fuzz_target;
use stripekit::ds::RecencyList;

// Fuzz arbitrary operation sequences on RecencyList
//
// Tests random sequences of push_back, pop_front, remove, move_to_back and
// clear, checking link consistency after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: RecencyList<u32> = RecencyList::new();
    let mut all_ids = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 5;
        let value = u32::from(pair[1]);

        match op {
            0 => {
                let id = list.push_back(value);
                all_ids.push(id);
                assert_eq!(list.back_id(), Some(id));
                assert_eq!(list.get(id), Some(&value));
            }
            1 => {
                let before = list.len();
                let front = list.front().copied();
                assert_eq!(list.pop_front(), front);
                if front.is_some() {
                    assert_eq!(list.len(), before - 1);
                }
            }
            2 => {
                if !all_ids.is_empty() {
                    let id = all_ids[value as usize % all_ids.len()];
                    if list.remove(id).is_some() {
                        assert!(!list.contains(id));
                    }
                }
            }
            3 => {
                if !all_ids.is_empty() {
                    let id = all_ids[value as usize % all_ids.len()];
                    if list.move_to_back(id) {
                        assert_eq!(list.back_id(), Some(id));
                    }
                }
            }
            _ => {
                if value == 0 {
                    list.clear();
                    all_ids.clear();
                    assert!(list.is_empty());
                }
            }
        }

        assert!(list.check_links().is_ok());
        assert_eq!(list.iter().count(), list.len());
    }
});
