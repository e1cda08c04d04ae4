use stripekit::builder::StripedLruBuilder;
use stripekit::policy::byte_lru::ByteLru;
use stripekit::policy::striped::MIN_STRIPE_SIZE;

fn main() {
    let mut engine = ByteLru::new(10);
    engine.put(b"ab", b"cd");
    engine.put(b"ef", b"gh");
    engine.put(b"ij", b"kl");
    println!("ab present? {}", engine.contains(b"ab"));
    println!("bytes in use: {}", engine.current_size());

    let cache = match StripedLruBuilder::new()
        .memory_limit(8 * MIN_STRIPE_SIZE)
        .stripes(4)
        .try_build()
    {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("bad config: {err}");
            return;
        },
    };

    cache.put(b"user:1", b"alice");
    if let Some(value) = cache.get(b"user:1") {
        println!("hit user:1: {}", String::from_utf8_lossy(&value));
    }
    println!("stripes: {}, per stripe: {} bytes", cache.stripe_count(), cache.stripe_capacity());
}

// Expected output:
// ab present? false
// bytes in use: 8
// hit user:1: alice
// stripes: 4, per stripe: 2097152 bytes
//
// Explanation: the engine has a 10-byte budget and each entry costs 4 bytes.
// The third put needs 12 bytes, so the least recent key "ab" is evicted.
