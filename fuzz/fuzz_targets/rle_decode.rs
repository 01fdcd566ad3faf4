use honggfuzz::fuzz;
use rdgen::{Codec, RleCodec};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            // Use the stored length as the expectation so well-formed streams
            // get past the header check.
            let expected = data
                .get(..4)
                .map(|h| u32::from_le_bytes([h[0], h[1], h[2], h[3]]) as usize)
                .unwrap_or(0)
                .min(1 << 20);
            if let Ok(out) = RleCodec.decompress(data, expected) {
                assert_eq!(out.len(), expected);
                let again = RleCodec.compress(&out, 0).unwrap();
                assert_eq!(RleCodec.decompress(&again, expected).unwrap(), out);
            }
        });
    }
}
