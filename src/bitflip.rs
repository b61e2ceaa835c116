use std::collections::BTreeSet;

/// Flips a single bit of a character's scalar value, returning the result
/// only when it lands in printable ASCII (32..=126).
///
/// The XOR is applied to the code point's low bits, so non-ASCII input is
/// not rejected but effectively never yields a variant: a flip of a
/// multi-byte code point stays outside the printable ASCII range.
pub fn flip_bit(c: char, bit_position: u8) -> Option<char> {
    debug_assert!(bit_position < 8);

    let flipped = (c as u32) ^ (1u32 << bit_position);
    if (32..=126).contains(&flipped) {
        char::from_u32(flipped)
    } else {
        None
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_tld_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Bit-flip variants of a base label. The flipped character and every
/// character of the lower-cased candidate must be alphanumeric or hyphen.
pub fn name_variants(text: &str) -> BTreeSet<String> {
    flip_variants(text, is_name_char, true)
}

/// Bit-flip variants of a TLD label. Only the flipped character is checked;
/// it must be alphabetic.
pub fn tld_variants(tld: &str) -> BTreeSet<String> {
    flip_variants(tld, is_tld_char, false)
}

// Both modes run the same position x bit sweep; they differ only in the
// character filter and whether the whole candidate is re-checked against it.
// The caller is expected to remove the lower-cased original from the result
// (a case-only flip regenerates it).
fn flip_variants(
    text: &str,
    allowed: fn(char) -> bool,
    filter_whole: bool,
) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    let chars: Vec<char> = text.chars().collect();

    for char_idx in 0..chars.len() {
        for bit_position in 0..8 {
            let flipped_char = match flip_bit(chars[char_idx], bit_position) {
                Some(c) => c,
                None => continue,
            };
            if !allowed(flipped_char) {
                continue;
            }

            let mut candidate = chars.clone();
            candidate[char_idx] = flipped_char;
            let candidate = candidate.into_iter().collect::<String>().to_lowercase();

            if filter_whole && !candidate.chars().all(allowed) {
                continue;
            }
            variants.insert(candidate);
        }
    }

    variants
}
