#![cfg(feature = "core")]

use localized::*;

/// Replace the byte at `idx` with `digit`.
fn with_digit(s: &str, idx: usize, digit: u8) -> String {
    let mut bytes = s.as_bytes().to_vec();
    bytes[idx] = digit;
    String::from_utf8(bytes).unwrap()
}

// ---------------------------------------------------------------------------
// China — GB 11643-1999
// ---------------------------------------------------------------------------

#[test]
fn cn_known_valid() {
    assert!(is_valid_china_id("110101199003074477"));
}

#[test]
fn cn_x_check_character() {
    assert!(is_valid_china_id("11010119900307440X"));
    assert!(is_valid_china_id("11010119900307440x"));
}

#[test]
fn cn_single_digit_mutation_flips_result() {
    let valid = "110101199003074477";
    for idx in 0..17 {
        let original = valid.as_bytes()[idx];
        let replacement = if original == b'9' { b'0' } else { original + 1 };
        let mutated = with_digit(valid, idx, replacement);
        assert!(!is_valid_china_id(&mutated), "{mutated} should be rejected");
    }
}

#[test]
fn cn_length_other_than_18() {
    for len in [0, 1, 15, 17, 19, 20] {
        let s = "1".repeat(len);
        assert!(!is_valid_china_id(&s));
    }
}

// ---------------------------------------------------------------------------
// France — NIR
// ---------------------------------------------------------------------------

#[test]
fn fr_key_from_mod_97() {
    let body: i64 = 1_800_101_010_001;
    let key = 97 - body % 97;
    assert_eq!(key, 83);
    assert!(is_valid_france_nir(&format!("{body}{key:02}")));
}

#[test]
fn fr_key_off_by_one() {
    assert!(!is_valid_france_nir("180010101000184"));
}

#[test]
fn fr_every_other_key_rejected() {
    for key in 0..=99 {
        let nir = format!("1800101010001{key:02}");
        assert_eq!(is_valid_france_nir(&nir), key == 83, "{nir}");
    }
}

#[test]
fn fr_corsica_2a() {
    // 2A reads as 20 and subtracts 1 000 000 from the body.
    let body: i64 = 1_800_120_123_456 - 1_000_000;
    assert_eq!(97 - body % 97, 20);
    assert!(is_valid_france_nir("180012A12345620"));
}

#[test]
fn fr_corsica_2b() {
    let body: i64 = 1_800_120_123_456 - 2_000_000;
    assert_eq!(97 - body % 97, 47);
    assert!(is_valid_france_nir("180012B12345647"));
}

#[test]
fn fr_corsica_without_offset_rejected() {
    // Key computed as if the department were plain "20".
    let plain = 97 - 1_800_120_123_456_i64 % 97;
    assert!(!is_valid_france_nir(&format!("180012A123456{plain:02}")));
}

// ---------------------------------------------------------------------------
// Italy — Codice Fiscale
// ---------------------------------------------------------------------------

#[test]
fn it_eleven_digits_always_valid() {
    assert!(is_valid_italy_codice_fiscale("12345678901"));
    assert!(is_valid_italy_codice_fiscale("99999999999"));
}

#[test]
fn it_only_correct_check_letter_passes() {
    let stem = "RSSMRA85T10A562";
    for letter in b'A'..=b'Z' {
        let code = format!("{stem}{}", letter as char);
        assert_eq!(is_valid_italy_codice_fiscale(&code), letter == b'S', "{code}");
    }
}

#[test]
fn it_lowercase_normalized() {
    assert!(is_valid_italy_codice_fiscale("mrtmtt91d08f205j"));
}

// ---------------------------------------------------------------------------
// Taiwan — national ID and UBN
// ---------------------------------------------------------------------------

#[test]
fn tw_published_pair() {
    assert!(is_valid_taiwan_national_id("A123456789"));
    assert!(!is_valid_taiwan_national_id("A123456780"));
}

#[test]
fn tw_second_character_must_be_sex_digit() {
    for digit in [b'0', b'3', b'4', b'5', b'6', b'7', b'8', b'9'] {
        let id = with_digit("A123456789", 1, digit);
        assert!(!is_valid_taiwan_national_id(&id), "{id}");
    }
}

#[test]
fn tw_first_character_must_be_letter() {
    assert!(!is_valid_taiwan_national_id("0123456789"));
    assert!(!is_valid_taiwan_national_id("@123456789"));
}

#[test]
fn tw_ubn_multiple_of_ten() {
    // 0+8+5+9+5+4+2+7 = 40
    assert!(is_valid_taiwan_ubn("04595257"));
}

#[test]
fn tw_ubn_seventh_digit_exception() {
    // Real-world number whose digit sum is 39 with a 7 in position 6.
    assert!(is_valid_taiwan_ubn("12345675"));
    // Crafted: 9 + (7 * 4 = 28 -> 10) = 19.
    assert!(is_valid_taiwan_ubn("90000070"));
    // Sum ends in 9 but position 6 is not 7.
    assert!(!is_valid_taiwan_ubn("90000000"));
}

// ---------------------------------------------------------------------------
// All validators
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_agree() {
    let inputs = [
        "110101199003074477",
        "180012A12345620",
        "RSSMRA85T10A562S",
        "A123456789",
        "12345675",
        "garbage",
    ];
    let validators: [fn(&str) -> bool; 5] = [
        is_valid_china_id,
        is_valid_france_nir,
        is_valid_italy_codice_fiscale,
        is_valid_taiwan_national_id,
        is_valid_taiwan_ubn,
    ];
    for validator in validators {
        for input in inputs {
            assert_eq!(validator(input), validator(input));
        }
    }
}

#[test]
fn non_ascii_input_rejected() {
    let inputs = ["", "１１０１０１１９９００３０７４４７７", "Ä123456789", "éééééééé"];
    for input in inputs {
        assert!(!is_valid_china_id(input));
        assert!(!is_valid_france_nir(input));
        assert!(!is_valid_italy_codice_fiscale(input));
        assert!(!is_valid_taiwan_national_id(input));
        assert!(!is_valid_taiwan_ubn(input));
    }
}
