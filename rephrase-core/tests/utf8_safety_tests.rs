//! Replacement around multibyte characters and invalid UTF-8

use rephrase_core::{replace_all, replace_all_bytes, replace_one, MappingSet, RawPair, Replacer};

#[test]
fn test_multibyte_text_around_matches() {
    let text = "日本語 colour 🎨 colour café";
    assert_eq!(
        replace_one(text, &RawPair::new("colour", "color")),
        "日本語 color 🎨 color café"
    );
}

#[test]
fn test_multibyte_phrase() {
    let text = "Über café and ÜBER CAFÉ";
    assert_eq!(
        replace_one(text, &RawPair::new("über café", "super bistro")),
        "Super bistro and SUPER BISTRO"
    );
}

#[test]
fn test_non_ascii_letters_are_not_affixes() {
    // only ASCII alphanumerics glue onto a phrase
    assert_eq!(replace_one("écolour", &RawPair::new("colour", "color")), "écolor");
}

#[test]
fn test_case_folding_letters_are_not_affixes() {
    // KELVIN SIGN and LONG S fold to ASCII `k` and `s`, yet are not ASCII
    let pair = RawPair::new("foo", "bar");
    assert_eq!(replace_one("\u{212A}foo", &pair), "\u{212A}bar");
    assert_eq!(
        replace_one("\u{212A}foo \u{17F}foo", &pair),
        "\u{212A}bar \u{17F}bar"
    );
    assert_eq!(replace_one("foo\u{17F}", &pair), "bar\u{17F}");
}

#[test]
fn test_splice_offset_skips_multibyte_whitespace() {
    let text = "foo\nbar\u{2003}baz";
    assert_eq!(
        replace_one(text, &RawPair::new("foo bar", "foobar")),
        "foobar\nbaz"
    );
}

#[test]
fn test_emoji_adjacent_to_match() {
    let text = "🎉foo🎉";
    assert_eq!(replace_one(text, &RawPair::new("foo", "bar")), "🎉bar🎉");
}

#[test]
fn test_invalid_bytes_pass_through() {
    let mappings: MappingSet = vec![("colour", "color")].into_iter().collect();
    let input = b"colour\xC3\x28colour\xF0\x90";
    let output = replace_all_bytes(input, &mappings);
    assert_eq!(output, b"color\xC3\x28color\xF0\x90".to_vec());
}

#[test]
fn test_valid_bytes_match_str_entry_point() {
    let mappings: MappingSet = vec![("hello world", "hey planet"), ("-ize", "-ise")]
        .into_iter()
        .collect();
    let text = "Hello\nWorld, realize it";
    let from_bytes = Replacer::new(&mappings).replace_bytes(text.as_bytes());
    assert_eq!(
        String::from_utf8(from_bytes.output).unwrap(),
        replace_all(text, &mappings)
    );
}

#[test]
fn test_from_value_from_lossy_decoding_is_skipped() {
    let lossy = String::from_utf8_lossy(b"caf\xE9").into_owned();
    let text = "caf\u{FFFD} stays";
    assert_eq!(replace_one(text, &RawPair::new(lossy, "cafe")), text);
}
