//! Property-based tests for the replacement entry points

use proptest::prelude::*;
use rephrase_core::{replace_all, replace_one, MappingSet, RawPair, Replacer};

proptest! {
    #[test]
    fn empty_mapping_set_is_identity(text in any::<String>()) {
        prop_assert_eq!(replace_all(&text, &MappingSet::new()), text);
    }

    #[test]
    fn absent_phrase_is_identity(text in "[a-m \n\t.,]{0,80}") {
        let pair = RawPair::new("xyz", "replacement");
        prop_assert_eq!(replace_one(&text, &pair), text);
    }

    #[test]
    fn arbitrary_pairs_never_panic(
        text in any::<String>(),
        from in "[-\\\\a-zA-Z ]{0,8}",
        to in "[-\\\\a-zA-Z ]{0,8}",
    ) {
        let _ = replace_one(&text, &RawPair::new(from, to));
    }

    #[test]
    fn replacing_with_itself_keeps_lowercase_text(text in "[a-z ]{0,60}") {
        let pair = RawPair::new("ab", "ab");
        prop_assert_eq!(replace_one(&text, &pair), text);
    }

    #[test]
    fn bytes_entry_point_agrees_on_valid_text(text in any::<String>()) {
        let mappings: MappingSet = vec![("foo bar", "baz"), ("-ing", "-ed")]
            .into_iter()
            .collect();
        let replacer = Replacer::new(&mappings);
        let from_bytes = replacer.replace_bytes(text.as_bytes()).output;
        prop_assert_eq!(from_bytes, replacer.replace(&text).output.into_bytes());
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let mappings: MappingSet = vec![("a", "b")].into_iter().collect();
        let _ = Replacer::new(&mappings).replace_bytes(&bytes);
    }
}
