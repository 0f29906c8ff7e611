//! End-to-end replacement engine tests against the public API.

use tokrep::{
    closest_match, common_prefix, common_suffix, equal_count, replace_tokens, sort_by_key,
    EditBuffer, Token,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn empty_dictionary_replace_is_idempotent() {
    let mut dict: Vec<Token> = Vec::new();
    let mut buf = EditBuffer::from("a $string with $custom tokens");
    let replaced = replace_tokens(&mut dict, false, false, &mut buf);
    assert_eq!(replaced, 0);
    assert_eq!(buf, "a $string with $custom tokens");
}

#[test]
fn full_match_short_circuits() {
    let mut dict = vec![
        Token::new("Car", "1"),
        Token::new("Char", "2"),
        Token::new("Character", "3"),
        Token::new("Charm", "4"),
    ];
    sort_by_key(&mut dict);
    // The source is exactly one key with nothing following.
    for token in dict.clone() {
        let source = chars(&token.key);
        let found = closest_match(&source, 0, &dict, true).expect("exact key must match");
        assert_eq!(found.value, token.value, "wrong entry for key {:?}", token.key);
    }
}

#[test]
fn longest_match_wins_over_shorter_stems() {
    let mut dict = vec![
        Token::new("Car", "1"),
        Token::new("Char", "2"),
        Token::new("Character", "3"),
        Token::new("Charm", "4"),
        Token::new("Csharp", "5"),
    ];
    sort_by_key(&mut dict);
    let source = chars("Character");
    let found = closest_match(&source, 0, &dict, true).expect("should match");
    assert_eq!(found.key, "Character");
    assert_eq!(found.value, "3");
}

#[test]
fn sorted_and_unsorted_strategies_agree() {
    let mut unsorted = vec![
        Token::new("Charm", "4"),
        Token::new("Car", "1"),
        Token::new("Csharp", "5"),
        Token::new("Character", "3"),
        Token::new("Char", "2"),
    ];
    sort_by_key(&mut unsorted);
    let sorted = unsorted;

    // Ties break by scan order, so the linear scan runs over the sorted copy
    // — same data, different search strategy.
    for text in ["Character", "Charming", "Carpets", "Csharp!", "Chapel", "zzz"] {
        let source = chars(text);
        let via_sorted = closest_match(&source, 0, &sorted, true);
        let via_scan = closest_match(&source, 0, &sorted, false);
        assert_eq!(
            via_sorted.map(|t| t.key.as_str()),
            via_scan.map(|t| t.key.as_str()),
            "strategies disagree on {text:?}"
        );
    }
}

#[test]
fn common_prefix_examples() {
    let strings = ["alpha, beta, gamma", "alphabet", "alpine"];
    assert_eq!(common_prefix(&strings, 0), "alp");
    assert_eq!(common_prefix(&strings, 2), "p");
}

#[test]
fn common_suffix_examples() {
    assert_eq!(common_suffix(&["sing", "alphabetizing", "-ing"], 0), "ing");
}

#[test]
fn token_replacement_end_to_end() {
    let mut dict = vec![
        Token::new("$str", "token"),
        Token::new("$string", "String"),
        Token::new("$custom", "infinite"),
        Token::new("replace values", "others"),
    ];
    let mut buf = EditBuffer::from("a $string with $custom tokens and replace values");
    replace_tokens(&mut dict, false, false, &mut buf);
    assert_eq!(buf, "a String with infinite tokens and others");
}

#[test]
fn empty_buffer_sees_zero_replacements() {
    let mut dict = vec![Token::new("$a", "1"), Token::new("$b", "2")];
    let mut buf = EditBuffer::new();
    assert_eq!(replace_tokens(&mut dict, false, false, &mut buf), 0);
    assert!(buf.is_empty());
}

#[test]
fn empty_key_entry_never_matches() {
    let mut dict = vec![Token::new("", "boom")];
    let mut buf = EditBuffer::from("must not loop or change");
    assert_eq!(replace_tokens(&mut dict, false, false, &mut buf), 0);
    assert_eq!(buf, "must not loop or change");
}

#[test]
fn sorting_side_effect_is_observable() {
    let mut dict = vec![
        Token::new("$string", "String"),
        Token::new("$custom", "infinite"),
        Token::new("$str", "token"),
    ];
    let mut buf = EditBuffer::from("anything");
    replace_tokens(&mut dict, false, false, &mut buf);
    let keys: Vec<&str> = dict.iter().map(|t| t.key.as_str()).collect();
    assert_eq!(keys, ["$custom", "$str", "$string"]);
}

#[test]
fn equal_count_drives_matching() {
    let a = chars("Character");
    let b = chars("Charm");
    assert_eq!(equal_count(a.as_slice(), 0, b.as_slice(), 0, None), 4);
    assert_eq!(equal_count(a.as_slice(), 1, b.as_slice(), 1, None), 3);
}

#[test]
fn replacement_resumes_after_inserted_value() {
    // Adjacent tokens with values of different lengths than their keys.
    let mut dict = vec![Token::new("$x", "long-value"), Token::new("$yy", "z")];
    let mut buf = EditBuffer::from("$x$yy$x");
    let replaced = replace_tokens(&mut dict, false, false, &mut buf);
    assert_eq!(buf, "long-valuezlong-value");
    assert_eq!(replaced, 3);
}
