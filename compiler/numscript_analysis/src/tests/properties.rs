use proptest::prelude::*;

use crate::check_source;

fn fragment() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("vars { account $a monetary $m portion $p }"),
        Just("send [USD 0] from @a to @a"),
        Just("send $m from @world to $a"),
        Just("send $x from @a to @b"),
        Just("allocate [USD 10] from @a { 1/2 to @b 2/3 to @c }"),
        Just("allocate $m from @a { $p to @b remaining to @c remaining to @d }"),
        Just("if true { send [USD 1] from @a to @b } else { }"),
        Just("set_tx_meta(\"k\", 1 == \"x\")"),
        Just("send [USD 1] from @a }"),
        Just("\n"),
    ]
}

proptest! {
    #[test]
    fn diagnostics_are_sorted_by_start(parts in proptest::collection::vec(fragment(), 0..12)) {
        let source = parts.join("\n");
        let result = check_source(&source);
        for pair in result.diagnostics.windows(2) {
            prop_assert!(pair[0].range.start <= pair[1].range.start);
        }
    }

    #[test]
    fn analysis_is_deterministic(parts in proptest::collection::vec(fragment(), 0..12)) {
        let source = parts.join("\n");
        prop_assert_eq!(check_source(&source), check_source(&source));
    }

    #[test]
    fn analysis_never_panics(source in "\\PC{0,80}") {
        let _ = check_source(&source);
    }
}
