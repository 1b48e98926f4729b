use crate::css::OrderedRule;
use std::cmp::Ordering;

/// Total order over generated rules: order key, then selector length, then
/// the selector itself.
pub fn compare_rules(left: &OrderedRule, right: &OrderedRule) -> Ordering {
    left.order
        .cmp(&right.order)
        .then_with(|| left.selector().len().cmp(&right.selector().len()))
        .then_with(|| left.selector().cmp(right.selector()))
}

/// Stable sort, so rules that compare equal (forked branches of one token)
/// keep the order the pipeline produced them in.
pub fn sort_rules(rules: &mut [OrderedRule]) {
    rules.sort_by(compare_rules);
}

pub fn render_all(rules: &[OrderedRule]) -> String {
    rules.iter().map(|rule| rule.rule.render()).collect()
}

#[cfg(test)]
mod tests {
    use super::{compare_rules, render_all, sort_rules};
    use crate::css::{Declaration, OrderedRule};
    use std::cmp::Ordering;

    fn ordered(selector: &str, order: i32) -> OrderedRule {
        let mut rule =
            OrderedRule::from_declarations(vec![Declaration::new("display", "block")], order);
        rule.rule.selector = selector.to_string();
        rule
    }

    #[test]
    fn order_key_wins_over_selector() {
        assert_eq!(
            compare_rules(&ordered("zzzzzz", 1), &ordered("a", 2)),
            Ordering::Less
        );
    }

    #[test]
    fn shorter_selector_sorts_first_on_equal_order() {
        assert_eq!(
            compare_rules(&ordered("columns-12", 200), &ordered("columns-2", 200)),
            Ordering::Greater
        );
    }

    #[test]
    fn lexicographic_tie_break() {
        assert_eq!(
            compare_rules(&ordered("float-end", 900), &ordered("float-top", 900)),
            Ordering::Less
        );
        assert_eq!(
            compare_rules(&ordered("block", 800), &ordered("block", 800)),
            Ordering::Equal
        );
    }

    #[test]
    fn comparator_is_antisymmetric_and_transitive() {
        let rules = vec![
            ordered("b", 1),
            ordered("aa", 1),
            ordered("a", 1),
            ordered("a", 0),
            ordered("ccc", 2),
        ];
        for a in &rules {
            for b in &rules {
                assert_eq!(compare_rules(a, b), compare_rules(b, a).reverse());
                for c in &rules {
                    if compare_rules(a, b) == Ordering::Less
                        && compare_rules(b, c) == Ordering::Less
                    {
                        assert_eq!(compare_rules(a, c), Ordering::Less);
                    }
                }
            }
        }
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut rules = vec![
            ordered("grow", 1500),
            ordered("aspect-video", 100),
            ordered("block", 800),
            ordered("aspect-auto", 100),
        ];
        sort_rules(&mut rules);
        let once = rules.clone();
        sort_rules(&mut rules);
        assert_eq!(rules, once);

        let selectors = rules.iter().map(|rule| rule.selector()).collect::<Vec<_>>();
        assert_eq!(
            selectors,
            vec!["aspect-auto", "aspect-video", "block", "grow"]
        );
    }

    #[test]
    fn render_all_concatenates_in_sequence() {
        let css = render_all(&[ordered("a", 0), ordered("b", 0)]);
        assert_eq!(css, ".a {\n  display: block;\n}\n.b {\n  display: block;\n}\n");
    }
}
