use crate::Colors;

#[test]
fn labels_are_styled_by_kind() {
    let c = Colors::ON;

    assert_eq!(c.for_label("<expr>"), c.nonterminal);
    assert_eq!(c.for_label("x"), c.terminal);
    assert_eq!(c.for_label("<"), c.terminal);
}

#[test]
fn disabled_palette_is_empty() {
    let c = Colors::new(false);

    assert_eq!(c.for_label("<expr>"), "");
    assert_eq!(c.for_label("x"), "");
    assert_eq!(c.dim, "");
    assert_eq!(c.reset, "");
}
