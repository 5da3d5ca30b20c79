use super::*;

fn value_of<'a>(styles: &'a [StyleDecl], property: &str) -> Option<&'a str> {
    styles.iter().find(|s| s.property == property).map(|s| s.value.as_str())
}

#[test]
fn phase_defaults_to_hidden() {
    assert_eq!(RevealPhase::default(), RevealPhase::Hidden);
}

#[test]
fn staged_card_is_displayed_transparent_and_offset() {
    let styles = staged_styles(&PageConfig::default());
    assert_eq!(value_of(&styles, "display"), Some("block"));
    assert_eq!(value_of(&styles, "opacity"), Some("0"));
    assert_eq!(value_of(&styles, "transform"), Some("translateY(8px)"));
    assert_eq!(value_of(&styles, "transition"), None);
}

#[test]
fn shown_card_transitions_to_rest() {
    let styles = shown_styles(&PageConfig::default());
    assert_eq!(value_of(&styles, "transition"), Some("all 0.35s ease"));
    assert_eq!(value_of(&styles, "opacity"), Some("1"));
    assert_eq!(value_of(&styles, "transform"), Some("translateY(0)"));
}

#[test]
fn transition_is_set_before_final_values() {
    let styles = shown_styles(&PageConfig::default());
    assert_eq!(styles[0].property, "transition");
}

#[test]
fn offset_follows_config() {
    let cfg = PageConfig { reveal_offset_px: 20, ..PageConfig::default() };
    assert_eq!(value_of(&staged_styles(&cfg), "transform"), Some("translateY(20px)"));
}
