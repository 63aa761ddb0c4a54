use super::*;
use crate::content::tables::PALETTES;

#[test]
fn wall_has_fixed_card_count_with_sequential_ids() {
    let cards = wall_cards();
    assert_eq!(cards.len(), WALL_CARD_COUNT);
    for (i, c) in cards.iter().enumerate() {
        assert_eq!(c.id, i);
    }
}

#[test]
fn palettes_and_copy_cycle_through_tables() {
    let cards = wall_cards();
    assert_eq!(cards[0].palette, &PALETTES[0]);
    assert_eq!(cards[3].palette.name, "Blue");
    assert_eq!(cards[10].palette, cards[0].palette);
    assert_eq!(cards[0].headline, "Create beautiful social cards");
    assert_eq!(cards[19].headline, "Design without limits");
    assert_eq!(cards[12].body, cards[2].body);
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(wall_cards(), wall_cards());
}

#[test]
fn image_url_steps_through_variants() {
    let card = wall_cards()[4];
    let url = |frame| card.image_url(frame);
    assert!(url(0).ends_with("random=5"));
    assert_eq!(url(59), url(0));
    assert!(url(60).ends_with("random=25"));
    assert!(url(120).ends_with("random=45"));
    assert_eq!(url(180), url(0));
    assert_eq!(url(-1), url(120));
}
