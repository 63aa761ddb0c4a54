use crate::animation::spring::SpringConfig;
use crate::components::social_card::{SocialCardProps, social_card};
use crate::eval::context::SceneCtx;
use crate::scene::node::Node;

const BODY: &str =
    "Design Twitter/X-style social cards in seconds. Customize colors, fonts, images, and layout.";

/// Spring scaling the card into view.
pub const REVEAL_SPRING: SpringConfig = SpringConfig::new(15.0, 100.0);
/// Resting scale of the revealed card.
pub const REVEAL_SCALE: f64 = 0.9;

/// The stock card springs in with its staggered entrance animation.
pub fn card_reveal(ctx: &SceneCtx<'_>) -> Node {
    let scale = ctx.spring(0.0, REVEAL_SPRING) * REVEAL_SCALE;
    let card = SocialCardProps {
        body: BODY.to_owned(),
        width: 450.0,
        animated: true,
        ..SocialCardProps::default()
    };

    super::stage(ctx).center().child(
        Node::container()
            .key("reveal")
            .scale(scale)
            .child(social_card(ctx, &card)),
    )
}
