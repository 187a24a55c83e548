use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Copy this frame's input sample onto each paddle's intent
pub fn ingest_inputs(world: &mut World, input: &FrameInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = input.intent(paddle.side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Table};

    #[test]
    fn test_ingest_inputs_routes_by_side() {
        let mut world = World::new();
        let table = Table::default();
        let top = create_paddle(&mut world, &table, Side::Top, glam::IVec2::new(80, 15));
        let bottom = create_paddle(&mut world, &table, Side::Bottom, glam::IVec2::new(80, 15));

        let mut input = FrameInput::new();
        input.top.left = true;
        input.bottom.right = true;
        ingest_inputs(&mut world, &input);

        let top_intent = *world.get::<&PaddleIntent>(top).unwrap();
        let bottom_intent = *world.get::<&PaddleIntent>(bottom).unwrap();
        assert!(top_intent.left && !top_intent.right);
        assert!(bottom_intent.right && !bottom_intent.left);
    }

    #[test]
    fn test_ingest_inputs_clears_previous_intent() {
        let mut world = World::new();
        let table = Table::default();
        let top = create_paddle(&mut world, &table, Side::Top, glam::IVec2::new(80, 15));

        let mut input = FrameInput::new();
        input.top.right = true;
        ingest_inputs(&mut world, &input);
        ingest_inputs(&mut world, &FrameInput::new());

        assert_eq!(*world.get::<&PaddleIntent>(top).unwrap(), PaddleIntent::new());
    }
}
