use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate velocities into positions, applying friction first.
///
/// Frozen bodies are skipped entirely.
pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    let delta = time.delta;
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        if rigidbody.friction > 0.0 {
            let damping = (1.0 - rigidbody.friction * delta).max(0.0);
            rigidbody.velocity *= damping;
        }
        position.pos += rigidbody.velocity * delta;
    }
}
