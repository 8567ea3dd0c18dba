pub mod clock;
pub mod enemy_ai;
pub mod interaction;
pub mod movement;
pub mod tick;
pub mod world;

pub use clock::SimulationClock;
pub use interaction::{available_prompts, can_engage, can_talk, InteractionPrompts};
pub use movement::MovementIntent;
pub use tick::run_simulation_tick;
pub use world::World;
