//! Movement компоненты: navigation intent

use bevy::prelude::*;

/// Navigation intent for an actor (executed by the host pathfinding layer)
///
/// Архитектура:
/// - Combat systems write the destination (high-level intent)
/// - Host layer reads it and steers the body
/// - `enabled == false` → agent frozen in place, destination requests ignored
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NavigationAgent {
    destination: Option<Vec3>,
    enabled: bool,
}

impl Default for NavigationAgent {
    fn default() -> Self {
        Self {
            destination: None,
            enabled: true,
        }
    }
}

impl NavigationAgent {
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Request a move; returns false if the agent is frozen.
    pub fn set_destination(&mut self, point: Vec3) -> bool {
        if !self.enabled {
            return false;
        }
        self.destination = Some(point);
        true
    }

    /// Freeze the agent (clears the pending destination).
    pub fn disable(&mut self) {
        self.enabled = false;
        self.destination = None;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_agent_ignores_destination() {
        let mut agent = NavigationAgent::default();
        assert!(agent.set_destination(Vec3::X));
        assert_eq!(agent.destination(), Some(Vec3::X));

        agent.disable();
        assert!(!agent.set_destination(Vec3::Y));
        assert_eq!(agent.destination(), None);
        assert!(!agent.is_enabled());

        agent.enable();
        assert!(agent.set_destination(Vec3::Y));
    }
}
