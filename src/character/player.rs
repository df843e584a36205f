use super::attributes::{compute_rating, Attribute, Attributes, Position};
use crate::core::constants::PLAYER_STARTING_AGE;
use serde::{Deserialize, Serialize};

/// The simulated athlete. `rating` is a cache of `compute_rating` and is only
/// ever written through [`Player::refresh_rating`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub age: u32,
    pub attributes: Attributes,
    rating: u32,
    pub total_xp: u64,
    pub total_fame: u64,
}

impl Player {
    pub fn new(name: String, position: Position, legacy_bonus: u32) -> Self {
        use uuid::Uuid;

        let attributes = Attributes::starting(position, legacy_bonus);
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            position,
            age: PLAYER_STARTING_AGE,
            rating: compute_rating(position, &attributes),
            attributes,
            total_xp: 0,
            total_fame: 0,
        }
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn refresh_rating(&mut self) -> u32 {
        self.rating = compute_rating(self.position, &self.attributes);
        self.rating
    }

    /// Permanently raises one attribute and recomputes the rating.
    pub fn raise_attribute(&mut self, attr: Attribute, amount: u32) {
        self.attributes.add(attr, amount);
        self.refresh_rating();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_rating_matches_attributes() {
        for position in Position::ALL {
            let player = Player::new("Rookie".to_string(), position, 0);
            assert_eq!(player.rating(), compute_rating(position, &player.attributes));
            assert_eq!(player.age, 22);
        }
    }

    #[test]
    fn test_raise_attribute_recomputes_rating() {
        let mut player = Player::new("Rookie".to_string(), Position::WR, 0);
        let before = player.rating();
        player.raise_attribute(Attribute::Catching, 20);
        assert!(player.rating() > before);
    }

    #[test]
    fn test_player_ids_unique() {
        let a = Player::new("A".to_string(), Position::QB, 0);
        let b = Player::new("B".to_string(), Position::QB, 0);
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36);
    }
}
