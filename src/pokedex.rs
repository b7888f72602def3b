use crate::creature::Creature;
use schema::ElementalType;

/// An in-memory catalog of creatures, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    creatures: Vec<Creature>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    /// First creature whose name matches exactly.
    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.creatures.iter().find(|creature| creature.name() == name)
    }

    /// Mutable access so a cataloged creature can be sent into battle.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|creature| creature.name() == name)
    }

    /// Creatures carrying every one of the given types.
    pub fn search_by_type(&self, types: &[ElementalType]) -> Vec<&Creature> {
        self.creatures
            .iter()
            .filter(|creature| types.iter().all(|element| creature.has_type(*element)))
            .collect()
    }

    /// Case-insensitive substring match on the name.
    pub fn search_by_name(&self, query: &str) -> Vec<&Creature> {
        let query = query.to_lowercase();
        self.creatures
            .iter()
            .filter(|creature| creature.name().to_lowercase().contains(&query))
            .collect()
    }

    /// Creatures whose total stats equal `total`. A negative total is not a
    /// valid query and yields `None`.
    pub fn search_by_total_stats(&self, total: i64) -> Option<Vec<&Creature>> {
        if total < 0 {
            return None;
        }
        Some(
            self.creatures
                .iter()
                .filter(|creature| creature.total_stats() == total)
                .collect(),
        )
    }
}

impl FromIterator<Creature> for Pokedex {
    fn from_iter<I: IntoIterator<Item = Creature>>(iter: I) -> Self {
        Self {
            creatures: iter.into_iter().collect(),
        }
    }
}
