use std::sync::Mutex;

use chrono::DateTime;

use crate::domain::craft::{Craft, NewCraft};
use crate::domain::types::CraftId;
use crate::repository::{CraftReader, CraftWriter, RepositoryError, RepositoryResult};

#[derive(Default)]
struct State {
    crafts: Vec<Craft>,
    next_id: i32,
}

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<State>,
}

impl TestRepository {
    pub fn new(crafts: Vec<Craft>) -> Self {
        let next_id = crafts.iter().map(|c| c.id.get()).max().unwrap_or(0);
        Self {
            state: Mutex::new(State { crafts, next_id }),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

fn materialize(id: CraftId, craft: &NewCraft, date_created: chrono::NaiveDateTime) -> Craft {
    Craft {
        id,
        name: craft.name.clone(),
        description: craft.description.clone(),
        material: craft.material.clone(),
        artist_name: craft.artist_name.clone(),
        price: craft.price,
        stock_quantity: craft.stock_quantity,
        date_created,
    }
}

impl CraftReader for TestRepository {
    fn list_crafts(&self) -> RepositoryResult<Vec<Craft>> {
        let mut items = self.state().crafts.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    fn get_craft_by_id(&self, id: CraftId) -> RepositoryResult<Craft> {
        self.state()
            .crafts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    fn count_crafts(&self) -> RepositoryResult<usize> {
        Ok(self.state().crafts.len())
    }
}

impl CraftWriter for TestRepository {
    fn create_craft(&self, craft: &NewCraft) -> RepositoryResult<Craft> {
        let mut state = self.state();
        state.next_id += 1;
        let id = CraftId::new(state.next_id)?;
        let created = materialize(
            id,
            craft,
            DateTime::from_timestamp(i64::from(id.get()), 0)
                .unwrap()
                .naive_utc(),
        );
        state.crafts.push(created.clone());
        Ok(created)
    }

    fn create_crafts(&self, crafts: &[NewCraft]) -> RepositoryResult<Vec<Craft>> {
        let mut state = self.state();
        let first_id = state.next_id;
        let created = crafts
            .iter()
            .enumerate()
            .map(|(offset, craft)| {
                let id = CraftId::new(first_id + offset as i32 + 1)?;
                Ok(materialize(
                    id,
                    craft,
                    DateTime::from_timestamp(i64::from(id.get()), 0)
                        .unwrap()
                        .naive_utc(),
                ))
            })
            .collect::<RepositoryResult<Vec<Craft>>>()?;
        state.next_id += created.len() as i32;
        state.crafts.extend(created.iter().cloned());
        Ok(created)
    }

    fn update_craft(&self, id: CraftId, craft: &NewCraft) -> RepositoryResult<Craft> {
        let mut state = self.state();
        let existing = state
            .crafts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        *existing = materialize(id, craft, existing.date_created);
        Ok(existing.clone())
    }

    fn delete_craft(&self, id: CraftId) -> RepositoryResult<()> {
        let mut state = self.state();
        let before = state.crafts.len();
        state.crafts.retain(|c| c.id != id);
        if state.crafts.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
