use diesel::prelude::*;

use crate::domain::craft::{Craft, NewCraft};
use crate::domain::types::CraftId;
use crate::models::craft::{Craft as DbCraft, NewCraft as DbNewCraft};
use crate::repository::{
    CraftReader, CraftWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CraftReader for DieselRepository {
    fn list_crafts(&self) -> RepositoryResult<Vec<Craft>> {
        use crate::schema::crafts;

        let mut conn = self.conn()?;

        let items = crafts::table
            .order((crafts::name.asc(), crafts::id.asc()))
            .load::<DbCraft>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Craft>, _>>()?;

        Ok(items)
    }

    fn get_craft_by_id(&self, id: CraftId) -> RepositoryResult<Craft> {
        use crate::schema::crafts;

        let mut conn = self.conn()?;

        let craft = crafts::table
            .find(id.get())
            .first::<DbCraft>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(craft.try_into()?)
    }

    fn count_crafts(&self) -> RepositoryResult<usize> {
        use crate::schema::crafts;

        let mut conn = self.conn()?;

        let total = crafts::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }
}

// Writes run in `BEGIN IMMEDIATE` transactions: the write lock is taken up
// front, so concurrent writers wait on `busy_timeout` instead of failing.
impl CraftWriter for DieselRepository {
    fn create_craft(&self, craft: &NewCraft) -> RepositoryResult<Craft> {
        use crate::schema::crafts;

        let mut conn = self.conn()?;
        let db_craft: DbNewCraft = craft.into();

        let created = conn.immediate_transaction(|conn| {
            diesel::insert_into(crafts::table)
                .values(&db_craft)
                .get_result::<DbCraft>(conn)
        })?;

        Ok(created.try_into()?)
    }

    fn create_crafts(&self, crafts: &[NewCraft]) -> RepositoryResult<Vec<Craft>> {
        use crate::schema::crafts;

        let mut conn = self.conn()?;
        let db_crafts: Vec<DbNewCraft> = crafts.iter().map(Into::into).collect();

        let created = conn.immediate_transaction(|conn| {
            let mut created = Vec::with_capacity(db_crafts.len());
            for craft in &db_crafts {
                created.push(
                    diesel::insert_into(crafts::table)
                        .values(craft)
                        .get_result::<DbCraft>(conn)?,
                );
            }
            QueryResult::Ok(created)
        })?;

        let items = created
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Craft>, _>>()?;

        Ok(items)
    }

    fn update_craft(&self, id: CraftId, craft: &NewCraft) -> RepositoryResult<Craft> {
        use crate::schema::crafts;

        let mut conn = self.conn()?;
        let db_craft: DbNewCraft = craft.into();

        let updated = conn
            .immediate_transaction(|conn| {
                diesel::update(crafts::table.find(id.get()))
                    .set(&db_craft)
                    .get_result::<DbCraft>(conn)
                    .optional()
            })?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.try_into()?)
    }

    fn delete_craft(&self, id: CraftId) -> RepositoryResult<()> {
        use crate::schema::crafts;

        let mut conn = self.conn()?;

        let affected = conn.immediate_transaction(|conn| {
            diesel::delete(crafts::table.find(id.get())).execute(conn)
        })?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
