use frenzy_db::prelude::*;
use sea_orm::EntityTrait;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn idx<E: EntityTrait>(s: &sea_orm::Schema, e: E) -> Vec<IndexCreateStatement> {
    s.create_index_from_entity(e)
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        let s = sea_orm::Schema::new(m.get_database_backend());
        // Parents first, the foreign keys are checked on insert.
        m.create_table(s.create_table_from_entity(Games)).await?;
        m.create_table(s.create_table_from_entity(Matches)).await?;
        m.create_table(s.create_table_from_entity(MatchRegistrations))
            .await?;
        m.create_table(s.create_table_from_entity(Notifications))
            .await?;
        m.create_table(s.create_table_from_entity(Transactions))
            .await?;
        let s = &s;
        let all_idx = [
            idx(s, Games),
            idx(s, Matches),
            idx(s, MatchRegistrations),
            idx(s, Notifications),
            idx(s, Transactions),
        ]
        .into_iter()
        .flatten();
        for i in all_idx {
            m.create_index(i).await?;
        }
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Transactions).if_exists().to_owned())
            .await
            .inspect_err(log_err("drop transactions"))?;
        m.drop_table(Table::drop().table(Notifications).if_exists().to_owned())
            .await
            .inspect_err(log_err("drop notifications"))?;
        m.drop_table(
            Table::drop()
                .table(MatchRegistrations)
                .if_exists()
                .to_owned(),
        )
        .await
        .inspect_err(log_err("drop match_registrations"))?;
        m.drop_table(Table::drop().table(Matches).if_exists().to_owned())
            .await
            .inspect_err(log_err("drop matches"))?;
        m.drop_table(Table::drop().table(Games).if_exists().to_owned())
            .await
            .inspect_err(log_err("drop games"))?;
        Ok(())
    }
}

fn log_err<'a>(ctx: &'a str) -> impl FnOnce(&DbErr) + 'a {
    move |e| {
        eprintln!("{ctx}: {e}");
    }
}
