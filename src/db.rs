// connexion BD + création des tables

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::config::DatabaseConfig;
use crate::models::{bid_list, curve_point, rating, rule_name, trade, users};

pub async fn establish_connection(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    // SQLite en mémoire: une seule connexion, sinon chaque connexion voit une base vide
    if config.url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

/// Crée les six tables si elles n'existent pas (pas de clé étrangère entre elles)
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, bid_list::Entity).await?;
    create_table(db, &schema, curve_point::Entity).await?;
    create_table(db, &schema, rating::Entity).await?;
    create_table(db, &schema, rule_name::Entity).await?;
    create_table(db, &schema, trade::Entity).await?;
    create_table(db, &schema, users::Entity).await?;

    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(db.get_database_backend().build(&statement)).await?;
    tracing::debug!("table ready: {}", entity.table_name());
    Ok(())
}
