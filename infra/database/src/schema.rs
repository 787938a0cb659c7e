use crate::error::DatabaseError;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

/// Idempotent definition of the word table.
///
/// `word` holds the dictionary word (ordered-letter form), `alpha` its canonical
/// sorted signature. The record id is the word itself.
const WORD_SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS word SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS word ON word TYPE string;
    DEFINE FIELD IF NOT EXISTS alpha ON word TYPE string;
    DEFINE INDEX IF NOT EXISTS word_alpha ON word FIELDS alpha;
";

pub(crate) async fn bootstrap(db: &Surreal<Any>) -> Result<(), DatabaseError> {
    db.query(WORD_SCHEMA)
        .await?
        .check()
        .map_err(|e| DatabaseError::Schema {
            message: e.to_string().into(),
            context: Some("Defining word table".into()),
        })?;
    Ok(())
}
